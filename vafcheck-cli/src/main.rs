mod cli;
mod handlers;

use anyhow::Result;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "vafcheck";
}

fn main() -> Result<()> {
    let matches = cli::create_vafcheck_cli().get_matches();

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(if matches.get_flag(cli::VERBOSE_ARG) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .chain(std::io::stderr())
        .apply()?;

    handlers::run_vafcheck(&matches)?;

    Ok(())
}
