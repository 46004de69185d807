use clap::{Arg, ArgAction, Command};

pub const INPUT_VCF_ARG: &str = "input_vcf";
pub const KNOWN_TSV_ARG: &str = "known_tsv";
pub const OUTPUT_TSV_ARG: &str = "output_tsv";
pub const VERBOSE_ARG: &str = "verbose";

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("PATH")
        .required(true)
        .help(help)
}

pub fn create_vafcheck_cli() -> Command {
    Command::new(crate::consts::BIN_NAME)
        .bin_name(crate::consts::BIN_NAME)
        .version(crate::consts::VERSION)
        .about("Evaluate a VCF file against a list of known mutations.")
        .arg(path_arg(
            INPUT_VCF_ARG,
            "Query variants in VCF format (gzipped when ending in .gz)",
        ))
        .arg(path_arg(KNOWN_TSV_ARG, "Known variants in TSV format"))
        .arg(path_arg(
            OUTPUT_TSV_ARG,
            "Output results in TSV format; a .png plot is written next to it",
        ))
        .arg(
            Arg::new(VERBOSE_ARG)
                .short('v')
                .long(VERBOSE_ARG)
                .help("Print debug messages")
                .action(ArgAction::SetTrue),
        )
}
