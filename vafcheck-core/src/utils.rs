use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::{GZ_FILE_EXTENSION, PNG_FILE_EXTENSION};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// Compression is decided by the `.gz` extension only; the file content is not sniffed.
/// Both the call set and the truth TSV are opened through here, so either may be gzip'd.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZ_FILE_EXTENSION));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Path of the plot that accompanies a report: same directory and stem, `.png` extension.
///
pub fn plot_path_for(report_path: &Path) -> PathBuf {
    report_path.with_extension(PNG_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("out/results.tsv", "out/results.png")]
    #[case("results.tsv", "results.png")]
    #[case("/tmp/run.1/results", "/tmp/run.1/results.png")]
    fn test_plot_path_for(#[case] report: &str, #[case] expected: &str) {
        assert_eq!(plot_path_for(Path::new(report)), PathBuf::from(expected));
    }

    #[rstest]
    fn test_dynamic_reader_plain_and_gz() {
        let tempdir = tempfile::tempdir().unwrap();

        let plain = tempdir.path().join("calls.vcf");
        std::fs::write(&plain, "line one\nline two\n").unwrap();

        let gz = tempdir.path().join("calls.vcf.gz");
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b"line one\nline two\n").unwrap();
        encoder.finish().unwrap();

        let plain_lines: Vec<String> = get_dynamic_reader(&plain)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();
        let gz_lines: Vec<String> = get_dynamic_reader(&gz)
            .unwrap()
            .lines()
            .map(|l| l.unwrap())
            .collect();

        assert_eq!(plain_lines, vec!["line one", "line two"]);
        assert_eq!(plain_lines, gz_lines);
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let result = get_dynamic_reader(Path::new("does/not/exist.vcf"));
        assert!(result.is_err());
    }
}
