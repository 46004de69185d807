use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use vafcheck_core::consts::{DELIMITER, DETECTED_COL_NAME, FOUND_VAF_COL_NAME};
use vafcheck_core::models::EvaluatedVariant;

///
/// Write the annotated truth set to disk as a tab-separated report.
///
/// # Arguments
/// - path: the path to the report to create
/// - header: the truth set header, `found_vaf` and `detected` are appended
/// - evaluated: one row per truth record, in truth order
///
pub fn write_report(path: &Path, header: &[String], evaluated: &[EvaluatedVariant]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path).with_context(|| format!("Failed to create report: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    let delimiter = DELIMITER.to_string();

    let mut columns: Vec<&str> = header.iter().map(String::as_str).collect();
    columns.push(FOUND_VAF_COL_NAME);
    columns.push(DETECTED_COL_NAME);
    writeln!(writer, "{}", columns.join(&delimiter))?;

    for variant in evaluated {
        writeln!(writer, "{}", variant.fields().join(&delimiter))?;
    }

    writer.flush()?;
    info!("Wrote {} rows to {:?}", evaluated.len(), path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use vafcheck_core::models::TruthVariant;

    fn truth(position: u64, expected_vaf: f64) -> TruthVariant {
        TruthVariant {
            chr: "chr1".to_string(),
            position,
            ref_allele: "C".to_string(),
            alt_allele: "T".to_string(),
            gene: "GENE2".to_string(),
            hgvsp: "p.P2L".to_string(),
            expected_vaf,
            extra: vec![],
        }
    }

    #[rstest]
    fn test_write_report() {
        let header: Vec<String> = ["chr", "position", "ref", "alt", "gene", "hgvsp", "vaf"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let evaluated = vec![
            EvaluatedVariant {
                truth: truth(2000, 15.0),
                found_vaf: Some(17.25),
                detected: true,
            },
            EvaluatedVariant {
                truth: truth(3000, 20.5),
                found_vaf: None,
                detected: false,
            },
        ];

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("nested/dir/report.tsv");
        write_report(&path, &header, &evaluated).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "chr\tposition\tref\talt\tgene\thgvsp\tvaf\tfound_vaf\tdetected\n\
             chr1\t2000\tC\tT\tGENE2\tp.P2L\t15\t17.25\ttrue\n\
             chr1\t3000\tC\tT\tGENE2\tp.P2L\t20.5\t.\tfalse\n"
        );
    }

    #[rstest]
    fn test_write_empty_report() {
        let header = vec!["chr".to_string()];
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("report.tsv");
        write_report(&path, &header, &[]).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "chr\tfound_vaf\tdetected\n"
        );
    }
}
