use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use vafcheck_core::consts::{DELIMITER, PERCENT_SIGN, REQUIRED_TRUTH_COLUMNS};
use vafcheck_core::errors::VafCheckError;
use vafcheck_core::models::{TruthSet, TruthVariant};
use vafcheck_core::utils::get_dynamic_reader;

///
/// Read the truth set of expected mutations.
///
/// The header must name every required column (any order). Rows are then read
/// positionally as chr, position, ref, alt, gene, hgvsp, vaf; any further columns
/// are carried through untouched.
///
/// # Arguments
/// - path: path to the tab-separated truth file
///
pub fn read_known_tsv(path: &Path) -> Result<TruthSet> {
    let reader = get_dynamic_reader(path)?;
    let mut lines = reader.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| VafCheckError::EmptyFile(path.display().to_string()))?
        .with_context(|| format!("Failed to read header of {:?}", path))?;

    let header = parse_header(&header_line)?;

    let mut variants = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line = line.with_context(|| format!("Failed to read {:?}", path))?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        variants.push(parse_truth_row(&line, idx + 2, header.len())?);
    }

    debug!("Read {} truth variants from {:?}", variants.len(), path);

    Ok(TruthSet { header, variants })
}

fn parse_header(line: &str) -> Result<Vec<String>, VafCheckError> {
    let header: Vec<String> = line
        .split(DELIMITER)
        .map(|name| name.trim().to_string())
        .collect();

    let missing: Vec<String> = REQUIRED_TRUTH_COLUMNS
        .iter()
        .filter(|required| !header.iter().any(|name| name == *required))
        .map(|required| required.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(VafCheckError::MissingColumns(missing));
    }

    let leading: Vec<&str> = header
        .iter()
        .take(REQUIRED_TRUTH_COLUMNS.len())
        .map(String::as_str)
        .collect();
    if leading != REQUIRED_TRUTH_COLUMNS {
        warn!(
            "Truth header columns are not in the order {}; rows are still read in that order",
            REQUIRED_TRUTH_COLUMNS.join(", ")
        );
    }

    Ok(header)
}

/// Parse one data row. `extra` is padded or cut to the header width so report rows stay
/// aligned with the header.
fn parse_truth_row(
    line: &str,
    line_nr: usize,
    header_len: usize,
) -> Result<TruthVariant, VafCheckError> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

    if fields.len() < REQUIRED_TRUTH_COLUMNS.len() {
        return Err(VafCheckError::TruncatedRow {
            line: line_nr,
            found: fields.len(),
            expected: REQUIRED_TRUTH_COLUMNS.len(),
        });
    }

    let position = fields[1]
        .parse::<u64>()
        .map_err(|_| VafCheckError::InvalidField {
            line: line_nr,
            field: "position",
            value: fields[1].to_string(),
        })?;

    let raw_vaf = fields[6];
    let expected_vaf = raw_vaf
        .strip_suffix(PERCENT_SIGN)
        .unwrap_or(raw_vaf)
        .trim_end()
        .parse::<f64>()
        .map_err(|_| VafCheckError::InvalidField {
            line: line_nr,
            field: "vaf",
            value: raw_vaf.to_string(),
        })?;

    let extra_len = header_len.saturating_sub(REQUIRED_TRUTH_COLUMNS.len());
    let mut extra: Vec<String> = fields[REQUIRED_TRUTH_COLUMNS.len()..]
        .iter()
        .map(|f| f.to_string())
        .collect();
    if extra.len() != extra_len {
        warn!(
            "Line {}: {} fields for a {} column header, extra columns adjusted to fit",
            line_nr,
            fields.len(),
            header_len
        );
        extra.resize(extra_len, String::new());
    }

    Ok(TruthVariant {
        chr: fields[0].to_string(),
        position,
        ref_allele: fields[2].to_string(),
        alt_allele: fields[3].to_string(),
        gene: fields[4].to_string(),
        hgvsp: fields[5].to_string(),
        expected_vaf,
        extra,
    })
}
