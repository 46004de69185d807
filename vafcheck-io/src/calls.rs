//! Variant call parsing.
//!
//! Reads a VCF file (plain text or gzipped) and turns every data line into a
//! [`CallVariant`], deriving the VAF of the first sample from its `AD` field.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};

use vafcheck_core::consts::{
    ALLELE_DEPTH_TAG, VAF_DECIMALS, VCF_COMMENT_PREFIX, VCF_FORMAT_DELIMITER, VCF_MIN_FIELDS,
    VCF_MISSING_VALUE,
};
use vafcheck_core::errors::VafCheckError;
use vafcheck_core::models::CallVariant;
use vafcheck_core::utils::get_dynamic_reader;

/// Read every data line of a VCF file into a call record, in file order.
pub fn read_call_set(path: &Path) -> Result<Vec<CallVariant>> {
    let mut reader = get_dynamic_reader(path)?;
    let mut calls = Vec::new();
    let mut line_buf = String::new();
    let mut line_nr = 0;

    loop {
        line_buf.clear();
        if reader
            .read_line(&mut line_buf)
            .with_context(|| format!("Failed to read VCF: {:?}", path))?
            == 0
        {
            break;
        }
        line_nr += 1;

        let line = line_buf.trim_end_matches('\n').trim_end_matches('\r');
        if line.starts_with(VCF_COMMENT_PREFIX) || line.is_empty() {
            continue;
        }

        calls.push(parse_call_line(line, line_nr)?);
    }

    let without_vaf = calls.iter().filter(|c| c.vaf.is_none()).count();
    if without_vaf > 0 {
        debug!("{} of {} calls carry no usable allele depth", without_vaf, calls.len());
    }
    debug!("Read {} calls from {:?}", calls.len(), path);

    Ok(calls)
}

fn parse_call_line(line: &str, line_nr: usize) -> Result<CallVariant, VafCheckError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < VCF_MIN_FIELDS {
        return Err(VafCheckError::TruncatedRow {
            line: line_nr,
            found: fields.len(),
            expected: VCF_MIN_FIELDS,
        });
    }

    let position = fields[1]
        .parse::<u64>()
        .map_err(|_| VafCheckError::InvalidField {
            line: line_nr,
            field: "POS",
            value: fields[1].to_string(),
        })?;

    let vaf = parse_allele_depth_vaf(fields[8], fields[9], line_nr)?;

    Ok(CallVariant {
        chr: fields[0].to_string(),
        position,
        ref_allele: fields[3].to_string(),
        alt_allele: fields[4].to_string(),
        vaf,
    })
}

///
/// Compute the VAF (percent, 3 decimals) from the `AD` entry of a sample.
///
/// Returns `Ok(None)` when the FORMAT has no `AD`, when the sample value is missing,
/// or when both depths are zero.
///
/// # Arguments
/// - format: the colon-separated FORMAT column
/// - sample: the colon-separated sample column matching `format`
/// - line_nr: line number used in error messages
///
pub fn parse_allele_depth_vaf(
    format: &str,
    sample: &str,
    line_nr: usize,
) -> Result<Option<f64>, VafCheckError> {
    let Some(ad_index) = format
        .split(VCF_FORMAT_DELIMITER)
        .position(|tag| tag == ALLELE_DEPTH_TAG)
    else {
        return Ok(None);
    };

    // trailing sample fields may be dropped
    let Some(ad) = sample.split(VCF_FORMAT_DELIMITER).nth(ad_index) else {
        return Ok(None);
    };
    if ad == VCF_MISSING_VALUE {
        return Ok(None);
    }

    let invalid = || VafCheckError::InvalidField {
        line: line_nr,
        field: "AD",
        value: ad.to_string(),
    };

    let depths = ad
        .split(',')
        .map(|d| d.trim().parse::<u64>())
        .collect::<Result<Vec<u64>, _>>()
        .map_err(|_| invalid())?;

    let &[ref_depth, alt_depth] = depths.as_slice() else {
        return Err(invalid());
    };

    let total = ref_depth.checked_add(alt_depth).ok_or_else(invalid)?;
    if total == 0 {
        warn!("Line {}: allele depth is 0,0, VAF left undefined", line_nr);
        return Ok(None);
    }

    let vaf = alt_depth as f64 / total as f64 * 100.0;
    let scale = 10f64.powi(VAF_DECIMALS);
    Ok(Some((vaf * scale).round() / scale))
}
