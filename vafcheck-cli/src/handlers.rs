use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use vafcheck_core::utils::plot_path_for;
use vafcheck_eval::{DetectionSummary, match_variants, plot_expected_vs_found};
use vafcheck_io::{read_call_set, read_known_tsv, write_report};

use crate::cli::{INPUT_VCF_ARG, KNOWN_TSV_ARG, OUTPUT_TSV_ARG};

pub fn run_vafcheck(matches: &ArgMatches) -> Result<()> {
    let input_vcf = matches
        .get_one::<String>(INPUT_VCF_ARG)
        .expect("A path to the query VCF is required.");

    let known_tsv = matches
        .get_one::<String>(KNOWN_TSV_ARG)
        .expect("A path to the known variants TSV is required.");

    let output_tsv = matches
        .get_one::<String>(OUTPUT_TSV_ARG)
        .expect("A path for the output TSV is required.");

    evaluate(
        Path::new(input_vcf),
        Path::new(known_tsv),
        Path::new(output_tsv),
    )?;

    Ok(())
}

///
/// Run the whole validation: read both inputs, match, write the report and its plot.
///
/// Both inputs are fully parsed before anything is written, so a malformed input leaves
/// no output behind.
///
pub fn evaluate(input_vcf: &Path, known_tsv: &Path, output_tsv: &Path) -> Result<DetectionSummary> {
    let calls = read_call_set(input_vcf)
        .with_context(|| format!("Failed to read variant calls from {:?}", input_vcf))?;
    let truth = read_known_tsv(known_tsv)
        .with_context(|| format!("Failed to read known variants from {:?}", known_tsv))?;
    info!(
        "Loaded {} calls and {} known variants",
        calls.len(),
        truth.len()
    );

    let evaluated = match_variants(&truth.variants, &calls);

    write_report(output_tsv, &truth.header, &evaluated)?;

    let plot_path = plot_path_for(output_tsv);
    plot_expected_vs_found(&evaluated, &plot_path)
        .with_context(|| format!("Failed to write plot {:?}", plot_path))?;

    let summary = DetectionSummary::from_evaluated(&evaluated);
    match summary.sensitivity() {
        Some(sensitivity) => info!(
            "Detected {} of {} known variants ({:.1}%)",
            summary.detected,
            summary.total,
            sensitivity * 100.0
        ),
        None => info!("No known variants to evaluate"),
    }

    Ok(summary)
}
