//! # Input/Output for vafcheck
//!
//! Reading the truth set (TSV) and the caller output (VCF, optionally gzipped), and writing
//! the annotated report.
//!
pub mod calls;
pub mod report;
pub mod truth;

pub use calls::{parse_allele_depth_vaf, read_call_set};
pub use report::write_report;
pub use truth::read_known_tsv;
