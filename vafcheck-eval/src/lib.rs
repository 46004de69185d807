//! # Evaluation of variant calls against a truth set
//!
//! Joins truth records to calls by exact variant key, summarises the concordance of
//! expected and observed VAFs, and renders the expected-vs-found scatter plot.
//!
pub mod matching;
pub mod plot;
pub mod statistics;

pub use matching::{DetectionSummary, match_variants};
pub use plot::plot_expected_vs_found;
pub use statistics::{LinearFit, linear_fit, pearson_correlation, r_squared};
