use crate::consts::{MISSING_DEPTH_PLACEHOLDER, NOT_FOUND_PLACEHOLDER};

use super::truth::TruthVariant;

///
/// A truth record annotated with what the caller reported for it.
///
#[derive(PartialEq, Debug, Clone)]
pub struct EvaluatedVariant {
    pub truth: TruthVariant,
    /// VAF of the first matching call. `None` when undetected, or detected without depth data.
    pub found_vaf: Option<f64>,
    pub detected: bool,
}

impl EvaluatedVariant {
    pub fn found_vaf_field(&self) -> String {
        match (self.detected, self.found_vaf) {
            (false, _) => NOT_FOUND_PLACEHOLDER.to_string(),
            (true, Some(vaf)) => vaf.to_string(),
            (true, None) => MISSING_DEPTH_PLACEHOLDER.to_string(),
        }
    }

    ///
    /// Truth fields followed by `found_vaf` and `detected`.
    ///
    pub fn fields(&self) -> Vec<String> {
        let mut fields = self.truth.fields();
        fields.push(self.found_vaf_field());
        fields.push(self.detected.to_string());
        fields
    }

    /// (found, expected) pair for plotting, if the found VAF is numeric.
    pub fn vaf_pair(&self) -> Option<(f64, f64)> {
        self.found_vaf.map(|found| (found, self.truth.expected_vaf))
    }
}
