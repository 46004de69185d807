use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::debug;

use vafcheck_core::models::{CallVariant, EvaluatedVariant, TruthVariant, VariantKey};

///
/// Annotate every truth record with its first matching call.
///
/// A call matches when chromosome, position, ref and alt are all identical. When several
/// calls share a key, the earliest one in `calls` wins. Output order is truth order and
/// neither input is modified.
///
pub fn match_variants(truth: &[TruthVariant], calls: &[CallVariant]) -> Vec<EvaluatedVariant> {
    let mut index: HashMap<VariantKey<'_>, &CallVariant> = HashMap::with_capacity(calls.len());
    for call in calls {
        match index.entry(call.key()) {
            Entry::Vacant(slot) => {
                slot.insert(call);
            }
            Entry::Occupied(slot) => {
                debug!("Duplicate call {} ignored, keeping the first one", slot.key());
            }
        }
    }

    truth
        .iter()
        .map(|variant| match index.get(&variant.key()) {
            Some(call) => EvaluatedVariant {
                truth: variant.clone(),
                found_vaf: call.vaf,
                detected: true,
            },
            None => EvaluatedVariant {
                truth: variant.clone(),
                found_vaf: None,
                detected: false,
            },
        })
        .collect()
}

/// Detection counts over an evaluated truth set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionSummary {
    pub total: usize,
    pub detected: usize,
}

impl DetectionSummary {
    pub fn from_evaluated(evaluated: &[EvaluatedVariant]) -> Self {
        DetectionSummary {
            total: evaluated.len(),
            detected: evaluated.iter().filter(|v| v.detected).count(),
        }
    }

    /// Fraction of truth variants detected, `None` for an empty truth set.
    pub fn sensitivity(&self) -> Option<f64> {
        match self.total {
            0 => None,
            total => Some(self.detected as f64 / total as f64),
        }
    }
}
