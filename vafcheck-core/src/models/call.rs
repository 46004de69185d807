use super::key::VariantKey;

///
/// One variant reported by the caller.
///
#[derive(PartialEq, Debug, Clone)]
pub struct CallVariant {
    pub chr: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    /// Observed VAF as a percentage, `None` when no usable allele depth was reported.
    pub vaf: Option<f64>,
}

impl CallVariant {
    pub fn key(&self) -> VariantKey<'_> {
        VariantKey {
            chr: &self.chr,
            position: self.position,
            ref_allele: &self.ref_allele,
            alt_allele: &self.alt_allele,
        }
    }
}
