use std::fmt::{self, Display};

///
/// Identity of a variant: chromosome, 1-based position and both alleles.
///
/// Equality is exact. Equivalent representations (padding bases, left-shifted
/// indels) are different keys.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct VariantKey<'a> {
    pub chr: &'a str,
    pub position: u64,
    pub ref_allele: &'a str,
    pub alt_allele: &'a str,
}

impl Display for VariantKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}>{}",
            self.chr, self.position, self.ref_allele, self.alt_allele
        )
    }
}
