use super::key::VariantKey;

///
/// One expected mutation from the truth set.
///
#[derive(PartialEq, Debug, Clone)]
pub struct TruthVariant {
    pub chr: String,
    pub position: u64,
    pub ref_allele: String,
    pub alt_allele: String,
    pub gene: String,
    pub hgvsp: String,
    /// Expected VAF as a percentage (0-100).
    pub expected_vaf: f64,

    /// Columns past the required seven, kept verbatim.
    pub extra: Vec<String>,
}

impl TruthVariant {
    pub fn key(&self) -> VariantKey<'_> {
        VariantKey {
            chr: &self.chr,
            position: self.position,
            ref_allele: &self.ref_allele,
            alt_allele: &self.alt_allele,
        }
    }

    ///
    /// Field values in column order, as written to the report.
    ///
    pub fn fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.chr.clone(),
            self.position.to_string(),
            self.ref_allele.clone(),
            self.alt_allele.clone(),
            self.gene.clone(),
            self.hgvsp.clone(),
            self.expected_vaf.to_string(),
        ];
        fields.extend(self.extra.iter().cloned());
        fields
    }
}

///
/// A parsed truth set: the header as it appeared in the file plus the records in file order.
///
#[derive(PartialEq, Debug, Clone, Default)]
pub struct TruthSet {
    pub header: Vec<String>,
    pub variants: Vec<TruthVariant>,
}

impl TruthSet {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn variant() -> TruthVariant {
        TruthVariant {
            chr: "chr7".to_string(),
            position: 140453136,
            ref_allele: "A".to_string(),
            alt_allele: "T".to_string(),
            gene: "BRAF".to_string(),
            hgvsp: "p.V600E".to_string(),
            expected_vaf: 5.5,
            extra: vec!["COSM476".to_string()],
        }
    }

    #[rstest]
    fn test_fields_keep_column_order(variant: TruthVariant) {
        assert_eq!(
            variant.fields(),
            vec!["chr7", "140453136", "A", "T", "BRAF", "p.V600E", "5.5", "COSM476"]
        );
    }

    #[rstest]
    fn test_whole_number_vaf_is_written_without_fraction(mut variant: TruthVariant) {
        variant.expected_vaf = 10.0;
        assert_eq!(variant.fields()[6], "10");
    }

    #[rstest]
    fn test_key(variant: TruthVariant) {
        let key = variant.key();
        assert_eq!(key.chr, "chr7");
        assert_eq!(key.position, 140453136);
        assert_eq!(key.to_string(), "chr7:140453136:A>T");
    }
}
