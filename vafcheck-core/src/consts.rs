// Truth set columns
pub const CHR_COL_NAME: &str = "chr";
pub const POSITION_COL_NAME: &str = "position";
pub const REF_COL_NAME: &str = "ref";
pub const ALT_COL_NAME: &str = "alt";
pub const GENE_COL_NAME: &str = "gene";
pub const HGVSP_COL_NAME: &str = "hgvsp";
pub const VAF_COL_NAME: &str = "vaf";

/// Required truth columns, in the order rows are read.
pub const REQUIRED_TRUTH_COLUMNS: [&str; 7] = [
    CHR_COL_NAME,
    POSITION_COL_NAME,
    REF_COL_NAME,
    ALT_COL_NAME,
    GENE_COL_NAME,
    HGVSP_COL_NAME,
    VAF_COL_NAME,
];

// Report columns
pub const FOUND_VAF_COL_NAME: &str = "found_vaf";
pub const DETECTED_COL_NAME: &str = "detected";
pub const NOT_FOUND_PLACEHOLDER: &str = ".";
pub const MISSING_DEPTH_PLACEHOLDER: &str = "NA";

pub const DELIMITER: char = '\t';
pub const PERCENT_SIGN: char = '%';

// VCF stuff
pub const VCF_COMMENT_PREFIX: char = '#';
pub const VCF_FORMAT_DELIMITER: char = ':';
pub const VCF_MISSING_VALUE: &str = ".";
pub const VCF_MIN_FIELDS: usize = 10;
pub const ALLELE_DEPTH_TAG: &str = "AD";
pub const VAF_DECIMALS: i32 = 3;

// File extensions
pub const GZ_FILE_EXTENSION: &str = "gz";
pub const PNG_FILE_EXTENSION: &str = "png";

// Plot stuff
pub const PLOT_DPI: u32 = 130;
pub const PLOT_WIDTH_INCHES: f64 = 6.4;
pub const PLOT_HEIGHT_INCHES: f64 = 4.8;
pub const PLOT_TITLE: &str = "Expected VAF vs Found VAF";
pub const PLOT_X_LABEL: &str = "Found VAF";
pub const PLOT_Y_LABEL: &str = "Expected VAF";
