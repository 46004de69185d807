use thiserror::Error;

/// Error type shared by the vafcheck crates.
#[derive(Error, Debug)]
pub enum VafCheckError {
    /// The truth set header lacks one or more required columns.
    #[error("Invalid header. Missing required fields: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The file has no header line at all.
    #[error("File is empty, expected a header line: {0}")]
    EmptyFile(String),

    #[error("Line {line}: can't parse {field} from '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: expected at least {expected} columns, found {found}")]
    TruncatedRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("Failed to draw plot: {0}")]
    Plot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VafCheckError>;
