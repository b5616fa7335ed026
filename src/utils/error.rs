use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },

    #[error("Missing required column '{column}' in header of {path}")]
    Schema { column: String, path: String },

    #[error("Invalid token value {value:?} on line {line}: {reason}")]
    Format {
        line: u64,
        value: String,
        reason: String,
    },

    #[error("Cannot read input file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The allocation table itself is missing or malformed.
    Input,
    /// The command line could not be used as given.
    Config,
    /// Writing the manifest failed.
    Output,
}

impl ManifestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ManifestError::NotFound { .. }
            | ManifestError::Schema { .. }
            | ManifestError::Format { .. }
            | ManifestError::Read { .. }
            | ManifestError::Csv(_) => ErrorCategory::Input,
            ManifestError::Config { .. } => ErrorCategory::Config,
            ManifestError::Io(_) | ManifestError::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Input => 1,
            ErrorCategory::Config => 2,
            ErrorCategory::Output => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ManifestError::NotFound { path } => format!("Cannot find input file '{}'", path),
            ManifestError::Schema { column, .. } => {
                format!("The input table has no '{}' column", column)
            }
            ManifestError::Format { line, value, .. } => {
                format!("Line {} has a token count that is not an integer: {:?}", line, value)
            }
            ManifestError::Read { path, source } => {
                format!("Could not read input file '{}': {}", path, source)
            }
            ManifestError::Io(e) => format!("Could not write the manifest: {}", e),
            ManifestError::Csv(e) => format!("Could not parse the input table: {}", e),
            ManifestError::Serialization(e) => format!("Could not encode the manifest: {}", e),
            ManifestError::Config { field, reason, .. } => format!("{}: {}", field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ManifestError::NotFound { .. } => "Check the input path and try again",
            ManifestError::Schema { .. } => {
                "Make sure the first row is a header containing 'wallet' and 'tokens'"
            }
            ManifestError::Format { .. } => "Token counts must be whole base-10 integers",
            ManifestError::Read { .. } => "Make sure the input path is a readable regular file",
            ManifestError::Io(_) => "Check that the output directory exists and is writable",
            ManifestError::Csv(_) => "Check the file is comma-separated with valid quoting",
            ManifestError::Serialization(_) => "Re-run the conversion; the output could not be encoded",
            ManifestError::Config { .. } => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ManifestError>;
