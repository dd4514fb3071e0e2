use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid JSON in '{}': {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Spreadsheet error: {0}")]
    SpreadsheetError(#[from] calamine::Error),

    #[error("Workbook '{}' contains no worksheets", .path.display())]
    NoWorksheet { path: PathBuf },

    #[error("Expected a top-level JSON array in '{}', found {found}", .path.display())]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("Item at index {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("Item at index {index} has an id that cannot be used as a key: {id}")]
    UnsupportedId {
        index: usize,
        id: serde_json::Value,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse classification used by the binaries to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    MissingInput,
    MalformedInput,
    Configuration,
    Unexpected,
}

impl PrepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrepError::FileNotFound { .. } => ErrorCategory::MissingInput,
            PrepError::InvalidJson { .. }
            | PrepError::SpreadsheetError(_)
            | PrepError::NoWorksheet { .. }
            | PrepError::NotAnArray { .. }
            | PrepError::NotAnObject { .. }
            | PrepError::UnsupportedId { .. } => ErrorCategory::MalformedInput,
            PrepError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PrepError::IoError(_) | PrepError::SerializationError(_) => ErrorCategory::Unexpected,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::MissingInput => "Check the input path, or run from the directory holding the default file",
            ErrorCategory::MalformedInput => "Open the input file and fix its contents before retrying",
            ErrorCategory::Configuration => "Run with --help to see the accepted arguments",
            ErrorCategory::Unexpected => "Check file permissions and free disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let missing = PrepError::FileNotFound {
            path: PathBuf::from("Items.json"),
        };
        assert_eq!(missing.category(), ErrorCategory::MissingInput);
        assert_eq!(missing.to_string(), "File 'Items.json' not found");

        let syntax = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let invalid = PrepError::InvalidJson {
            path: PathBuf::from("Items.json"),
            source: syntax,
        };
        assert_eq!(invalid.category(), ErrorCategory::MalformedInput);

        let io = PrepError::from(std::io::Error::other("disk full"));
        assert_eq!(io.category(), ErrorCategory::Unexpected);
        assert_eq!(io.to_string(), "IO error: disk full");
    }
}
