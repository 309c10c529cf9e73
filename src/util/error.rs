// Blueprint - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Blueprint operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DirectoryError {
    /// Catalog file loading or validation failed.
    Catalog(CatalogError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to loading a company catalog file.
#[derive(Debug)]
pub enum CatalogError {
    /// JSON could not be parsed into company records.
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Catalog file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A record has an empty required field.
    MissingField { index: usize, field: &'static str },

    /// The catalog parsed but contains no records.
    Empty { path: PathBuf },

    /// Maximum number of records exceeded.
    TooManyRecords { count: usize, max: usize },

    /// I/O error reading the catalog file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JsonParse { path, source } => {
                write!(f, "Failed to parse JSON '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalog '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::MissingField { index, field } => {
                write!(f, "Record #{index}: missing required field '{field}'")
            }
            Self::Empty { path } => {
                write!(f, "Catalog '{}' contains no records", path.display())
            }
            Self::TooManyRecords { count, max } => {
                write!(f, "Catalog has {count} records, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading catalog '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for DirectoryError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for DirectoryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for Blueprint results.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_catalog_error_chain_preserved() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: DirectoryError = CatalogError::Io {
            path: PathBuf::from("companies.json"),
            source: io_err,
        }
        .into();

        let msg = err.to_string();
        assert!(msg.starts_with("Catalog error:"), "{msg}");
        assert!(msg.contains("companies.json"), "{msg}");

        let inner = err.source().expect("catalog source");
        assert!(inner.source().is_some(), "io source should be chained");
    }

    #[test]
    fn test_out_of_range_has_no_source() {
        let err = ConfigError::ValueOutOfRange {
            field: "ui.font_size".to_string(),
            value: "99".to_string(),
            expected: "10-24".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("ui.font_size"));
    }
}
