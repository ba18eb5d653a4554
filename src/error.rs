use thiserror::Error;

/// Errors that can occur while loading meal data files
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open or read a data file
    #[error("Failed to read file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Data file exists but resolves to zero-length text
    #[error("File is empty: {path}")]
    EmptyFile { path: String },

    /// A field declared numeric holds non-numeric text
    #[error("Invalid number format in field '{field}': {value}")]
    InvalidNumber { field: String, value: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
