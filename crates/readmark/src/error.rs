//! Error types for scanning and registry operations

use std::path::PathBuf;
use thiserror::Error;

use crate::decl::{DeclId, SourceLocation};

/// Main error type for readmark operations
#[derive(Error, Debug)]
pub enum ReadmarkError {
    /// Scanning source files failed
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry invariant violated
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised while collecting marks from source
#[derive(Error, Debug)]
pub enum ScanError {
    /// A file or directory could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A source file is not valid Rust
    #[error("Parse error: {message} at {location}")]
    Parse {
        /// Where parsing stopped
        location: SourceLocation,
        /// Parser message
        message: String,
    },

    /// Collected marks conflict
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Errors raised by the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A declaration carries more than one mark
    #[error("Duplicate mark: `{id}` marked at {first} and again at {second}")]
    DuplicateMark {
        /// The declaration
        id: DeclId,
        /// Where the first mark was found
        first: SourceLocation,
        /// Where the second mark was found
        second: SourceLocation,
    },
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error reading config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for `ScanConfig`
    #[error("Invalid config {path}: {source}")]
    Toml {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },
}

/// Result type alias for readmark operations
pub type Result<T> = std::result::Result<T, ReadmarkError>;
