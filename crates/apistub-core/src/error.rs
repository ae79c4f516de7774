//! Error handling for the apistub generation library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Parsing documentation blocks
//! and rendering never fail; errors only come from bad input at the edges
//! (class names, catalogs, configuration files) and from file I/O.
//!
//! # Examples
//!
//! ```
//! use apistub_core::error::{Error, Result};
//!
//! fn require_class(name: &str) -> Result<&str> {
//!     if name.is_empty() {
//!         return Err(Error::invalid_input("class name must not be empty"));
//!     }
//!     Ok(name)
//! }
//!
//! assert!(require_class("").is_err());
//! ```

use thiserror::Error;

/// Result type for apistub generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apistub generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error (catalogs written as JSON)
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Caller passed something unusable (e.g. an empty class name)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The introspection facility could not describe a class
    #[error("Introspection error: {0}")]
    Introspection(String),

    /// Configuration loaded but unusable (e.g. an empty target directory)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new introspection error
    pub fn introspection<S: Into<String>>(msg: S) -> Self {
        Self::Introspection(msg.into())
    }
}
