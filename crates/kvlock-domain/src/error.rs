//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kvlock
///
/// The lock operations themselves never return it; it surfaces from store
/// gateways, configuration loading and bootstrap.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Key-value store operation error
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error with source
    pub fn store_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
