//! Error extension utilities
//!
//! Context extension methods that convert foreign errors into the domain
//! [`Error`] type.

use kvlock_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use kvlock_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
///
/// let config: AppConfig = figment.extract().config_context("Invalid configuration")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to an infrastructure error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| to_domain_error(err, &context.to_string()))
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Io {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Configuration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }
}

/// Convert standard library errors to domain errors with context
pub fn to_domain_error<E>(error: E, context: &str) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    Error::infrastructure_with_source(format!("{}: {}", context, error), error)
}
