//! Error types for sfpshow operations.
//!
//! All errors implement `std::error::Error` via `thiserror`. Read failures
//! against the state store are fatal to the whole invocation; per-field
//! formatting problems never surface here.

use thiserror::Error;

/// Result type alias for sfpshow operations.
pub type SfpShowResult<T> = Result<T, SfpShowError>;

/// Errors that can occur while building a transceiver report.
#[derive(Debug, Error)]
pub enum SfpShowError {
    /// Failed to connect to a redis database.
    #[error("Failed to connect to '{url}': {source}")]
    Connection {
        /// The redis URL that refused the connection.
        url: String,
        /// The underlying client error.
        #[source]
        source: redis::RedisError,
    },

    /// A read against an open database failed.
    #[error("Database operation failed: {operation}: {source}")]
    Database {
        /// The operation that failed (e.g., "hgetall", "keys").
        operation: String,
        /// The underlying client error.
        #[source]
        source: redis::RedisError,
    },

    /// Requested port is not known to any selected namespace.
    #[error("Port '{port}' is not present in any namespace")]
    PortNotFound {
        /// The port name.
        port: String,
    },
}

impl SfpShowError {
    /// Creates a connection error.
    pub fn connection(url: impl Into<String>, source: redis::RedisError) -> Self {
        Self::Connection {
            url: url.into(),
            source,
        }
    }

    /// Creates a database error.
    pub fn database(operation: impl Into<String>, source: redis::RedisError) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Creates a port not found error.
    pub fn port_not_found(port: impl Into<String>) -> Self {
        Self::PortNotFound { port: port.into() }
    }
}
