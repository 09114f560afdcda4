//! Failure type shared by the store-backed ports.

/// Error raised by a data-store port implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or a connection checkout failed.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// The store rejected or failed the query itself.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
