//! Error types for the matching engine
//!
//! An engine error means the command stream itself is bad (programmer or
//! data error, not a transient condition): the whole run fails and no
//! partial output is emitted.

use thiserror::Error;

use crate::decimal::InvalidDecimal;

/// Errors that can occur while processing a command stream
#[derive(Debug, Error)]
pub enum EngineError {
    /// A `limit_price` or `amount` field could not be parsed
    #[error(transparent)]
    InvalidDecimal(#[from] InvalidDecimal),

    /// A CREATE reused the id of an order still resting in the same book
    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),
}
