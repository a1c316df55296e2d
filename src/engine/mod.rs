//! Matching engine core
//!
//! - `errors` - engine error types
//! - `queue` - price-time priority queues of resting orders
//! - `orderbook` - per-pair book state machine
//! - `matching` - the crossing loop
//! - `matcher` - pair routing and finalization

pub mod errors;
pub mod matcher;
pub mod matching;
pub mod orderbook;
pub mod queue;

pub use errors::EngineError;
pub use matcher::MatcherEngine;
pub use matching::match_order;
pub use orderbook::OrderBook;
pub use queue::{OrderQueue, QueueEntry};
