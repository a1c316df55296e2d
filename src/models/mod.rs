pub mod command;
pub mod order;
pub mod snapshot;
pub mod trade;

pub use command::{OpType, RawCommand, Side};
pub use order::BookOrder;
pub use snapshot::{BookEntry, BookSnapshot, MatchReport};
pub use trade::Trade;
