use rust_decimal::Decimal;

use super::command::Side;

/// A resting order inside one pair's book
///
/// `ts` is the engine-assigned arrival sequence used for FIFO tie-breaking,
/// not a wall clock. `price` never changes after creation; `remaining` only
/// ever decreases and stays above zero while the order rests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOrder {
    pub id: String,
    pub account: String,
    pub side: Side,
    pub pair: String,
    pub price: Decimal,
    pub remaining: Decimal,
    pub ts: u64,
}

impl BookOrder {
    /// Reduce the unfilled quantity by a matched amount
    pub fn fill(&mut self, quantity: Decimal) {
        self.remaining -= quantity;
    }

    /// True once nothing is left to fill
    pub fn is_filled(&self) -> bool {
        self.remaining <= Decimal::ZERO
    }
}
