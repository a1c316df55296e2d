use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::order::BookOrder;
use super::trade::Trade;
use crate::decimal;

/// One resting order as it appears in a book snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookEntry {
    pub id: String,
    pub account: String,
    #[schema(example = "62877.3")]
    pub price: String,
    #[schema(example = "4.5")]
    pub remaining: String,
}

impl From<&BookOrder> for BookEntry {
    fn from(order: &BookOrder) -> Self {
        Self {
            id: order.id.clone(),
            account: order.account.clone(),
            price: decimal::canonical(&order.price),
            remaining: decimal::canonical(&order.remaining),
        }
    }
}

/// Residual state of one pair's book after the command stream has been
/// applied
///
/// The `bids` and `asks` arrays hold exactly the resting orders, in the
/// underlying array order of each side's priority queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookSnapshot {
    pub pair: String,
    pub bids: Vec<BookEntry>,
    pub asks: Vec<BookEntry>,
}

/// Aggregated output of a full engine run: one snapshot per pair plus every
/// trade, both in pair-insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchReport {
    pub orderbooks: Vec<BookSnapshot>,
    pub trades: Vec<Trade>,
}
