use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::decimal;

/// A completed fill between one buy order and one sell order
///
/// Prices and amounts are serialized as canonical decimal strings; `ts` is
/// the wall-clock millisecond at which the trade was generated (distinct
/// from the book's arrival sequence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Trade {
    pub pair: String,
    #[serde(rename = "buyOrderId")]
    pub buy_order_id: String,
    #[serde(rename = "sellOrderId")]
    pub sell_order_id: String,
    #[schema(example = "63500")]
    pub price: String,
    #[schema(example = "0.0023")]
    pub amount: String,
    pub ts: i64,
}

impl Trade {
    /// Record a fill at the resting order's price
    pub fn new(
        pair: &str,
        buy_order_id: &str,
        sell_order_id: &str,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self {
            pair: pair.to_string(),
            buy_order_id: buy_order_id.to_string(),
            sell_order_id: sell_order_id.to_string(),
            price: decimal::canonical(&price),
            amount: decimal::canonical(&amount),
            ts: Utc::now().timestamp_millis(),
        }
    }
}
