use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order side: buy or sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// Command operation: create a new order or delete a resting one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpType {
    Create,
    Delete,
}

/// One incoming order command as it appears on the wire
///
/// Every field is a string; `limit_price` and `amount` are decimal strings
/// and stay unparsed until the engine materializes the order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RawCommand {
    #[serde(rename = "type_op")]
    pub op: OpType,
    pub account_id: String,
    /// Decimal string, e.g. "0.00230"
    #[schema(example = "0.00230")]
    pub amount: String,
    pub order_id: String,
    /// Trading pair symbol, matched on exact string equality
    #[schema(example = "BTC/USDC")]
    pub pair: String,
    /// Decimal string, e.g. "63500.00"
    #[schema(example = "63500.00")]
    pub limit_price: String,
    pub side: Side,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let raw = r#"{
            "type_op": "CREATE",
            "account_id": "1",
            "amount": "0.00230",
            "order_id": "1",
            "pair": "BTC/USDC",
            "limit_price": "63500.00",
            "side": "SELL"
        }"#;

        let cmd: RawCommand = serde_json::from_str(raw).unwrap();
        assert_eq!(cmd.op, OpType::Create);
        assert_eq!(cmd.side, Side::Sell);
        assert_eq!(cmd.pair, "BTC/USDC");
        assert_eq!(cmd.amount, "0.00230");
        assert_eq!(cmd.limit_price, "63500.00");
    }

    #[test]
    fn test_rejects_unknown_op() {
        let raw = r#"{
            "type_op": "UPDATE",
            "account_id": "1",
            "amount": "1",
            "order_id": "1",
            "pair": "BTC/USDC",
            "limit_price": "1",
            "side": "BUY"
        }"#;

        assert!(serde_json::from_str::<RawCommand>(raw).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let raw = r#"{"type_op": "DELETE", "order_id": "5"}"#;
        assert!(serde_json::from_str::<RawCommand>(raw).is_err());
    }
}
