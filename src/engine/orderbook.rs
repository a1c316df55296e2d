//! Per-pair order book
//!
//! One `OrderBook` per trading pair. Resting orders are owned by the id
//! index; each side's priority queue holds keys into it. An order is either
//! present in exactly one queue and the index, or in neither.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::errors::EngineError;
use super::matching::match_order;
use super::queue::{OrderQueue, QueueEntry};
use crate::decimal;
use crate::models::{BookOrder, BookSnapshot, OpType, RawCommand, Side, Trade};

/// Order book for a single trading pair
#[derive(Debug, Default)]
pub struct OrderBook {
    pub(crate) pair: String,
    pub(crate) bids: OrderQueue,
    pub(crate) asks: OrderQueue,
    /// Owning index of resting orders, keyed by order id
    pub(crate) orders: HashMap<String, BookOrder>,
    /// Arrival sequence, incremented per CREATE
    seq: u64,
    pub(crate) trades: Vec<Trade>,
}

impl OrderBook {
    pub fn new(pair: String) -> Self {
        Self {
            pair,
            ..Self::default()
        }
    }

    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Apply one command to this book
    pub fn process(&mut self, cmd: &RawCommand) -> Result<(), EngineError> {
        match cmd.op {
            OpType::Delete => {
                self.cancel(&cmd.order_id);
                Ok(())
            }
            OpType::Create => self.create(cmd),
        }
    }

    fn create(&mut self, cmd: &RawCommand) -> Result<(), EngineError> {
        let price = decimal::parse("limit_price", &cmd.limit_price)?;
        let amount = decimal::parse("amount", &cmd.amount)?;

        let mut order = BookOrder {
            id: cmd.order_id.clone(),
            account: cmd.account_id.clone(),
            side: cmd.side,
            pair: cmd.pair.clone(),
            price,
            remaining: amount,
            ts: self.seq,
        };
        self.seq += 1;

        // A zero-quantity order is never indexed and never matched.
        if order.remaining <= Decimal::ZERO {
            return Ok(());
        }

        if self.orders.contains_key(&order.id) {
            return Err(EngineError::DuplicateOrderId(order.id));
        }

        match_order(self, &mut order);

        if order.remaining > Decimal::ZERO {
            self.add(order);
        }
        Ok(())
    }

    /// Rest an order: index it and push its key onto the matching side
    fn add(&mut self, order: BookOrder) {
        let entry = QueueEntry {
            side: order.side,
            price: order.price,
            ts: order.ts,
            id: order.id.clone(),
        };
        match order.side {
            Side::Buy => self.bids.push(entry),
            Side::Sell => self.asks.push(entry),
        }
        self.orders.insert(order.id.clone(), order);
    }

    /// Remove a resting order by id; unknown ids are a silent no-op
    ///
    /// An order that has already fully filled is no longer resting, so a
    /// late DELETE for it falls through here as well.
    fn cancel(&mut self, order_id: &str) {
        if let Some(order) = self.orders.remove(order_id) {
            match order.side {
                Side::Buy => self.bids.remove(order_id),
                Side::Sell => self.asks.remove(order_id),
            };
        }
    }

    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.peek().map(|entry| entry.price)
    }

    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.peek().map(|entry| entry.price)
    }

    /// A resting order by id, if it is still live
    pub fn order(&self, order_id: &str) -> Option<&BookOrder> {
        self.orders.get(order_id)
    }

    /// Trades generated on this book so far, in generation order
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Residual book state: resting orders per side, in each queue's
    /// underlying array order
    pub fn snapshot(&self) -> BookSnapshot {
        let collect = |queue: &OrderQueue| {
            queue
                .iter()
                .filter_map(|entry| self.orders.get(&entry.id).map(Into::into))
                .collect()
        };

        BookSnapshot {
            pair: self.pair.clone(),
            bids: collect(&self.bids),
            asks: collect(&self.asks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(op: OpType, id: &str, side: Side, price: &str, amount: &str) -> RawCommand {
        RawCommand {
            op,
            account_id: "acc1".to_string(),
            amount: amount.to_string(),
            order_id: id.to_string(),
            pair: "BTC/USDC".to_string(),
            limit_price: price.to_string(),
            side,
        }
    }

    fn create(id: &str, side: Side, price: &str, amount: &str) -> RawCommand {
        cmd(OpType::Create, id, side, price, amount)
    }

    fn delete(id: &str) -> RawCommand {
        cmd(OpType::Delete, id, Side::Buy, "0", "0")
    }

    #[test]
    fn test_create_rests_when_nothing_crosses() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Sell, "63500.00", "0.00230"))
            .unwrap();

        let snap = book.snapshot();
        assert!(snap.bids.is_empty());
        assert_eq!(snap.asks.len(), 1);
        assert_eq!(snap.asks[0].id, "1");
        assert_eq!(snap.asks[0].price, "63500");
        assert_eq!(snap.asks[0].remaining, "0.0023");
    }

    #[test]
    fn test_delete_removes_resting_order() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("5", Side::Sell, "61577.30", "0.12785"))
            .unwrap();
        book.process(&delete("5")).unwrap();

        let snap = book.snapshot();
        assert!(snap.asks.is_empty());
        assert!(book.order("5").is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Buy, "100", "1")).unwrap();

        let before = book.snapshot();
        book.process(&delete("never-seen")).unwrap();
        assert_eq!(book.snapshot(), before);
        assert!(book.trades().is_empty());
    }

    #[test]
    fn test_delete_after_full_fill_is_a_noop() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Sell, "100", "1")).unwrap();
        book.process(&create("2", Side::Buy, "100", "1")).unwrap();
        assert_eq!(book.trades().len(), 1);

        let before = book.snapshot();
        book.process(&delete("1")).unwrap();
        assert_eq!(book.snapshot(), before);
    }

    #[test]
    fn test_zero_amount_create_is_skipped() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Buy, "100", "0")).unwrap();

        assert!(book.order("1").is_none());
        assert!(book.snapshot().bids.is_empty());

        // The id was never taken, so reusing it later is fine.
        book.process(&create("1", Side::Buy, "100", "2")).unwrap();
        assert_eq!(book.snapshot().bids.len(), 1);
    }

    #[test]
    fn test_duplicate_resting_id_is_rejected() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Buy, "100", "1")).unwrap();

        let err = book
            .process(&create("1", Side::Buy, "101", "1"))
            .unwrap_err();
        assert!(matches!(err, EngineError::DuplicateOrderId(id) if id == "1"));
    }

    #[test]
    fn test_invalid_decimal_fails_create() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        let err = book
            .process(&create("1", Side::Buy, "not-a-price", "1"))
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidDecimal(_)));
    }

    #[test]
    fn test_no_crossed_book_at_rest() {
        let mut book = OrderBook::new("BTC/USDC".to_string());
        book.process(&create("1", Side::Buy, "99", "1")).unwrap();
        book.process(&create("2", Side::Sell, "101", "1")).unwrap();
        book.process(&create("3", Side::Buy, "100", "1")).unwrap();
        book.process(&create("4", Side::Sell, "100.5", "1")).unwrap();

        let (bid, ask) = (book.best_bid().unwrap(), book.best_ask().unwrap());
        assert!(bid < ask, "book is crossed: {bid} >= {ask}");
    }
}
