//! Order matching
//!
//! The crossing loop for one incoming order against the opposite side of a
//! book. Trades always print at the resting order's price, so any price
//! improvement goes to the taker. Ties at one price level are strictly FIFO
//! by arrival sequence; nothing prevents two orders from the same account
//! from trading with each other.

use rust_decimal::Decimal;

use super::orderbook::OrderBook;
use crate::models::{BookOrder, Side, Trade};

/// Cross an incoming order against the book's opposite side
///
/// Consumes resting liquidity best-first until the incoming order is filled,
/// the opposite side empties, or prices stop crossing. The incoming order's
/// `remaining` is left at whatever could not be filled; the caller decides
/// whether the residue rests.
pub fn match_order(book: &mut OrderBook, incoming: &mut BookOrder) {
    while incoming.remaining > Decimal::ZERO {
        let best = {
            let opposite = match incoming.side {
                Side::Buy => &book.asks,
                Side::Sell => &book.bids,
            };
            match opposite.peek() {
                Some(entry) => (entry.id.clone(), entry.price),
                None => break,
            }
        };
        let (best_id, best_price) = best;

        let crosses = match incoming.side {
            Side::Buy => incoming.price >= best_price,
            Side::Sell => incoming.price <= best_price,
        };
        if !crosses {
            break;
        }

        // Every queued id has an owning entry in the index.
        let Some(resting) = book.orders.get_mut(&best_id) else {
            break;
        };

        let trade_qty = incoming.remaining.min(resting.remaining);
        resting.fill(trade_qty);
        let resting_filled = resting.is_filled();
        incoming.fill(trade_qty);

        let trade = match incoming.side {
            Side::Buy => Trade::new(&book.pair, &incoming.id, &best_id, best_price, trade_qty),
            Side::Sell => Trade::new(&book.pair, &best_id, &incoming.id, best_price, trade_qty),
        };
        book.trades.push(trade);

        if resting_filled {
            book.orders.remove(&best_id);
            match incoming.side {
                Side::Buy => book.asks.pop(),
                Side::Sell => book.bids.pop(),
            };
        }
        // A partially filled resting order stays at the top of its queue:
        // its price and arrival sequence are unchanged, and its remaining
        // quantity lives in the index.
    }
}
