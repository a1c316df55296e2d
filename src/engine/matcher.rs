//! Multi-pair matching engine
//!
//! Owns one [`OrderBook`] per trading pair, creates books on first
//! reference, and routes each command to the book its `pair` names. Pairs
//! are keyed on exact string equality. Commands are processed strictly in
//! arrival order on the caller's thread; a `MatcherEngine` has a single
//! owner and is never shared.

use indexmap::IndexMap;

use super::errors::EngineError;
use super::orderbook::OrderBook;
use crate::models::{MatchReport, RawCommand};

/// Routes a command stream across per-pair order books
#[derive(Debug, Default)]
pub struct MatcherEngine {
    /// pair -> book, iterated in pair-insertion order at finalization
    books: IndexMap<String, OrderBook>,
}

impl MatcherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one command to the book for its pair
    pub fn ingest(&mut self, cmd: &RawCommand) -> Result<(), EngineError> {
        self.book_for(&cmd.pair).process(cmd)
    }

    /// Get or lazily create the book for a pair
    fn book_for(&mut self, pair: &str) -> &mut OrderBook {
        self.books
            .entry(pair.to_string())
            .or_insert_with(|| OrderBook::new(pair.to_string()))
    }

    /// The book for a pair, if any command has referenced it
    pub fn book(&self, pair: &str) -> Option<&OrderBook> {
        self.books.get(pair)
    }

    /// Number of pairs seen so far
    pub fn num_pairs(&self) -> usize {
        self.books.len()
    }

    /// Finalize the run: one snapshot per pair plus every trade, both in
    /// the order the pairs were first referenced
    pub fn finish(self) -> MatchReport {
        let mut orderbooks = Vec::with_capacity(self.books.len());
        let mut trades = Vec::new();

        for (_, mut book) in self.books {
            orderbooks.push(book.snapshot());
            trades.append(&mut book.trades);
        }

        MatchReport { orderbooks, trades }
    }
}
