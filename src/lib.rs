pub mod api;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod models;
pub mod service;

pub use api::create_router;
pub use config::Config;
pub use engine::{EngineError, MatcherEngine, OrderBook};
pub use models::{BookOrder, BookSnapshot, MatchReport, OpType, RawCommand, Side, Trade};
pub use service::ServiceError;
