//! Configuration for the batch driver
//!
//! Intentionally small: three file paths, each overridable via an
//! environment variable.
//!
//! - `MATCHER_INPUT_PATH`     (default: "orders.json")
//! - `MATCHER_ORDERBOOK_PATH` (default: "orderbook.json")
//! - `MATCHER_TRADES_PATH`    (default: "trades.json")

use std::env;
use std::path::PathBuf;

/// Driver configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of commands to process
    pub input_path: PathBuf,

    /// Where the residual book snapshots are written
    pub orderbook_path: PathBuf,

    /// Where the trade log is written
    pub trades_path: PathBuf,
}

impl Config {
    /// Construct a `Config` from environment variables, falling back to the
    /// defaults above
    pub fn from_env() -> Self {
        Config {
            input_path: path_env_or("MATCHER_INPUT_PATH", "orders.json"),
            orderbook_path: path_env_or("MATCHER_ORDERBOOK_PATH", "orderbook.json"),
            trades_path: path_env_or("MATCHER_TRADES_PATH", "trades.json"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: PathBuf::from("orders.json"),
            orderbook_path: PathBuf::from("orderbook.json"),
            trades_path: PathBuf::from("trades.json"),
        }
    }
}

fn path_env_or(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("orders.json"));
        assert_eq!(config.orderbook_path, PathBuf::from("orderbook.json"));
        assert_eq!(config.trades_path, PathBuf::from("trades.json"));
    }
}
