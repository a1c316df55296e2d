use order_matcher::{service, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_matcher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(input = %config.input_path.display(), "processing command stream");

    match service::run(&config) {
        Ok(report) => {
            tracing::info!(
                orderbooks = %config.orderbook_path.display(),
                trades = %config.trades_path.display(),
                "wrote {} trades across {} pairs",
                report.trades.len(),
                report.orderbooks.len()
            );
        }
        Err(err) => {
            tracing::error!("run failed: {err}");
            std::process::exit(1);
        }
    }
}
