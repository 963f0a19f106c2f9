//! Binary that fetches one symbol's detail view and prints the assembled
//! chart, for checking a backend deployment by hand.
//!
//! # Usage
//!
//! ```sh
//! export MARKETBOARD_STOCK_API_URL="http://localhost:8080/api/stock"
//! export MARKETBOARD_ML_API_URL="http://localhost:8080/api/rds"
//! cargo run --bin board_check --features cli -- AAPL 5D
//! ```
//!
//! Variables in a `.env` file in the working directory are loaded first.

use std::env;

use marketboard::config::ClientConfig;
use marketboard::types::Timeframe;
use marketboard::{Dashboard, DashboardClient};

#[tokio::main]
async fn main() -> marketboard::error::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_owned());
    let timeframe: Timeframe = match args.next() {
        Some(raw) => raw.parse()?,
        None => Timeframe::OneDay,
    };

    let config = ClientConfig::from_env()?;
    println!("Stock service: {}", config.stock_api_url);
    println!("ML service:    {}", config.ml_api_url);

    let dashboard = Dashboard::new(DashboardClient::from_config(&config)?);
    let detail = dashboard.stock_detail(&symbol, timeframe).await?;

    println!(
        "\n{} {}: current {:.2}",
        detail.symbol, detail.timeframe, detail.quote.current_price
    );
    match (detail.change.absolute, detail.change.percent) {
        (Some(abs), Some(pct)) => println!("Change: {abs:+.2} ({pct:+.2}%)"),
        (Some(abs), None) => println!("Change: {abs:+.2}"),
        _ => println!("Change: n/a"),
    }

    let filled = detail.chart.iter().filter(|p| p.price.is_some()).count();
    println!("{} points ({} with a price)\n", detail.chart.len(), filled);
    for point in &detail.chart {
        match point.price {
            Some(price) => println!("{:<20} {price:>10.2}", point.label),
            None => println!("{:<20} {:>10}", point.label, "-"),
        }
    }

    let signals = dashboard.ml_signals(&symbol).await;
    match signals.as_deref().map(|s| marketboard::signals::latest(s)) {
        Ok(Some(latest)) => {
            println!(
                "\nRisk {} on {} ({})",
                latest.risk_score.map_or_else(|| "n/a".to_owned(), |r| r.to_string()),
                latest.signal_date,
                latest.regime_label.as_deref().unwrap_or("no regime"),
            );
            for driver in latest.top_drivers() {
                println!("  {:<24} {:>8.2}  p{:.0}", driver.display_name(), driver.value, driver.pct * 100.0);
            }
        }
        Ok(None) => println!("\nNo risk signals"),
        Err(e) => eprintln!("\nRisk signals unavailable: {e}"),
    }

    Ok(())
}
