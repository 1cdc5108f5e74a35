use backend::dashboards::d100_sales_overview::build_snapshot;
use backend::domain::a001_order::{OrderStore, RandomOrderSource};
use backend::shared::config::load_config;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    let mut source = RandomOrderSource::new(config.generator_settings());
    let store = OrderStore::generate(&mut source, chrono::Utc::now());

    let filter = config.dashboard_filter();
    tracing::info!(
        "Building dashboard: last {} days, category '{}'",
        filter.date_range_days,
        filter.category
    );
    let snapshot = build_snapshot(&store, &filter, &config.snapshot_settings());

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
