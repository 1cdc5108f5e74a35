use contracts::dashboards::d100_sales_overview::{DashboardFilter, DashboardSnapshot};
use contracts::enums::CategoryFilter;
use std::time::Instant;

use super::charts::{category_chart, daily_trend, DEFAULT_TREND_POINTS};
use super::insights::generate_insights;
use super::service::{
    calculate_metrics, category_stats, customer_insights, daily_sales, sales_by_category,
    top_products, DEFAULT_TOP_PRODUCTS_LIMIT,
};
use crate::domain::a001_order::store::filter_by_category_filter;
use crate::domain::a001_order::OrderStore;
use crate::shared::indicators::metadata::build_catalog;
use crate::shared::indicators::{IndicatorRegistry, PeriodOrders};

/// Table sizes of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSettings {
    pub top_products_limit: usize,
    pub trend_points: usize,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
            trend_points: DEFAULT_TREND_POINTS,
        }
    }
}

/// Run one full dashboard refresh: date filter, then category filter, then
/// every aggregation over the resulting subset.
pub fn build_snapshot(
    store: &OrderStore,
    filter: &DashboardFilter,
    settings: &SnapshotSettings,
) -> DashboardSnapshot {
    let started = Instant::now();
    let category = CategoryFilter::parse(&filter.category);
    if let CategoryFilter::Unknown(name) = &category {
        tracing::warn!("Unknown category filter '{}', no orders will match", name);
    }

    let days = filter.date_range_days;
    let current = filter_by_category_filter(&store.filter_by_date_range(days), &category);
    let previous = filter_by_category_filter(&store.previous_window(days), &category);

    let periods = PeriodOrders { current, previous };
    let orders = &periods.current;

    let catalog = build_catalog();
    let card_ids: Vec<_> = catalog
        .sets
        .iter()
        .flat_map(|set| set.indicators.iter().cloned())
        .collect();
    let indicators = IndicatorRegistry::new().compute(&card_ids, &periods);

    let snapshot = DashboardSnapshot {
        filter: filter.clone(),
        as_of: store.as_of(),
        metrics: calculate_metrics(orders),
        catalog,
        indicators,
        insights: generate_insights(orders),
        sales_by_category: sales_by_category(orders),
        category_chart: category_chart(orders),
        daily_sales: daily_sales(orders),
        trend: daily_trend(orders, settings.trend_points),
        top_products: top_products(orders, settings.top_products_limit),
        category_stats: category_stats(orders),
        customer_insights: customer_insights(orders),
    };

    tracing::debug!(
        "Dashboard snapshot for {} days / '{}': {} orders in {:?}",
        days,
        filter.category,
        orders.len(),
        started.elapsed()
    );

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::RandomOrderSource;
    use chrono::{TimeZone, Utc};
    use contracts::enums::Category;

    fn store() -> OrderStore {
        let as_of = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
        OrderStore::generate(&mut RandomOrderSource::with_seed(2024), as_of)
    }

    #[test]
    fn test_snapshot_is_consistent() {
        let store = store();
        let filter = DashboardFilter {
            date_range_days: 90,
            category: "all".into(),
        };
        let snapshot = build_snapshot(&store, &filter, &SnapshotSettings::default());

        let expected = store.filter_by_date_range(90).len();
        assert_eq!(snapshot.metrics.total_orders, expected);
        assert_eq!(snapshot.catalog.indicators.len(), 4);
        assert_eq!(snapshot.indicators.len(), 4);
        for (meta, card) in snapshot.catalog.indicators.iter().zip(&snapshot.indicators) {
            assert_eq!(meta.id, card.id);
        }
        assert_eq!(snapshot.indicators[1].value, expected as f64);
        assert_eq!(snapshot.insights.len(), 4);
        assert!(snapshot.top_products.len() <= 10);
        assert!(snapshot.trend.len() <= 14);
        assert!(snapshot.customer_insights.len() <= 10);

        let category_total: usize = snapshot.category_stats.iter().map(|s| s.orders).sum();
        assert_eq!(category_total, expected);
    }

    #[test]
    fn test_snapshot_for_one_category() {
        let store = store();
        let filter = DashboardFilter {
            date_range_days: 365,
            category: "Books".into(),
        };
        let snapshot = build_snapshot(&store, &filter, &SnapshotSettings::default());

        assert!(snapshot.metrics.total_orders > 0);
        assert_eq!(snapshot.sales_by_category.len(), 1);
        assert!(snapshot.sales_by_category.contains_key(&Category::Books));
        assert!(snapshot.top_products.iter().all(|p| p.category == Category::Books));
    }

    #[test]
    fn test_snapshot_for_unknown_category_is_empty() {
        let store = store();
        let filter = DashboardFilter {
            date_range_days: 30,
            category: "Groceries".into(),
        };
        let snapshot = build_snapshot(&store, &filter, &SnapshotSettings::default());

        assert_eq!(snapshot.metrics.total_orders, 0);
        assert_eq!(snapshot.metrics.avg_order_value, 0.0);
        assert!(snapshot.insights.is_empty());
        assert!(snapshot.top_products.is_empty());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["filter"]["dateRangeDays"], 30);
    }

    #[test]
    fn test_snapshot_with_window_beyond_calendar() {
        let store = store();
        let filter: DashboardFilter =
            serde_json::from_str(r#"{"dateRangeDays": 200000000, "category": "all"}"#).unwrap();
        let snapshot = build_snapshot(&store, &filter, &SnapshotSettings::default());

        assert_eq!(snapshot.metrics.total_orders, store.orders().len());
        for card in &snapshot.indicators {
            assert_eq!(card.previous_value, 0.0);
            assert_eq!(card.change_percent, None);
        }
    }
}
