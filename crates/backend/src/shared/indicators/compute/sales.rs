use contracts::dashboards::d100_sales_overview::SalesMetrics;
use contracts::shared::indicators::*;

use crate::dashboards::d100_sales_overview::calculate_metrics;
use crate::shared::indicators::metadata::ids;
use crate::shared::indicators::registry::PeriodOrders;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn metrics_pair(periods: &PeriodOrders) -> (SalesMetrics, SalesMetrics) {
    (
        calculate_metrics(&periods.current),
        calculate_metrics(&periods.previous),
    )
}

pub(crate) fn pct_change(cur: f64, prev: f64) -> Option<f64> {
    if prev.abs() < 0.01 {
        None
    } else {
        Some(((cur - prev) / prev.abs()) * 100.0)
    }
}

/// Every overview card is "higher is better": growth beyond 5% is good,
/// a drop beyond 5% is bad.
pub(crate) fn status_by_change(change: Option<f64>) -> IndicatorStatus {
    match change {
        Some(c) if c > 5.0 => IndicatorStatus::Good,
        Some(c) if c < -5.0 => IndicatorStatus::Bad,
        _ => IndicatorStatus::Neutral,
    }
}

fn card(id: IndicatorId, value: f64, previous_value: f64) -> IndicatorValue {
    let change = pct_change(value, previous_value);
    IndicatorValue {
        id,
        value,
        previous_value,
        change_percent: change,
        status: status_by_change(change),
    }
}

// ---------------------------------------------------------------------------
// Public compute functions
// ---------------------------------------------------------------------------

pub fn compute_sales_revenue(periods: &PeriodOrders) -> IndicatorValue {
    let (cur, prev) = metrics_pair(periods);
    card(ids::sales_revenue(), cur.total_revenue, prev.total_revenue)
}

pub fn compute_sales_order_count(periods: &PeriodOrders) -> IndicatorValue {
    let (cur, prev) = metrics_pair(periods);
    card(
        ids::sales_order_count(),
        cur.total_orders as f64,
        prev.total_orders as f64,
    )
}

pub fn compute_sales_avg_order_value(periods: &PeriodOrders) -> IndicatorValue {
    let (cur, prev) = metrics_pair(periods);
    card(
        ids::sales_avg_order_value(),
        cur.avg_order_value,
        prev.avg_order_value,
    )
}

pub fn compute_sales_unique_customers(periods: &PeriodOrders) -> IndicatorValue {
    let (cur, prev) = metrics_pair(periods);
    card(
        ids::sales_unique_customers(),
        cur.unique_customers as f64,
        prev.unique_customers as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pct_change_guards_zero_base() {
        assert_eq!(pct_change(100.0, 0.0), None);
        assert_eq!(pct_change(100.0, 0.001), None);
        assert_eq!(pct_change(150.0, 100.0), Some(50.0));
        assert_eq!(pct_change(50.0, 100.0), Some(-50.0));
    }

    #[test]
    fn test_status_by_change() {
        assert_eq!(status_by_change(Some(5.1)), IndicatorStatus::Good);
        assert_eq!(status_by_change(Some(5.0)), IndicatorStatus::Neutral);
        assert_eq!(status_by_change(Some(-5.0)), IndicatorStatus::Neutral);
        assert_eq!(status_by_change(Some(-12.0)), IndicatorStatus::Bad);
        assert_eq!(status_by_change(None), IndicatorStatus::Neutral);
    }
}
