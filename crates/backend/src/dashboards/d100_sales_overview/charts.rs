use contracts::dashboards::d100_sales_overview::{CategoryBar, TrendPoint};
use contracts::domain::a001_order::Order;

use super::service::{daily_sales, sales_by_category};

pub const DEFAULT_TREND_POINTS: usize = 14;

/// Category bars, largest first, heights relative to the largest bar
pub fn category_chart(orders: &[&Order]) -> Vec<CategoryBar> {
    let mut totals: Vec<_> = sales_by_category(orders).into_iter().collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let max = totals.first().map(|(_, v)| *v).unwrap_or(0.0);
    totals
        .into_iter()
        .map(|(category, revenue)| CategoryBar {
            category,
            revenue,
            height_percent: relative_height(revenue, max),
        })
        .collect()
}

/// The last `points` days that had sales, oldest first
pub fn daily_trend(orders: &[&Order], points: usize) -> Vec<TrendPoint> {
    let daily = daily_sales(orders);
    let skip = daily.len().saturating_sub(points);
    let window: Vec<_> = daily.into_iter().skip(skip).collect();

    let max = window.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    window
        .into_iter()
        .map(|(date, revenue)| TrendPoint {
            date,
            revenue,
            height_percent: relative_height(revenue, max),
        })
        .collect()
}

fn relative_height(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max * 100.0
    } else {
        0.0
    }
}
