use contracts::dashboards::d100_sales_overview::{
    AovBand, Insight, InsightKind, InsightSummary, TopCategory,
};
use contracts::domain::a001_order::Order;

use super::service::{calculate_metrics, sales_by_category};
use crate::shared::format::{fixed2, format_number, to_lakhs};

/// Numbers behind the insight cards, `None` for an empty subset.
///
/// The leading category is the one with the highest revenue; on a tie the
/// category listed first in the catalog wins.
pub fn summarize_insights(orders: &[&Order]) -> Option<InsightSummary> {
    if orders.is_empty() {
        return None;
    }

    let metrics = calculate_metrics(orders);
    let (category, revenue) = sales_by_category(orders)
        .into_iter()
        .fold(None, |best: Option<(_, f64)>, (category, revenue)| match best {
            Some((_, top)) if top >= revenue => best,
            _ => Some((category, revenue)),
        })?;

    let share_percent = if metrics.total_revenue > 0.0 {
        revenue / metrics.total_revenue * 100.0
    } else {
        0.0
    };
    let orders_per_customer = if metrics.unique_customers > 0 {
        metrics.total_orders as f64 / metrics.unique_customers as f64
    } else {
        0.0
    };

    Some(InsightSummary {
        metrics,
        top_category: TopCategory {
            category,
            revenue,
            share_percent,
        },
        aov_band: AovBand::classify(metrics.avg_order_value),
        orders_per_customer,
    })
}

/// Narrative cards for the insights panel; empty for an empty subset
pub fn generate_insights(orders: &[&Order]) -> Vec<Insight> {
    let Some(summary) = summarize_insights(orders) else {
        return Vec::new();
    };
    let metrics = &summary.metrics;
    let top = &summary.top_category;

    let (band, meaning) = match summary.aov_band {
        AovBand::High => ("high", "strong premium product adoption"),
        AovBand::Moderate => ("moderate", "good mix of products"),
    };

    vec![
        Insight {
            kind: InsightKind::TopCategory,
            title: "Top Performing Category".to_string(),
            text: format!(
                "{} is leading with ₹{:.2} Lakhs in revenue, contributing {:.1}% of total sales.",
                top.category,
                to_lakhs(top.revenue),
                top.share_percent
            ),
        },
        Insight {
            kind: InsightKind::AverageOrderValue,
            title: "Average Order Value".to_string(),
            text: format!(
                "Customers are spending an average of ₹{} per order. This {} AOV indicates {}.",
                fixed2(metrics.avg_order_value),
                band,
                meaning
            ),
        },
        Insight {
            kind: InsightKind::CustomerBase,
            title: "Customer Base".to_string(),
            text: format!(
                "{} unique customers made purchases, with an average of {:.1} orders per customer.",
                format_number(metrics.unique_customers),
                summary.orders_per_customer
            ),
        },
        Insight {
            kind: InsightKind::OrderVolume,
            title: "Order Volume".to_string(),
            text: format!(
                "{} orders processed generating ₹{:.2} Lakhs in total revenue.",
                format_number(metrics.total_orders),
                to_lakhs(metrics.total_revenue)
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_order::OrderId;
    use contracts::enums::{Category, OrderStatus, Region};

    fn order(seq: u64, category: Category, price: u32, customer: &str) -> Order {
        Order {
            order_id: OrderId::new("FKO", seq),
            date: Utc.with_ymd_and_hms(2024, 2, 10, 9, 30, 0).unwrap(),
            category,
            product: "Sample".into(),
            quantity: 1,
            price,
            customer_id: customer.into(),
            status: OrderStatus::Delivered,
            state: Region::WestBengal,
        }
    }

    #[test]
    fn test_summary_picks_top_category_and_band() {
        let orders = vec![
            order(1, Category::Books, 200, "CUST-1"),
            order(2, Category::Books, 300, "CUST-1"),
            order(3, Category::Mobiles, 1_000, "CUST-2"),
        ];
        let subset: Vec<&Order> = orders.iter().collect();
        let summary = summarize_insights(&subset).unwrap();

        assert_eq!(summary.top_category.category, Category::Mobiles);
        assert_eq!(summary.top_category.revenue, 1_000.0);
        assert!((summary.top_category.share_percent - 66.666_666).abs() < 1e-3);
        assert_eq!(summary.aov_band, AovBand::Moderate);
        assert_eq!(summary.orders_per_customer, 1.5);
    }

    #[test]
    fn test_high_band() {
        let orders = vec![
            order(1, Category::Electronics, 60_000, "CUST-1"),
            order(2, Category::Beauty, 500, "CUST-2"),
        ];
        let subset: Vec<&Order> = orders.iter().collect();
        let summary = summarize_insights(&subset).unwrap();
        assert_eq!(summary.top_category.category, Category::Electronics);
        assert_eq!(summary.aov_band, AovBand::High);

        let insights = generate_insights(&subset);
        assert!(insights[1].text.contains("high AOV"));
    }

    #[test]
    fn test_tie_prefers_catalog_order() {
        let orders = vec![
            order(1, Category::Beauty, 700, "CUST-1"),
            order(2, Category::Books, 700, "CUST-2"),
        ];
        let subset: Vec<&Order> = orders.iter().collect();
        let summary = summarize_insights(&subset).unwrap();
        assert_eq!(summary.top_category.category, Category::Books);
    }

    #[test]
    fn test_generated_cards() {
        let orders = vec![
            order(1, Category::HomeFurniture, 250_000, "CUST-1"),
            order(2, Category::Fashion, 1_000, "CUST-2"),
        ];
        let subset: Vec<&Order> = orders.iter().collect();
        let insights = generate_insights(&subset);

        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::TopCategory,
                InsightKind::AverageOrderValue,
                InsightKind::CustomerBase,
                InsightKind::OrderVolume,
            ]
        );
        assert!(insights[0].text.starts_with("Home & Furniture is leading with ₹2.50 Lakhs"));
        assert!(insights[0].text.contains("99.6%"));
        assert!(insights[2].text.starts_with("2 unique customers"));
    }

    #[test]
    fn test_empty_subset_has_no_insights() {
        let empty: Vec<&Order> = Vec::new();
        assert!(summarize_insights(&empty).is_none());
        assert!(generate_insights(&empty).is_empty());
    }
}
