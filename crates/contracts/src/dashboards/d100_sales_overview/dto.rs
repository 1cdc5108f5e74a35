use crate::enums::Category;
use crate::shared::indicators::{IndicatorCatalogResponse, IndicatorValue};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter selected on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilter {
    /// Trailing window in days
    pub date_range_days: i64,
    /// Category display name or `"all"`
    pub category: String,
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            date_range_days: 30,
            category: "all".to_string(),
        }
    }
}

/// Headline metrics over a subset of orders
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: f64,
    pub total_orders: usize,
    /// 0 when there are no orders
    pub avg_order_value: f64,
    pub unique_customers: usize,
}

/// Per-category rollup row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: Category,
    pub orders: usize,
    pub revenue: f64,
    pub avg_order: f64,
    /// Distinct product names sold
    pub products: usize,
}

/// Row of the top-products table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStat {
    pub product: String,
    pub category: Category,
    pub revenue: f64,
    pub quantity: u64,
    /// Derived from the position in the ranking
    pub badge: ProductBadge,
}

/// Badge shown next to a product in the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductBadge {
    Hot,
    Trending,
}

impl ProductBadge {
    /// Top three positions (0-based `rank` < 3) are "hot"
    pub fn for_rank(rank: usize) -> Self {
        if rank < 3 {
            ProductBadge::Hot
        } else {
            ProductBadge::Trending
        }
    }
}

/// Customer segment derived from the average order value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerSegment {
    Vip,
    Premium,
    Regular,
}

impl CustomerSegment {
    pub const VIP_THRESHOLD: f64 = 30_000.0;
    pub const PREMIUM_THRESHOLD: f64 = 15_000.0;

    pub fn from_avg_order(avg_order: f64) -> Self {
        if avg_order > Self::VIP_THRESHOLD {
            CustomerSegment::Vip
        } else if avg_order > Self::PREMIUM_THRESHOLD {
            CustomerSegment::Premium
        } else {
            CustomerSegment::Regular
        }
    }
}

/// Row of the top-customers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStat {
    pub customer_id: String,
    pub orders: usize,
    pub revenue: f64,
    pub avg_order: f64,
    pub segment: CustomerSegment,
}

/// One bar of the category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBar {
    pub category: Category,
    pub revenue: f64,
    /// Height relative to the largest bar, 0..=100
    pub height_percent: f64,
}

/// One bar of the daily trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub revenue: f64,
    /// Height relative to the largest bar, 0..=100
    pub height_percent: f64,
}

/// Average order value band used by the insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AovBand {
    High,
    Moderate,
}

impl AovBand {
    pub const HIGH_THRESHOLD: f64 = 15_000.0;

    pub fn classify(avg_order_value: f64) -> Self {
        if avg_order_value > Self::HIGH_THRESHOLD {
            AovBand::High
        } else {
            AovBand::Moderate
        }
    }
}

/// Leading category with its share of total revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    pub category: Category,
    pub revenue: f64,
    /// Share of total revenue, 0..=100
    pub share_percent: f64,
}

/// Numbers behind the narrative insights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    pub metrics: SalesMetrics,
    pub top_category: TopCategory,
    pub aov_band: AovBand,
    /// Orders per unique customer
    pub orders_per_customer: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    TopCategory,
    AverageOrderValue,
    CustomerBase,
    OrderVolume,
}

/// Narrative insight card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub text: String,
}

/// Everything one dashboard refresh produces for a filter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub filter: DashboardFilter,
    /// Reference instant the date window was computed from
    pub as_of: DateTime<Utc>,
    pub metrics: SalesMetrics,
    /// Labels, formats and layout of the metric cards
    pub catalog: IndicatorCatalogResponse,
    /// Metric cards with previous-window comparison
    pub indicators: Vec<IndicatorValue>,
    pub insights: Vec<Insight>,
    pub sales_by_category: BTreeMap<Category, f64>,
    pub category_chart: Vec<CategoryBar>,
    pub daily_sales: BTreeMap<NaiveDate, f64>,
    pub trend: Vec<TrendPoint>,
    pub top_products: Vec<ProductStat>,
    pub category_stats: Vec<CategoryStat>,
    pub customer_insights: Vec<CustomerStat>,
}
