use chrono::NaiveDate;
use contracts::dashboards::d100_sales_overview::{
    CategoryStat, CustomerSegment, CustomerStat, ProductBadge, ProductStat, SalesMetrics,
};
use contracts::domain::a001_order::Order;
use contracts::enums::Category;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DEFAULT_TOP_PRODUCTS_LIMIT: usize = 10;
pub const TOP_CUSTOMERS_LIMIT: usize = 10;

/// Totals over the subset: revenue, order count, average order value and
/// the number of distinct customers
pub fn calculate_metrics(orders: &[&Order]) -> SalesMetrics {
    let total_revenue: f64 = orders.iter().map(|o| o.revenue()).sum();
    let total_orders = orders.len();
    let avg_order_value = average(total_revenue, total_orders);
    let unique_customers = orders
        .iter()
        .map(|o| o.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    SalesMetrics {
        total_revenue,
        total_orders,
        avg_order_value,
        unique_customers,
    }
}

/// Revenue per category
pub fn sales_by_category(orders: &[&Order]) -> BTreeMap<Category, f64> {
    let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
    for order in orders {
        *totals.entry(order.category).or_insert(0.0) += order.revenue();
    }
    totals
}

/// Per-category rollup, highest revenue first.
///
/// Equal revenues keep the order in which the categories were first seen.
pub fn category_stats(orders: &[&Order]) -> Vec<CategoryStat> {
    struct Acc<'a> {
        category: Category,
        orders: usize,
        revenue: f64,
        products: HashSet<&'a str>,
    }

    let mut index: HashMap<Category, usize> = HashMap::new();
    let mut groups: Vec<Acc> = Vec::new();

    for order in orders {
        let slot = *index.entry(order.category).or_insert_with(|| {
            groups.push(Acc {
                category: order.category,
                orders: 0,
                revenue: 0.0,
                products: HashSet::new(),
            });
            groups.len() - 1
        });
        let acc = &mut groups[slot];
        acc.orders += 1;
        acc.revenue += order.revenue();
        acc.products.insert(order.product.as_str());
    }

    let mut stats: Vec<CategoryStat> = groups
        .into_iter()
        .map(|acc| CategoryStat {
            category: acc.category,
            orders: acc.orders,
            revenue: acc.revenue,
            avg_order: average(acc.revenue, acc.orders),
            products: acc.products.len(),
        })
        .collect();

    stats.sort_by(|a, b| by_revenue_desc(a.revenue, b.revenue));
    stats
}

/// Revenue per calendar day (UTC).
///
/// The subset is taken as is: restricting it to a window is the caller's job.
pub fn daily_sales(orders: &[&Order]) -> BTreeMap<NaiveDate, f64> {
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for order in orders {
        *daily.entry(order.date.date_naive()).or_insert(0.0) += order.revenue();
    }
    daily
}

/// Best-selling products by revenue, at most `limit` rows.
///
/// A product keeps the category of its first order in the subset; equal
/// revenues keep first-seen order.
pub fn top_products(orders: &[&Order], limit: usize) -> Vec<ProductStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut products: Vec<ProductStat> = Vec::new();

    for order in orders {
        let slot = *index.entry(order.product.as_str()).or_insert_with(|| {
            products.push(ProductStat {
                product: order.product.clone(),
                category: order.category,
                revenue: 0.0,
                quantity: 0,
                badge: ProductBadge::Trending,
            });
            products.len() - 1
        });
        let stat = &mut products[slot];
        stat.revenue += order.revenue();
        stat.quantity += order.quantity as u64;
    }

    products.sort_by(|a, b| by_revenue_desc(a.revenue, b.revenue));
    products.truncate(limit);
    for (rank, stat) in products.iter_mut().enumerate() {
        stat.badge = ProductBadge::for_rank(rank);
    }
    products
}

/// Top customers by revenue (at most ten)
pub fn customer_insights(orders: &[&Order]) -> Vec<CustomerStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut customers: Vec<(&str, usize, f64)> = Vec::new();

    for order in orders {
        let slot = *index.entry(order.customer_id.as_str()).or_insert_with(|| {
            customers.push((order.customer_id.as_str(), 0, 0.0));
            customers.len() - 1
        });
        let entry = &mut customers[slot];
        entry.1 += 1;
        entry.2 += order.revenue();
    }

    customers.sort_by(|a, b| by_revenue_desc(a.2, b.2));
    customers
        .into_iter()
        .take(TOP_CUSTOMERS_LIMIT)
        .map(|(customer_id, orders, revenue)| {
            let avg_order = average(revenue, orders);
            CustomerStat {
                customer_id: customer_id.to_string(),
                orders,
                revenue,
                avg_order,
                segment: CustomerSegment::from_avg_order(avg_order),
            }
        })
        .collect()
}

fn average(total: f64, count: usize) -> f64 {
    if count > 0 {
        total / count as f64
    } else {
        0.0
    }
}

fn by_revenue_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
