use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_order::Order;
use contracts::enums::CategoryFilter;

use super::generator::OrderSource;

/// Frozen order collection for one dashboard session.
///
/// Built once at startup and only handed out by shared reference;
/// filters return borrowed subsets and never touch the collection.
#[derive(Debug, Clone)]
pub struct OrderStore {
    orders: Vec<Order>,
    as_of: DateTime<Utc>,
}

impl OrderStore {
    /// Generate the dataset from `source`, stamped relative to `as_of`
    pub fn generate<S: OrderSource + ?Sized>(source: &mut S, as_of: DateTime<Utc>) -> Self {
        let orders = source.generate(as_of);
        tracing::info!("Generated {} orders as of {}", orders.len(), as_of);
        Self { orders, as_of }
    }

    pub fn from_orders(orders: Vec<Order>, as_of: DateTime<Utc>) -> Self {
        Self { orders, as_of }
    }

    /// Reference instant for date windows (generation time)
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Every order as a subset, no filter applied
    pub fn all(&self) -> Vec<&Order> {
        self.orders.iter().collect()
    }

    /// Orders placed within the trailing `days` before [`Self::as_of`].
    ///
    /// Negative windows match nothing. A zero window keeps orders stamped
    /// at (or after) the reference instant. A window reaching past the
    /// representable calendar is unbounded and keeps every order.
    pub fn filter_by_date_range(&self, days: i64) -> Vec<&Order> {
        self.filter_by_date_range_at(days, self.as_of)
    }

    /// Same as [`Self::filter_by_date_range`] with an explicit reference instant
    pub fn filter_by_date_range_at(&self, days: i64, now: DateTime<Utc>) -> Vec<&Order> {
        if days < 0 {
            return Vec::new();
        }
        match days_before(now, days) {
            Some(cutoff) => self.orders.iter().filter(|o| o.date >= cutoff).collect(),
            None => self.all(),
        }
    }

    /// The window of the same length right before the trailing `days` window:
    /// `[as_of - 2*days, as_of - days)`.
    ///
    /// Empty when that window falls outside the representable calendar.
    pub fn previous_window(&self, days: i64) -> Vec<&Order> {
        if days <= 0 {
            return Vec::new();
        }
        let Some((start, end)) = days_before(self.as_of, days)
            .and_then(|end| days_before(end, days).map(|start| (start, end)))
        else {
            return Vec::new();
        };
        self.orders
            .iter()
            .filter(|o| o.date >= start && o.date < end)
            .collect()
    }
}

/// `now - days`, `None` when it does not fit in a `DateTime<Utc>`
fn days_before(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|span| now.checked_sub_signed(span))
}

/// Keep orders of one category; `"all"` returns the input unchanged and an
/// unknown name matches nothing.
pub fn filter_by_category<'a>(orders: &[&'a Order], category: &str) -> Vec<&'a Order> {
    filter_by_category_filter(orders, &CategoryFilter::parse(category))
}

pub fn filter_by_category_filter<'a>(orders: &[&'a Order], filter: &CategoryFilter) -> Vec<&'a Order> {
    match filter {
        CategoryFilter::All => orders.to_vec(),
        _ => orders
            .iter()
            .copied()
            .filter(|o| filter.matches(o.category))
            .collect(),
    }
}
