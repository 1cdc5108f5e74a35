use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_order::{Order, OrderId};
use contracts::enums::{Category, OrderStatus, Region};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog;

/// Anything that can produce the initial order collection.
///
/// The store is built from a source exactly once; tests plug in
/// deterministic fixtures here instead of random data.
pub trait OrderSource {
    fn generate(&mut self, as_of: DateTime<Utc>) -> Vec<Order>;
}

/// Longest supported history window (about a century)
pub const MAX_HISTORY_DAYS: i64 = 36_500;

/// Parameters of the synthetic dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub order_count: usize,
    pub customer_pool: u32,
    pub order_id_prefix: String,
    pub first_sequence: u64,
    /// Orders are spread over this many trailing days
    pub history_days: i64,
    /// Fixed seed for reproducible datasets, entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            order_count: 5_000,
            customer_pool: 500,
            order_id_prefix: "FKO".to_string(),
            first_sequence: 10_000,
            history_days: 365,
            seed: None,
        }
    }
}

/// Uniformly sampled mock orders.
///
/// Out-of-range settings are clamped rather than rejected:
/// `history_days` to `0..=MAX_HISTORY_DAYS` and `customer_pool` to at
/// least one customer. `Config::validate` rejects such values up front.
pub struct RandomOrderSource {
    settings: GeneratorSettings,
    rng: StdRng,
}

impl RandomOrderSource {
    pub fn new(mut settings: GeneratorSettings) -> Self {
        settings.history_days = settings.history_days.clamp(0, MAX_HISTORY_DAYS);
        settings.customer_pool = settings.customer_pool.max(1);
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { settings, rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorSettings {
            seed: Some(seed),
            ..GeneratorSettings::default()
        })
    }

    fn sample_order(&mut self, index: usize, as_of: DateTime<Utc>, categories: &[Category]) -> Order {
        let rng = &mut self.rng;

        let category = categories[rng.gen_range(0..categories.len())];
        let products = catalog::products(category);
        let product = products[rng.gen_range(0..products.len())];

        let span_ms = Duration::days(self.settings.history_days).num_milliseconds();
        let offset_ms = rng.gen_range(0..=span_ms);
        let date = as_of - Duration::milliseconds(span_ms) + Duration::milliseconds(offset_ms);

        let (low, high) = catalog::price_band(category);
        let price = rng.gen_range(low..high);
        let quantity = rng.gen_range(1..=3);

        let customer = rng.gen_range(1..=self.settings.customer_pool);

        let statuses = OrderStatus::weighted();
        let status = statuses[rng.gen_range(0..statuses.len())];

        let regions = Region::all();
        let state = regions[rng.gen_range(0..regions.len())];

        Order {
            order_id: OrderId::new(
                &self.settings.order_id_prefix,
                self.settings.first_sequence + index as u64,
            ),
            date,
            category,
            product: product.to_string(),
            quantity,
            price,
            customer_id: format!("CUST-{}", customer),
            status,
            state,
        }
    }
}

impl OrderSource for RandomOrderSource {
    fn generate(&mut self, as_of: DateTime<Utc>) -> Vec<Order> {
        let categories = Category::all();
        let mut orders = Vec::with_capacity(self.settings.order_count);
        for i in 0..self.settings.order_count {
            let order = self.sample_order(i, as_of, &categories);
            orders.push(order);
        }
        orders
    }
}

impl OrderSource for Vec<Order> {
    fn generate(&mut self, _as_of: DateTime<Utc>) -> Vec<Order> {
        std::mem::take(self)
    }
}
