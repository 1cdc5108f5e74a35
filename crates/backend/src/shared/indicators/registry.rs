use contracts::domain::a001_order::Order;
use contracts::shared::indicators::*;
use std::collections::HashMap;

use super::compute::sales;
use super::metadata::ids;

/// Orders of the selected window and of the window right before it.
#[derive(Debug, Clone, Default)]
pub struct PeriodOrders<'a> {
    pub current: Vec<&'a Order>,
    pub previous: Vec<&'a Order>,
}

type ComputeFn = fn(&PeriodOrders) -> IndicatorValue;

/// Central registry: maps `IndicatorId` to its compute function.
pub struct IndicatorRegistry {
    fns: HashMap<String, ComputeFn>,
}

impl IndicatorRegistry {
    pub fn new() -> Self {
        let mut fns: HashMap<String, ComputeFn> = HashMap::new();

        fns.insert(ids::sales_revenue().0, sales::compute_sales_revenue);
        fns.insert(ids::sales_order_count().0, sales::compute_sales_order_count);
        fns.insert(
            ids::sales_avg_order_value().0,
            sales::compute_sales_avg_order_value,
        );
        fns.insert(
            ids::sales_unique_customers().0,
            sales::compute_sales_unique_customers,
        );

        Self { fns }
    }

    /// Compute a batch of indicators; unknown ids are skipped.
    pub fn compute(&self, ids: &[IndicatorId], periods: &PeriodOrders) -> Vec<IndicatorValue> {
        let mut results = Vec::with_capacity(ids.len());

        for id in ids {
            if let Some(compute_fn) = self.fns.get(&id.0) {
                results.push(compute_fn(periods));
            } else {
                tracing::warn!("indicator {} not found in registry", id.0);
            }
        }

        results
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::indicators::metadata::{build_catalog, overview_ids};
    use chrono::{TimeZone, Utc};
    use contracts::domain::a001_order::OrderId;
    use contracts::enums::{Category, OrderStatus, Region};

    fn order(seq: u64, price: u32, customer: &str) -> Order {
        Order {
            order_id: OrderId::new("FKO", seq),
            date: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
            category: Category::Appliances,
            product: "Havells Geyser".into(),
            quantity: 1,
            price,
            customer_id: customer.into(),
            status: OrderStatus::Shipped,
            state: Region::Delhi,
        }
    }

    #[test]
    fn test_every_catalog_indicator_is_registered() {
        let registry = IndicatorRegistry::new();
        let catalog = build_catalog();
        let ids: Vec<IndicatorId> = catalog.indicators.iter().map(|m| m.id.clone()).collect();
        let values = registry.compute(&ids, &PeriodOrders::default());
        assert_eq!(values.len(), catalog.indicators.len());
        assert_eq!(catalog.sets[0].indicators, overview_ids());
    }

    #[test]
    fn test_compute_against_previous_window() {
        let current = vec![order(1, 3_000, "CUST-1"), order(2, 3_000, "CUST-2")];
        let previous = vec![order(3, 4_000, "CUST-1")];
        let periods = PeriodOrders {
            current: current.iter().collect(),
            previous: previous.iter().collect(),
        };

        let values = IndicatorRegistry::new().compute(&overview_ids(), &periods);
        assert_eq!(values.len(), 4);

        let revenue = &values[0];
        assert_eq!(revenue.id, ids::sales_revenue());
        assert_eq!(revenue.value, 6_000.0);
        assert_eq!(revenue.previous_value, 4_000.0);
        assert_eq!(revenue.change_percent, Some(50.0));
        assert_eq!(revenue.status, IndicatorStatus::Good);

        let aov = &values[2];
        assert_eq!(aov.value, 3_000.0);
        assert_eq!(aov.change_percent, Some(-25.0));
        assert_eq!(aov.status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_unknown_id_is_skipped() {
        let values = IndicatorRegistry::new().compute(
            &[IndicatorId::new("does_not_exist"), ids::sales_order_count()],
            &PeriodOrders::default(),
        );
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, 0.0);
        assert_eq!(values[0].change_percent, None);
    }
}
