use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn sales_revenue() -> IndicatorId {
        IndicatorId::new("sales_revenue")
    }
    pub fn sales_order_count() -> IndicatorId {
        IndicatorId::new("sales_order_count")
    }
    pub fn sales_avg_order_value() -> IndicatorId {
        IndicatorId::new("sales_avg_order_value")
    }
    pub fn sales_unique_customers() -> IndicatorId {
        IndicatorId::new("sales_unique_customers")
    }
}

/// Build the full catalogue of metric cards + sets.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::sales_revenue(),
            label: "Total Revenue".into(),
            icon: "dollar-sign".into(),
            format: ValueFormat::Money {
                currency: "₹".into(),
            },
            description: Some("Sum of price × quantity over the selected window".into()),
        },
        IndicatorMeta {
            id: ids::sales_order_count(),
            label: "Total Orders".into(),
            icon: "orders".into(),
            format: ValueFormat::Integer,
            description: None,
        },
        IndicatorMeta {
            id: ids::sales_avg_order_value(),
            label: "Avg Order Value".into(),
            icon: "invoices".into(),
            format: ValueFormat::Money {
                currency: "₹".into(),
            },
            description: Some("Revenue / number of orders".into()),
        },
        IndicatorMeta {
            id: ids::sales_unique_customers(),
            label: "Unique Customers".into(),
            icon: "users".into(),
            format: ValueFormat::Integer,
            description: Some("Distinct customer ids".into()),
        },
    ];

    let sets = vec![IndicatorSetMeta {
        id: IndicatorSetId::new("sales_overview"),
        label: "Sales Overview".into(),
        indicators: overview_ids(),
        columns: 4,
    }];

    IndicatorCatalogResponse { indicators, sets }
}

/// Cards of the overview row, in display order
pub fn overview_ids() -> Vec<IndicatorId> {
    vec![
        ids::sales_revenue(),
        ids::sales_order_count(),
        ids::sales_avg_order_value(),
        ids::sales_unique_customers(),
    ]
}
