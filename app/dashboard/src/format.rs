//! FILENAME: app/dashboard/src/format.rs
// PURPOSE: Display strings for KPI cards and the active-filter row.

use crossfilter_engine::{FilterEntry, KpiResult};
use engine::{format_number, NumberFormat};
use serde::{Deserialize, Serialize};

pub const NO_ACTIVE_FILTERS: &str = "No Active Filters";

const CURRENCY: NumberFormat = NumberFormat::Currency { decimal_places: 0 };
const INTEGER: NumberFormat = NumberFormat::Number { decimal_places: 0 };

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiCard {
    pub title: String,
    pub value: String,
}

impl KpiCard {
    fn new(title: &str, value: String) -> Self {
        KpiCard {
            title: title.to_string(),
            value,
        }
    }
}

/// The four headline cards, in display order.
pub fn kpi_cards(kpis: &KpiResult) -> Vec<KpiCard> {
    vec![
        KpiCard::new("Total Amount", format_number(kpis.total_amount(), CURRENCY)),
        KpiCard::new("Total Profit", format_number(kpis.total_profit(), CURRENCY)),
        KpiCard::new("Total Quantity", format_number(kpis.total_quantity(), INTEGER)),
        KpiCard::new("Order Count", format_number(kpis.distinct_orders() as f64, INTEGER)),
    ]
}

/// One label per active filter, or a single placeholder when there are none.
pub fn active_filter_labels(entries: &[FilterEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_ACTIVE_FILTERS.to_string()];
    }
    entries.iter().map(FilterEntry::label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{Dimension, Totals};

    #[test]
    fn test_kpi_cards() {
        let kpis = KpiResult {
            totals: Totals {
                amount: 437771.0,
                profit: -1234.4,
                quantity: 5615.0,
                distinct_orders: 500,
            },
            record_count: 1500,
        };
        let values: Vec<String> = kpi_cards(&kpis).into_iter().map(|c| c.value).collect();
        assert_eq!(values, vec!["$437,771", "-$1,234", "5,615", "500"]);
    }

    #[test]
    fn test_zero_kpis() {
        let cards = kpi_cards(&KpiResult::default());
        assert_eq!(cards[0].value, "$0");
        assert_eq!(cards[3].title, "Order Count");
        assert_eq!(cards[3].value, "0");
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(active_filter_labels(&[]), vec![NO_ACTIVE_FILTERS]);

        let entries = vec![
            FilterEntry { dimension: Dimension::State, value: "Texas".into() },
            FilterEntry { dimension: Dimension::SubCategory, value: "Chairs".into() },
        ];
        assert_eq!(
            active_filter_labels(&entries),
            vec!["State: Texas", "Sub-Category: Chairs"]
        );
    }
}
