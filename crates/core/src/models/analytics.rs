use serde::{Deserialize, Serialize};

use super::holding::Category;

/// Derived dashboard figures for the whole portfolio.
///
/// Never persisted; recomputed from the holdings collection whenever it
/// changes. The frontend renders these directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Net worth: sum of market values (debt positions subtract)
    pub total_value: f64,

    /// Sum of cost bases
    pub total_cost: f64,

    /// total_value minus total_cost
    pub total_gain: f64,

    /// total_gain as a percentage of |total_cost|; 0 when total_cost is 0
    pub total_gain_percent: f64,

    /// Per-category breakdown of positive market value, largest first
    pub allocation: Vec<AllocationSlice>,
}

/// One category's share of the allocation breakdown.
///
/// Only categories whose summed market value is strictly positive appear
/// in the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// The category this slice aggregates
    pub category: Category,

    /// Summed market value of the category's holdings
    pub value: f64,

    /// This slice's share of the summed included values, as a percentage
    pub percent: f64,
}
