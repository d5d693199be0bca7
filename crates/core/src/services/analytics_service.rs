use std::collections::HashMap;

use crate::models::analytics::{AllocationSlice, PortfolioSummary};
use crate::models::holding::{Category, Holding};

/// Computes dashboard analytics from the holdings collection.
///
/// Pure and deterministic: the same input always yields the same output,
/// and nothing here has side effects.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Derive the full dashboard summary from the current holdings.
    ///
    /// Totals cover every holding, negative positions included, so debt
    /// reduces net worth. The gain percentage is 0 whenever the total
    /// cost is 0 (never NaN).
    #[must_use]
    pub fn summarize(&self, holdings: &[Holding]) -> PortfolioSummary {
        let total_value: f64 = holdings.iter().map(Holding::market_value).sum();
        let total_cost: f64 = holdings.iter().map(Holding::cost_basis).sum();
        let total_gain = total_value - total_cost;
        let total_gain_percent = if total_cost == 0.0 {
            0.0
        } else {
            total_gain / total_cost.abs() * 100.0
        };

        PortfolioSummary {
            total_value,
            total_cost,
            total_gain,
            total_gain_percent,
            allocation: self.allocation(holdings),
        }
    }

    /// Group market value by category, keep only categories whose summed
    /// value is strictly positive, and sort largest first.
    fn allocation(&self, holdings: &[Holding]) -> Vec<AllocationSlice> {
        // First-seen category order keeps equal-valued slices stable.
        let mut order: Vec<Category> = Vec::new();
        let mut sums: HashMap<Category, f64> = HashMap::new();
        for holding in holdings {
            if !sums.contains_key(&holding.category) {
                order.push(holding.category);
            }
            *sums.entry(holding.category).or_insert(0.0) += holding.market_value();
        }

        let mut slices: Vec<AllocationSlice> = order
            .into_iter()
            .filter_map(|category| {
                let value = sums[&category];
                (value > 0.0).then(|| AllocationSlice {
                    category,
                    value,
                    percent: 0.0,
                })
            })
            .collect();

        slices.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let included_total: f64 = slices.iter().map(|s| s.value).sum();
        if included_total > 0.0 {
            for slice in &mut slices {
                slice.percent = slice.value / included_total * 100.0;
            }
        }
        slices
    }

    /// Holdings ranked by market value, largest first, truncated to `n`.
    /// The sort is stable: equal values keep their insertion order.
    #[must_use]
    pub fn top_holdings<'a>(&self, holdings: &'a [Holding], n: usize) -> Vec<&'a Holding> {
        let mut ranked: Vec<&Holding> = holdings.iter().collect();
        ranked.sort_by(|a, b| {
            b.market_value()
                .partial_cmp(&a.market_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
