use uuid::Uuid;

use crate::models::holding::{Holding, HoldingUpdate};

/// Manages the holdings collection: add, remove, single-field updates.
///
/// Pure collection logic, no I/O. Persisting the collection after a
/// mutation is the caller's job.
pub struct HoldingsService;

impl HoldingsService {
    pub fn new() -> Self {
        Self
    }

    /// Append the fixed placeholder holding with a freshly generated id
    /// and return a clone of the new record.
    pub fn add(&self, holdings: &mut Vec<Holding>) -> Holding {
        let mut holding = Holding::placeholder();
        // Re-roll until the generated id is unique within the collection.
        while holdings.iter().any(|h| h.id == holding.id) {
            holding.id = Uuid::new_v4().to_string();
        }
        holdings.push(holding.clone());
        holding
    }

    /// Remove the holding matching `id`.
    /// Returns `false` and leaves the collection untouched if no holding
    /// matches.
    pub fn remove(&self, holdings: &mut Vec<Holding>, id: &str) -> bool {
        let before = holdings.len();
        holdings.retain(|h| h.id != id);
        holdings.len() != before
    }

    /// Replace a single field of the holding matching `id`; every other
    /// holding and field is left unchanged.
    /// Returns `false` and leaves the collection untouched if no holding
    /// matches.
    pub fn update(&self, holdings: &mut [Holding], id: &str, update: HoldingUpdate) -> bool {
        let Some(holding) = holdings.iter_mut().find(|h| h.id == id) else {
            return false;
        };
        match update {
            HoldingUpdate::Symbol(symbol) => holding.symbol = symbol,
            HoldingUpdate::Name(name) => holding.name = name,
            HoldingUpdate::Category(category) => holding.category = category,
            HoldingUpdate::Quantity(quantity) => holding.quantity = quantity,
            HoldingUpdate::AvgPrice(avg_price) => holding.avg_price = avg_price,
            HoldingUpdate::CurrentPrice(current_price) => holding.current_price = current_price,
        }
        true
    }
}

impl Default for HoldingsService {
    fn default() -> Self {
        Self::new()
    }
}
