use crate::errors::CoreError;
use crate::models::holding::{default_holdings, Holding};
use crate::models::policy::{default_policy, PolicySection};

use super::backend::KeyValueStore;

/// Storage key for the serialized holdings collection.
pub const HOLDINGS_KEY: &str = "portfolio_assets";

/// Storage key for the serialized policy document.
pub const POLICY_KEY: &str = "portfolio_ips";

/// High-level storage operations: typed load/save of the two persisted
/// records.
///
/// Loads fail soft. A missing or unreadable record falls back to the
/// fixed default set, and the problem is logged rather than returned, so
/// a corrupt store can never keep the tracker from starting. Saves do
/// report their errors; the caller on the mutation path swallows them
/// and keeps the in-memory state authoritative for the session.
pub struct StorageManager;

impl StorageManager {
    /// Load the holdings collection, falling back to the default set.
    #[must_use]
    pub fn load_holdings(store: &dyn KeyValueStore) -> Vec<Holding> {
        Self::load_or_default(store, HOLDINGS_KEY, default_holdings)
    }

    /// Load the policy document, falling back to the default sections.
    #[must_use]
    pub fn load_policy(store: &dyn KeyValueStore) -> Vec<PolicySection> {
        Self::load_or_default(store, POLICY_KEY, default_policy)
    }

    /// Serialize the holdings collection and overwrite its record.
    pub fn save_holdings(
        store: &mut dyn KeyValueStore,
        holdings: &[Holding],
    ) -> Result<(), CoreError> {
        Self::save(store, HOLDINGS_KEY, holdings)
    }

    /// Serialize the policy document and overwrite its record.
    pub fn save_policy(
        store: &mut dyn KeyValueStore,
        sections: &[PolicySection],
    ) -> Result<(), CoreError> {
        Self::save(store, POLICY_KEY, sections)
    }

    fn load_or_default<T, F>(store: &dyn KeyValueStore, key: &str, default: F) -> Vec<T>
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let raw = match store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default(),
            Err(e) => {
                log::warn!("failed to read '{key}' from {} store: {e}", store.name());
                return default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("discarding unparsable '{key}' record: {e}");
                default()
            }
        }
    }

    fn save<T: serde::Serialize>(
        store: &mut dyn KeyValueStore,
        key: &str,
        records: &[T],
    ) -> Result<(), CoreError> {
        let json = serde_json::to_string(records)
            .map_err(|e| CoreError::Serialization(format!("failed to serialize '{key}': {e}")))?;
        store.set(key, &json)
    }
}
