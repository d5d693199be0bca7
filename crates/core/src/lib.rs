pub mod errors;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    analytics::PortfolioSummary,
    holding::{Holding, HoldingUpdate},
    policy::{PolicyEditor, PolicySection},
};
use services::{analytics_service::AnalyticsService, holdings_service::HoldingsService};
use storage::backend::KeyValueStore;
use storage::manager::StorageManager;

/// Main entry point for the Portfolio Tracker core library.
/// Holds the loaded collections, the policy edit state, and the services
/// that operate on them.
///
/// Both collections are loaded once from the injected store when the
/// tracker is built, live in memory for the session, and are written
/// back after every mutation.
#[must_use]
pub struct PortfolioTracker {
    holdings: Vec<Holding>,
    policy: PolicyEditor,
    store: Box<dyn KeyValueStore>,
    holdings_service: HoldingsService,
    analytics_service: AnalyticsService,
    /// Bumped on every holdings mutation; keys the summary cache.
    revision: u64,
    summary_cache: Option<(u64, PortfolioSummary)>,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.holdings.len())
            .field("policy_sections", &self.policy.committed().len())
            .field("editing_policy", &self.policy.is_editing())
            .field("store", &self.store.name())
            .field("revision", &self.revision)
            .finish()
    }
}

impl PortfolioTracker {
    /// Load both collections from the injected store.
    /// Missing or unreadable records fall back to the fixed defaults, so
    /// construction never fails.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let holdings = StorageManager::load_holdings(store.as_ref());
        let policy = PolicyEditor::new(StorageManager::load_policy(store.as_ref()));

        Self {
            holdings,
            policy,
            store,
            holdings_service: HoldingsService::new(),
            analytics_service: AnalyticsService::new(),
            revision: 0,
            summary_cache: None,
        }
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// All holdings, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Get a single holding by its id.
    #[must_use]
    pub fn holding(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    /// Number of holdings (the dashboard's "Total Holdings" figure).
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Append a new placeholder holding and persist the collection.
    /// Returns the created record.
    pub fn add_holding(&mut self) -> Holding {
        let holding = self.holdings_service.add(&mut self.holdings);
        self.after_holdings_mutation();
        holding
    }

    /// Remove a holding by id and persist the collection.
    /// No-op (nothing persisted) if the id is unknown.
    pub fn remove_holding(&mut self, id: &str) -> bool {
        let removed = self.holdings_service.remove(&mut self.holdings, id);
        if removed {
            self.after_holdings_mutation();
        }
        removed
    }

    /// Replace one field of a holding and persist the collection.
    /// No-op (nothing persisted) if the id is unknown.
    pub fn update_holding(&mut self, id: &str, update: HoldingUpdate) -> bool {
        let updated = self.holdings_service.update(&mut self.holdings, id, update);
        if updated {
            self.after_holdings_mutation();
        }
        updated
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// The derived dashboard summary.
    ///
    /// Recomputed only when the holdings collection has changed since
    /// the last call; repeated reads between mutations return the cached
    /// value.
    pub fn summary(&mut self) -> PortfolioSummary {
        if let Some((revision, summary)) = &self.summary_cache {
            if *revision == self.revision {
                return summary.clone();
            }
        }
        let summary = self.analytics_service.summarize(&self.holdings);
        self.summary_cache = Some((self.revision, summary.clone()));
        summary
    }

    /// The `n` largest holdings by market value, largest first.
    #[must_use]
    pub fn top_holdings(&self, n: usize) -> Vec<&Holding> {
        self.analytics_service.top_holdings(&self.holdings, n)
    }

    // ── Policy document ─────────────────────────────────────────────

    /// The committed policy sections, in document order.
    #[must_use]
    pub fn policy_sections(&self) -> &[PolicySection] {
        self.policy.committed()
    }

    /// The draft sections, if an edit is in progress.
    #[must_use]
    pub fn draft_sections(&self) -> Option<&[PolicySection]> {
        self.policy.draft()
    }

    /// Whether the policy document is currently being edited.
    #[must_use]
    pub fn is_editing_policy(&self) -> bool {
        self.policy.is_editing()
    }

    /// Enter the editing state, snapshotting the committed sections into
    /// a draft. No-op if already editing.
    pub fn begin_policy_edit(&mut self) {
        let editor = std::mem::take(&mut self.policy);
        self.policy = editor.begin_edit();
    }

    /// Replace the content of a draft section. No-op unless an edit is
    /// in progress and the id matches a section.
    pub fn edit_policy_section(&mut self, id: &str, content: impl Into<String>) {
        let editor = std::mem::take(&mut self.policy);
        self.policy = editor.edit_section(id, content);
    }

    /// Promote the draft to the committed document and persist it.
    /// No-op (nothing persisted) when not editing.
    pub fn commit_policy(&mut self) {
        if !self.policy.is_editing() {
            return;
        }
        let editor = std::mem::take(&mut self.policy);
        self.policy = editor.commit();
        self.persist_policy();
    }

    // ── Internal ────────────────────────────────────────────────────

    fn after_holdings_mutation(&mut self) {
        self.revision += 1;
        // Write failures are logged, never surfaced: the in-memory
        // collection stays authoritative for the session.
        if let Err(e) = StorageManager::save_holdings(self.store.as_mut(), &self.holdings) {
            log::warn!("failed to persist holdings to {} store: {e}", self.store.name());
        }
    }

    fn persist_policy(&mut self) {
        if let Err(e) = StorageManager::save_policy(self.store.as_mut(), self.policy.committed()) {
            log::warn!(
                "failed to persist policy document to {} store: {e}",
                self.store.name()
            );
        }
    }
}
