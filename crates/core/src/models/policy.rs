use serde::{Deserialize, Serialize};

/// One named free-text section of the investment policy document.
///
/// `title` is a fixed display label; only `content` changes through the
/// edit workflow. Document order is insertion order and survives
/// persistence round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySection {
    /// Unique identifier
    pub id: String,

    /// Display label (never edited)
    pub title: String,

    /// Free-text body
    pub content: String,
}

impl PolicySection {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The policy document edit workflow.
///
/// Exactly two states: `Viewing` shows the committed sections read-only,
/// `Editing` holds a draft snapshot that edits mutate. Committing is the
/// only exit from `Editing`; there is no discard transition. Transitions
/// consume the current state and return the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum PolicyEditor {
    Viewing {
        committed: Vec<PolicySection>,
    },
    Editing {
        committed: Vec<PolicySection>,
        draft: Vec<PolicySection>,
    },
}

impl PolicyEditor {
    /// Start in `Viewing` with the given committed sections.
    pub fn new(committed: Vec<PolicySection>) -> Self {
        Self::Viewing { committed }
    }

    /// Viewing → Editing, snapshotting the committed sections into a
    /// draft. An already-editing state passes through unchanged, draft
    /// edits included.
    #[must_use]
    pub fn begin_edit(self) -> Self {
        match self {
            Self::Viewing { committed } => {
                let draft = committed.clone();
                Self::Editing { committed, draft }
            }
            editing @ Self::Editing { .. } => editing,
        }
    }

    /// Replace the content of the draft section matching `id`, leaving
    /// its title and the document order untouched. No-op in `Viewing` or
    /// when no section matches.
    #[must_use]
    pub fn edit_section(self, id: &str, content: impl Into<String>) -> Self {
        match self {
            Self::Editing {
                committed,
                mut draft,
            } => {
                if let Some(section) = draft.iter_mut().find(|s| s.id == id) {
                    section.content = content.into();
                }
                Self::Editing { committed, draft }
            }
            viewing @ Self::Viewing { .. } => viewing,
        }
    }

    /// Editing → Viewing, promoting the draft to the committed sections.
    /// No-op in `Viewing`.
    #[must_use]
    pub fn commit(self) -> Self {
        match self {
            Self::Editing { draft, .. } => Self::Viewing { committed: draft },
            viewing @ Self::Viewing { .. } => viewing,
        }
    }

    /// The committed sections (authoritative in both states).
    #[must_use]
    pub fn committed(&self) -> &[PolicySection] {
        match self {
            Self::Viewing { committed } | Self::Editing { committed, .. } => committed,
        }
    }

    /// The draft sections, if an edit is in progress.
    #[must_use]
    pub fn draft(&self) -> Option<&[PolicySection]> {
        match self {
            Self::Editing { draft, .. } => Some(draft),
            Self::Viewing { .. } => None,
        }
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }
}

impl Default for PolicyEditor {
    fn default() -> Self {
        Self::Viewing {
            committed: Vec::new(),
        }
    }
}

/// The fixed default policy document, used on first run and whenever the
/// persisted record is absent or unreadable.
pub fn default_policy() -> Vec<PolicySection> {
    vec![
        PolicySection::new(
            "1",
            "Investment Philosophy",
            "Long-term buy and hold strategy focusing on low-cost index funds. \
             Market timing is to be avoided.",
        ),
        PolicySection::new(
            "2",
            "Asset Allocation Target",
            "70% Equities (Stocks/ETFs)\n25% Fixed Income (Bonds)\n5% Cash/Equivalents",
        ),
        PolicySection::new(
            "3",
            "Rebalancing Rules",
            "Rebalance annually or when an asset class drifts more than 5% from \
             its target allocation.",
        ),
        PolicySection::new(
            "4",
            "Risk Tolerance",
            "Moderate-Aggressive. Willing to withstand 20%+ drawdowns for higher \
             long-term growth.",
        ),
    ]
}
