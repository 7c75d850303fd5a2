//! Read-side filtering and ordering of ledger entries.
//!
//! Consumers of the ledger (the audit viewer, export jobs) filter by
//! free-text match and by a loose action category. The category is matched
//! by substring on the action label — the label is free text, not a typed
//! field, and filters must keep working for any future label that contains
//! "Approved", "Rejected", or "Submitted".

use serde::{Deserialize, Serialize};

use provost_contracts::audit::AuditRecord;

use crate::entry::LedgerEntry;

/// The loose action category of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    Submitted,
    Approved,
    Rejected,
}

impl LogCategory {
    /// Return true if `action` belongs to this category.
    ///
    /// Substring match on the label, matching how the labels are built
    /// ("Result Submitted", "Result Approved by HOD", …).
    pub fn matches(self, action: &str) -> bool {
        let needle = match self {
            LogCategory::Submitted => "Submitted",
            LogCategory::Approved => "Approved",
            LogCategory::Rejected => "Rejected",
        };
        action.contains(needle)
    }
}

/// Ordering of returned entries by record timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Display convention: most recent action first.
    #[default]
    NewestFirst,
    /// Logical (creation) order.
    OldestFirst,
}

/// A filter over ledger entries.
///
/// All criteria are optional; the default query returns everything,
/// newest first.
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    /// Case-insensitive free-text match over action, user name, and
    /// details.
    pub text: Option<String>,
    pub category: Option<LogCategory>,
    pub order: SortOrder,
}

impl LogQuery {
    /// Return true if `record` satisfies the text and category criteria.
    pub fn matches(&self, record: &AuditRecord) -> bool {
        if let Some(category) = self.category {
            if !category.matches(&record.action) {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = record.action.to_lowercase().contains(&needle)
                || record.user_name.to_lowercase().contains(&needle)
                || record.details.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }

    /// Filter and order `entries` according to this query.
    pub fn apply(&self, entries: &[LedgerEntry]) -> Vec<LedgerEntry> {
        let mut selected: Vec<LedgerEntry> = entries
            .iter()
            .filter(|e| self.matches(&e.record))
            .cloned()
            .collect();

        selected.sort_by_key(|e| e.record.timestamp);
        if self.order == SortOrder::NewestFirst {
            selected.reverse();
        }
        selected
    }
}
