//! # provost-audit
//!
//! Immutable, append-only, SHA-256 hash-chained audit ledger for the
//! Provost workflow engine.
//!
//! ## Overview
//!
//! Every action the engine records is wrapped in a `LedgerEntry` that links
//! to the previous entry via its SHA-256 hash. Tampering with any entry —
//! even a single byte — breaks the chain and is detected by `verify_chain`.
//! The entry hash doubles as the opaque transaction reference (`TxRef`)
//! stamped into results and chain slots.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use provost_audit::{InMemoryLedger, LogQuery};
//! use provost_engine::traits::AuditSink;
//!
//! let ledger = InMemoryLedger::new("university-main");
//! let tx = ledger.append(record)?;
//!
//! assert!(ledger.verify_integrity());
//! let recent = ledger.entries(&LogQuery::default());
//! ```

pub mod chain;
pub mod entry;
pub mod memory;
pub mod query;

pub use chain::{hash_entry, verify_chain};
pub use entry::{LedgerEntry, LedgerExport};
pub use memory::InMemoryLedger;
pub use query::{LogCategory, LogQuery, SortOrder};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use provost_contracts::{
        actor::UserId,
        audit::AuditRecord,
        role::Role,
    };
    use provost_engine::traits::AuditSink;

    use super::{InMemoryLedger, LedgerEntry, LogCategory, LogQuery, SortOrder};

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a record with a distinguishable action and details.
    fn make_record(action: &str, user_name: &str, details: &str) -> AuditRecord {
        AuditRecord::new(
            action,
            UserId::new("u-1"),
            user_name,
            Role::CourseAdviser,
            None,
            details,
        )
    }

    /// Same, but with a fixed timestamp so ordering tests are exact.
    fn record_at(action: &str, minute: u32) -> AuditRecord {
        AuditRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, minute, 0).unwrap(),
            ..make_record(action, "Dr. Sarah Johnson", "details")
        }
    }

    // ── Chain integrity ───────────────────────────────────────────────────────

    /// Writing three entries and verifying produces a valid chain.
    #[test]
    fn test_hash_chain_integrity() {
        let ledger = InMemoryLedger::new("ledger-integrity");
        ledger.append(make_record("Result Submitted", "A", "first")).unwrap();
        ledger.append(make_record("Result Approved by HOD", "B", "second")).unwrap();
        ledger.append(make_record("Result Approved by DEAN", "C", "third")).unwrap();

        assert!(
            ledger.verify_integrity(),
            "chain must be valid after sequential appends"
        );
    }

    /// Mutating any entry's record breaks the chain.
    #[test]
    fn test_tamper_detection() {
        let ledger = InMemoryLedger::new("ledger-tamper");
        ledger.append(make_record("Result Submitted", "A", "step-a")).unwrap();
        ledger.append(make_record("Result Approved by HOD", "B", "step-b")).unwrap();
        ledger.append(make_record("Result Approved by DEAN", "C", "step-c")).unwrap();

        // Directly mutate the internal state to simulate tampering.
        {
            let mut state = ledger.state.lock().unwrap();
            state.entries[0].record.details = "TAMPERED".to_string();
        }

        // The chain must now fail verification because entry 0's this_hash
        // no longer matches the recomputed hash of its (mutated) record.
        assert!(
            !ledger.verify_integrity(),
            "chain must detect tampering with a stored entry"
        );
    }

    /// The first entry's `prev_hash` must equal `LedgerEntry::GENESIS_HASH`.
    #[test]
    fn test_genesis_hash() {
        let ledger = InMemoryLedger::new("ledger-genesis");
        ledger.append(make_record("Result Submitted", "A", "first")).unwrap();

        let export = ledger.export();
        assert_eq!(export.entries.len(), 1);
        assert_eq!(
            export.entries[0].prev_hash,
            LedgerEntry::GENESIS_HASH,
            "first entry must link to the genesis sentinel hash"
        );
    }

    /// Sequence numbers must be 0, 1, 2, … with no gaps or skips, and the
    /// returned TxRef must equal the entry's chain hash.
    #[test]
    fn test_sequence_and_tx_refs() {
        let ledger = InMemoryLedger::new("ledger-seq");
        let txs = [
            ledger.append(make_record("Result Submitted", "A", "a")).unwrap(),
            ledger.append(make_record("Result Approved by HOD", "B", "b")).unwrap(),
            ledger.append(make_record("Result Approved by DEAN", "C", "c")).unwrap(),
        ];

        let export = ledger.export();
        for (idx, entry) in export.entries.iter().enumerate() {
            assert_eq!(entry.sequence, idx as u64);
            assert_eq!(
                txs[idx].0, entry.this_hash,
                "TxRef at position {} must be the entry's chain hash",
                idx
            );
        }
    }

    /// `export()` contains every appended entry in order and a matching
    /// terminal hash.
    #[test]
    fn test_export() {
        let ledger = InMemoryLedger::new("ledger-export");
        ledger.append(make_record("Result Submitted", "A", "alpha")).unwrap();
        ledger.append(make_record("Result Approved by HOD", "B", "beta")).unwrap();
        ledger.append(make_record("Result Rejected by DEAN", "C", "gamma")).unwrap();

        let export = ledger.export();

        assert_eq!(export.ledger_id, "ledger-export");
        assert_eq!(export.entries.len(), 3, "export must contain all entries");
        assert_eq!(
            export.terminal_hash,
            export.entries.last().unwrap().this_hash,
            "terminal_hash must equal the last entry's this_hash"
        );
        assert!(
            super::verify_chain(&export.entries),
            "exported entries must pass chain verification"
        );
    }

    /// An empty chain is trivially valid — there is nothing to verify.
    #[test]
    fn test_verify_empty() {
        let ledger = InMemoryLedger::new("ledger-empty");
        assert!(ledger.verify_integrity());
        assert!(ledger.is_empty());
        assert!(super::verify_chain(&[]));
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    fn populated_ledger() -> InMemoryLedger {
        let ledger = InMemoryLedger::new("ledger-query");
        ledger.append(record_at("Result Submitted", 0)).unwrap();
        ledger.append(record_at("Result Approved by HOD", 1)).unwrap();
        ledger.append(record_at("Result Rejected by DEAN", 2)).unwrap();
        ledger.append(record_at("Result Approved by DEAN", 3)).unwrap();
        ledger
    }

    /// Category filtering is a substring match on the action label.
    #[test]
    fn test_category_filter_is_substring_match() {
        let ledger = populated_ledger();

        let approved = ledger.entries(&LogQuery {
            category: Some(LogCategory::Approved),
            ..LogQuery::default()
        });
        assert_eq!(approved.len(), 2);
        assert!(approved.iter().all(|e| e.record.action.contains("Approved")));

        let rejected = ledger.entries(&LogQuery {
            category: Some(LogCategory::Rejected),
            ..LogQuery::default()
        });
        assert_eq!(rejected.len(), 1);

        let submitted = ledger.entries(&LogQuery {
            category: Some(LogCategory::Submitted),
            ..LogQuery::default()
        });
        assert_eq!(submitted.len(), 1);
    }

    /// Free-text search is case-insensitive over action, user, and details.
    #[test]
    fn test_text_filter() {
        let ledger = InMemoryLedger::new("ledger-text");
        ledger
            .append(make_record(
                "Result Submitted",
                "Dr. Sarah Johnson",
                "Submitted result for CS301 - John Smith (85/A)",
            ))
            .unwrap();
        ledger
            .append(make_record(
                "Result Approved by HOD",
                "Prof. Michael Chen",
                "Approved result with comments: No comments",
            ))
            .unwrap();

        let by_course = ledger.entries(&LogQuery {
            text: Some("cs301".to_string()),
            ..LogQuery::default()
        });
        assert_eq!(by_course.len(), 1);

        let by_user = ledger.entries(&LogQuery {
            text: Some("michael".to_string()),
            ..LogQuery::default()
        });
        assert_eq!(by_user.len(), 1);

        let no_hit = ledger.entries(&LogQuery {
            text: Some("physics".to_string()),
            ..LogQuery::default()
        });
        assert!(no_hit.is_empty());
    }

    /// Newest-first is the display default; oldest-first restores creation
    /// order.
    #[test]
    fn test_sort_order() {
        let ledger = populated_ledger();

        let newest = ledger.entries(&LogQuery::default());
        assert_eq!(newest[0].record.action, "Result Approved by DEAN");
        assert_eq!(newest.last().unwrap().record.action, "Result Submitted");

        let oldest = ledger.entries(&LogQuery {
            order: SortOrder::OldestFirst,
            ..LogQuery::default()
        });
        assert_eq!(oldest[0].record.action, "Result Submitted");
    }

    /// Text and category criteria combine conjunctively.
    #[test]
    fn test_combined_filters() {
        let ledger = populated_ledger();

        let dean_approvals = ledger.entries(&LogQuery {
            text: Some("dean".to_string()),
            category: Some(LogCategory::Approved),
            order: SortOrder::OldestFirst,
        });
        assert_eq!(dean_approvals.len(), 1);
        assert_eq!(dean_approvals[0].record.action, "Result Approved by DEAN");
    }
}
