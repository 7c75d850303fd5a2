//! In-memory implementation of `AuditSink`.
//!
//! `InMemoryLedger` keeps all entries in a `Vec` protected by a `Mutex`,
//! making it safe to share between the engine (append path) and viewers
//! (query path). `append` computes the new entry's chain hash and returns
//! it as the `TxRef` the engine stamps into results — the reference is a
//! real commitment to the recorded action, not a cosmetic random value.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;

use provost_contracts::{
    audit::{AuditRecord, TxRef},
    error::{ProvostError, ProvostResult},
};
use provost_engine::traits::AuditSink;

use crate::{
    chain::{hash_entry, verify_chain},
    entry::{LedgerEntry, LedgerExport},
    query::LogQuery,
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryLedger`.
pub(crate) struct LedgerState {
    /// All entries written so far, in append order.
    pub(crate) entries: Vec<LedgerEntry>,

    /// The next sequence number to assign (starts at 0).
    pub(crate) sequence: u64,

    /// The `this_hash` of the last written entry, or `GENESIS_HASH` before
    /// any entry has been written.
    pub(crate) last_hash: String,
}

// ── Public ledger ─────────────────────────────────────────────────────────────

/// An in-memory, append-only audit ledger backed by a SHA-256 hash chain.
///
/// # Thread safety
///
/// `append` and the query methods all acquire a `Mutex` internally; share
/// the ledger across threads via `Arc`.
pub struct InMemoryLedger {
    ledger_id: String,
    pub(crate) state: Arc<Mutex<LedgerState>>,
}

impl InMemoryLedger {
    /// Create a new ledger with the given id.
    ///
    /// The internal `last_hash` is initialized to
    /// `LedgerEntry::GENESIS_HASH` so the first entry's `prev_hash` is
    /// automatically correct.
    pub fn new(ledger_id: impl Into<String>) -> Self {
        let state = LedgerState {
            entries: Vec::new(),
            sequence: 0,
            last_hash: LedgerEntry::GENESIS_HASH.to_string(),
        };
        Self {
            ledger_id: ledger_id.into(),
            state: Arc::new(Mutex::new(state)),
        }
    }

    /// Return the entries selected by `query`, filtered and ordered.
    pub fn entries(&self, query: &LogQuery) -> Vec<LedgerEntry> {
        let state = self.state.lock().expect("audit ledger lock poisoned");
        query.apply(&state.entries)
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        let state = self.state.lock().expect("audit ledger lock poisoned");
        state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export a sealed snapshot containing all entries written so far.
    ///
    /// The `terminal_hash` is the `this_hash` of the last entry, or an
    /// empty string when no entries have been written.
    pub fn export(&self) -> LedgerExport {
        let state = self.state.lock().expect("audit ledger lock poisoned");
        let terminal_hash = state
            .entries
            .last()
            .map(|e| e.this_hash.clone())
            .unwrap_or_default();

        LedgerExport {
            ledger_id: self.ledger_id.clone(),
            entries: state.entries.clone(),
            exported_at: Utc::now(),
            terminal_hash,
        }
    }

    /// Verify that the in-memory chain has not been tampered with.
    ///
    /// Delegates to `verify_chain`, which checks both prev-hash linkage and
    /// hash correctness for every entry.
    pub fn verify_integrity(&self) -> bool {
        let state = self.state.lock().expect("audit ledger lock poisoned");
        verify_chain(&state.entries)
    }
}

// ── AuditSink impl ────────────────────────────────────────────────────────────

impl AuditSink for InMemoryLedger {
    /// Append one action record to the hash chain.
    ///
    /// Computes `this_hash` from (ledger_id, sequence, prev_hash, record),
    /// wraps the record in a `LedgerEntry`, appends it, then advances the
    /// sequence counter and `last_hash`. The returned `TxRef` is the new
    /// entry's `this_hash`.
    ///
    /// Returns `Err(AuditWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn append(&self, record: AuditRecord) -> ProvostResult<TxRef> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| ProvostError::AuditWriteFailed {
                reason: format!("audit ledger lock poisoned: {}", e),
            })?;

        let prev_hash = state.last_hash.clone();
        let sequence = state.sequence;

        let this_hash = hash_entry(&self.ledger_id, sequence, &record, &prev_hash);

        debug!(
            ledger_id = %self.ledger_id,
            sequence = sequence,
            action = %record.action,
            "audit entry appended"
        );

        let entry = LedgerEntry {
            sequence,
            ledger_id: self.ledger_id.clone(),
            record,
            prev_hash,
            this_hash: this_hash.clone(),
        };

        state.entries.push(entry);
        state.sequence += 1;
        state.last_hash = this_hash.clone();

        Ok(TxRef(this_hash))
    }
}
