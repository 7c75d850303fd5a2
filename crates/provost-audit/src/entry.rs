//! Ledger entry and export types.
//!
//! `LedgerEntry` is a single link in the hash chain — it wraps an
//! `AuditRecord` with sequence numbering and the SHA-256 hashes that make
//! tampering detectable. `LedgerExport` is a sealed snapshot handed to
//! reporting collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use provost_contracts::audit::AuditRecord;

/// A single entry in the ledger's SHA-256 hash chain.
///
/// Each entry commits to the previous entry via `prev_hash`. Modifying any
/// field — including those of the embedded `record` — invalidates
/// `this_hash` and every subsequent `prev_hash`, which `verify_chain`
/// detects. The `this_hash` is also the entry's `TxRef`: the opaque
/// reference stamped into results and chain slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Monotonically increasing position in the chain, starting at 0.
    pub sequence: u64,

    /// The ledger this entry belongs to (one per institution).
    pub ledger_id: String,

    /// The immutable action record produced by the engine.
    pub record: AuditRecord,

    /// SHA-256 hash (hex) of the previous entry, or `GENESIS_HASH` for the
    /// first entry.
    pub prev_hash: String,

    /// SHA-256 hash (hex) of this entry's canonical content.
    ///
    /// Computed by `hash_entry()` over (ledger_id, sequence, prev_hash,
    /// canonical JSON of record).
    pub this_hash: String,
}

impl LedgerEntry {
    /// The sentinel `prev_hash` used for the first entry in every chain.
    ///
    /// 64 hex zeros — a value that can never be the SHA-256 of real data,
    /// making genesis detection unambiguous.
    pub const GENESIS_HASH: &'static str =
        "0000000000000000000000000000000000000000000000000000000000000000";
}

/// A sealed snapshot of the ledger for export and reporting.
///
/// The `terminal_hash` is the `this_hash` of the last entry and serves as a
/// compact commitment to the entire log at export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// The ledger whose entries are recorded here.
    pub ledger_id: String,

    /// All entries in chain order (sequence 0 first).
    pub entries: Vec<LedgerEntry>,

    /// Wall-clock time (UTC) the snapshot was taken.
    pub exported_at: DateTime<Utc>,

    /// The `this_hash` of the last entry. Empty string if the log is empty.
    pub terminal_hash: String,
}
