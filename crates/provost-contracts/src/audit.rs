//! Audit action records and ledger references.
//!
//! `AuditRecord` is what the engine hands to the ledger — one per
//! submit/approve/reject action. The ledger wraps it in a hash-chain entry
//! and returns a `TxRef` identifying that entry. Records are never modified
//! or deleted once appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{actor::UserId, result::ResultId, role::Role};

/// Opaque reference to one ledger entry.
///
/// In the reference ledger this is the entry's chain hash — a real,
/// verifiable commitment rather than a cosmetic random value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxRef(pub String);

impl std::fmt::Display for TxRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable record of one engine action.
///
/// `action` is a human-facing label ("Result Submitted", "Result Approved
/// by HOD", …). Consumers categorize by substring match on this label; it
/// is deliberately not a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub action: String,
    pub user_id: UserId,
    pub user_name: String,
    pub role: Role,
    pub result_id: Option<ResultId>,
    /// Human summary of the action.
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditRecord {
    /// Build a record stamped with the current time.
    pub fn new(
        action: impl Into<String>,
        user_id: UserId,
        user_name: impl Into<String>,
        role: Role,
        result_id: Option<ResultId>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            user_id,
            user_name: user_name.into(),
            role,
            result_id,
            details: details.into(),
            timestamp: Utc::now(),
        }
    }
}
