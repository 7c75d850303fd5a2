//! Core trait definitions for the Provost workflow pipeline.
//!
//! These four traits define the engine's collaborator boundary:
//!
//! - `ResultStore` — owns the mutable result set and serializes updates
//! - `AuditSink`   — records every action immutably, before state commits
//! - `Directory`   — resolves which user currently holds a hierarchy role
//! - `EventSink`   — receives domain events after successful mutations
//!
//! The engine wires them together in the correct order. A transition is
//! never committed unless its audit record was appended first.

use provost_contracts::{
    actor::RoleBinding,
    audit::{AuditRecord, TxRef},
    error::ProvostResult,
    event::DomainEvent,
    result::{ResultId, StudentResult},
    role::Role,
};

/// The mutable result set behind an abstract contract.
///
/// Implementations may be in-memory, file-backed, or a database; the engine
/// is agnostic. Lifecycle is owned by the application entry point and the
/// handle passed in explicitly — never a hidden global.
pub trait ResultStore: Send + Sync {
    /// Add a newly submitted result.
    fn insert(&self, result: StudentResult) -> ProvostResult<()>;

    /// Fetch one result by id. Returns `Ok(None)` when absent.
    fn get(&self, id: &ResultId) -> ProvostResult<Option<StudentResult>>;

    /// Snapshot of every stored result, in insertion order.
    ///
    /// Reads observe committed state only — never a result mid-update.
    fn list(&self) -> ProvostResult<Vec<StudentResult>>;

    /// Atomically replace one result with the value `apply` computes from it.
    ///
    /// `apply` must be pure over its input: it receives the committed result
    /// and returns the full replacement. The store guarantees updates to the
    /// same id never interleave, so two concurrent transition attempts on
    /// one pending step cannot both observe it pending — the loser sees the
    /// winner's committed chain and fails its own precondition check.
    ///
    /// An `Err` from `apply` commits nothing and is returned verbatim.
    /// Returns `NotFound` when the id is unknown.
    fn update(
        &self,
        id: &ResultId,
        apply: &mut dyn FnMut(&StudentResult) -> ProvostResult<StudentResult>,
    ) -> ProvostResult<StudentResult>;
}

/// The append-only audit ledger.
///
/// Every submit/approve/reject appends exactly one record. A failed append
/// is fatal to the surrounding operation: a transition that cannot be
/// audited is not committed. Entries are never modified or deleted.
pub trait AuditSink: Send + Sync {
    /// Append one record and return the opaque reference identifying it.
    fn append(&self, record: AuditRecord) -> ProvostResult<TxRef>;
}

/// Resolves "who currently holds role X" when binding pending chain slots
/// at submission time.
pub trait Directory: Send + Sync {
    /// Return the current holder of `role`.
    ///
    /// An unstaffed hierarchy role is a `Config` error — a chain cannot be
    /// built without a complete routing.
    fn resolve(&self, role: Role) -> ProvostResult<RoleBinding>;
}

/// Receives domain events after each successful mutation.
///
/// Delivery is fire-and-forget; implementations must not block the caller.
/// How events are surfaced (notifications, email, nothing) is the hosting
/// application's concern.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &DomainEvent);
}
