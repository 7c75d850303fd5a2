//! Student results, approval chains, and status derivation.
//!
//! A `StudentResult` embeds its full `ApprovalStep` chain. The chain's slot
//! order is fixed at submission time and never changes; each slot transitions
//! at most once, from `Pending` to exactly one terminal action. The overall
//! `status` is a pure function of the chain — `derive_status` is the single
//! source of truth, and the stored field must always agree with it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    actor::UserId,
    audit::TxRef,
    grade::Grade,
    role::Role,
};

/// Unique identifier for a submitted result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub uuid::Uuid);

impl ResultId {
    /// Create a new, unique result ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ResultId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The decision recorded in a single chain slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Pending,
    Approved,
    Rejected,
}

/// The lifecycle state of a result as a whole.
///
/// `Rejected` and `FinalApproved` are absorbing: once reached, no further
/// transition on the result may succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    /// Submitted; no reviewer beyond the submitter has acted yet.
    Pending,
    /// Mid-chain: at least one reviewer has approved, later slots remain.
    Approved,
    Rejected,
    FinalApproved,
}

impl ResultStatus {
    /// Return true if no further transitions are permitted.
    pub fn is_terminal(self) -> bool {
        matches!(self, ResultStatus::Rejected | ResultStatus::FinalApproved)
    }

    /// The snake_case name this status serializes to.
    pub fn as_str(self) -> &'static str {
        match self {
            ResultStatus::Pending => "pending",
            ResultStatus::Approved => "approved",
            ResultStatus::Rejected => "rejected",
            ResultStatus::FinalApproved => "final_approved",
        }
    }
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One hierarchy role's decision slot within a result's chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    pub role: Role,
    /// The user bound to this slot — the routing default at submission,
    /// re-stamped to the actual actor when the decision is recorded.
    pub user_id: UserId,
    pub user_name: String,
    pub action: StepAction,
    pub comments: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// Ledger reference of the entry recording this slot's decision.
    pub tx_ref: Option<TxRef>,
}

impl ApprovalStep {
    /// A fresh pending slot for `role`, bound to the directory's current
    /// holder of that role.
    pub fn pending(role: Role, user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            role,
            user_id,
            user_name: user_name.into(),
            action: StepAction::Pending,
            comments: None,
            timestamp: None,
            tx_ref: None,
        }
    }
}

/// One submitted academic result and its approval chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResult {
    pub id: ResultId,
    pub student_id: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    /// 0–100 integer; validated at submission.
    pub score: u8,
    pub grade: Grade,
    pub semester: String,
    pub academic_year: String,
    /// User id of the submitting course adviser.
    pub submitted_by: UserId,
    pub submitted_at: DateTime<Utc>,
    pub status: ResultStatus,
    /// Fixed-order decision slots, one per hierarchy role. Immutable in
    /// length and order once created.
    pub approval_chain: Vec<ApprovalStep>,
    /// Holder of the first pending slot; `None` once the chain resolves.
    pub current_approver: Option<UserId>,
    /// The latest actor's remark.
    pub comments: Option<String>,
    /// Ledger reference of the last mutation.
    pub tx_ref: Option<TxRef>,
}

impl StudentResult {
    /// Recompute the status this chain implies.
    ///
    /// The stored `status` must always equal this value (no-drift
    /// invariant); tests recompute it after every engine operation.
    pub fn derived_status(&self) -> ResultStatus {
        derive_status(&self.approval_chain)
    }

    /// The first pending slot — the only slot allowed to transition next.
    pub fn active_step(&self) -> Option<&ApprovalStep> {
        self.approval_chain
            .iter()
            .find(|s| s.action == StepAction::Pending)
    }

    /// Index of the first pending slot, if any.
    pub fn active_step_index(&self) -> Option<usize> {
        self.approval_chain
            .iter()
            .position(|s| s.action == StepAction::Pending)
    }

    /// Return true if the chain accepts no further transitions.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Return true if `user` appears in any chain slot.
    pub fn chain_includes(&self, user: &UserId) -> bool {
        self.approval_chain.iter().any(|s| &s.user_id == user)
    }
}

/// Derive the overall status implied by a chain.
///
/// Any rejected slot freezes the whole chain as `Rejected`. All slots
/// approved is `FinalApproved`. A single approved slot is the submitter's
/// self-certification, so the result is still `Pending`; two or more mean a
/// reviewer has acted and the result is mid-chain `Approved`.
pub fn derive_status(chain: &[ApprovalStep]) -> ResultStatus {
    if chain.iter().any(|s| s.action == StepAction::Rejected) {
        return ResultStatus::Rejected;
    }

    let approved = chain
        .iter()
        .filter(|s| s.action == StepAction::Approved)
        .count();

    if approved == chain.len() {
        ResultStatus::FinalApproved
    } else if approved > 1 {
        ResultStatus::Approved
    } else {
        ResultStatus::Pending
    }
}
