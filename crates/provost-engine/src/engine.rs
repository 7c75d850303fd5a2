//! The approval chain engine: submit, approve, reject.
//!
//! The engine enforces the result lifecycle:
//!
//!   submit → [approve per hierarchy role, in order] → final_approved
//!                                     └→ reject → rejected (frozen)
//!
//! Two disciplines are absolute. First, ordering: only the first pending
//! slot may transition, and only when the actor's role matches it — no
//! skipping ahead. Second, atomicity: every failure path returns before
//! anything is committed, and the audit append happens inside the store's
//! serialized update, so a committed transition always has its ledger entry
//! and a failed one leaves neither.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use provost_contracts::{
    actor::Actor,
    audit::AuditRecord,
    error::{ProvostError, ProvostResult},
    event::DomainEvent,
    result::{
        derive_status, ApprovalStep, ResultId, ResultStatus, StepAction, StudentResult,
    },
    role::Role,
    submission::ResultSubmission,
};

use crate::traits::{AuditSink, Directory, EventSink, ResultStore};

/// The engine that owns all mutations of the result set.
///
/// Construct one per application. The store and ledger are shared handles —
/// the read path (visibility resolver, audit viewers) holds clones of the
/// same `Arc`s; the directory and event sink are owned outright.
pub struct ApprovalEngine {
    store: Arc<dyn ResultStore>,
    ledger: Arc<dyn AuditSink>,
    directory: Box<dyn Directory>,
    events: Box<dyn EventSink>,
}

impl ApprovalEngine {
    /// Create a new engine with the given collaborators.
    pub fn new(
        store: Arc<dyn ResultStore>,
        ledger: Arc<dyn AuditSink>,
        directory: Box<dyn Directory>,
        events: Box<dyn EventSink>,
    ) -> Self {
        Self {
            store,
            ledger,
            directory,
            events,
        }
    }

    /// Submit a new result for approval.
    ///
    /// Only a course adviser may submit. The created chain has the
    /// submitter's slot pre-approved (self-certification) followed by one
    /// pending slot per remaining hierarchy role, each bound to the user
    /// the directory currently resolves for that role.
    ///
    /// # Errors
    ///
    /// `Authorization` if the submitter is not a course adviser;
    /// `Validation` for blank fields, an out-of-range score, or a supplied
    /// grade inconsistent with the score; `Config` if a hierarchy role is
    /// unstaffed; `AuditWriteFailed` if the ledger rejects the entry (in
    /// which case nothing is stored).
    pub fn submit(
        &self,
        submission: ResultSubmission,
        submitter: &Actor,
    ) -> ProvostResult<StudentResult> {
        if submitter.role != Role::CourseAdviser {
            warn!(
                user_id = %submitter.user_id,
                role = %submitter.role,
                "submission refused: not a course adviser"
            );
            return Err(ProvostError::Authorization {
                reason: format!(
                    "role '{}' may not submit results; only a course adviser may",
                    submitter.role
                ),
            });
        }

        let grade = submission.validate()?;
        let now = Utc::now();

        // Submitter's slot is approved at submission time; the remaining
        // hierarchy slots are bound to their current role holders.
        let mut chain = Vec::with_capacity(Role::HIERARCHY.len());
        chain.push(ApprovalStep {
            role: Role::CourseAdviser,
            user_id: submitter.user_id.clone(),
            user_name: submitter.name.clone(),
            action: StepAction::Approved,
            comments: submission.comments.clone(),
            timestamp: Some(now),
            tx_ref: None,
        });
        for role in &Role::HIERARCHY[1..] {
            let binding = self.directory.resolve(*role)?;
            chain.push(ApprovalStep::pending(*role, binding.user_id, binding.user_name));
        }

        let current_approver = chain
            .iter()
            .find(|s| s.action == StepAction::Pending)
            .map(|s| s.user_id.clone());
        let status = derive_status(&chain);

        let mut result = StudentResult {
            id: ResultId::new(),
            student_id: submission.student_id,
            student_name: submission.student_name,
            course_code: submission.course_code,
            course_name: submission.course_name,
            score: submission.score,
            grade,
            semester: submission.semester,
            academic_year: submission.academic_year,
            submitted_by: submitter.user_id.clone(),
            submitted_at: now,
            status,
            approval_chain: chain,
            current_approver,
            comments: submission.comments,
            tx_ref: None,
        };

        let record = AuditRecord::new(
            "Result Submitted",
            submitter.user_id.clone(),
            submitter.name.clone(),
            Role::CourseAdviser,
            Some(result.id.clone()),
            format!(
                "Submitted result for {} - {} ({}/{})",
                result.course_code, result.student_name, result.score, result.grade
            ),
        );
        let tx = self.ledger.append(record)?;
        result.approval_chain[0].tx_ref = Some(tx.clone());
        result.tx_ref = Some(tx);

        self.store.insert(result.clone())?;

        debug!(
            result_id = %result.id,
            student = %result.student_name,
            course = %result.course_code,
            grade = %result.grade,
            "result submitted"
        );
        self.events.publish(&DomainEvent::ResultSubmitted {
            result_id: result.id.clone(),
            submitted_by: result.submitted_by.clone(),
            course_code: result.course_code.clone(),
            student_name: result.student_name.clone(),
        });

        Ok(result)
    }

    /// Approve the result's active step as `actor`.
    ///
    /// The actor's role must match the first pending slot. Authorization is
    /// by role: any current holder of the role may decide, and the slot is
    /// re-stamped to the actual actor so the chain records who did.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id; `InvalidState` when the result is
    /// terminal or the active slot belongs to a different role. Failures
    /// commit nothing and append nothing.
    pub fn approve(
        &self,
        result_id: &ResultId,
        actor: &Actor,
        comments: Option<String>,
    ) -> ProvostResult<StudentResult> {
        let updated = self.store.update(result_id, &mut |current| {
            let index = self.active_index_for(current, actor)?;

            let mut next = current.clone();
            {
                let step = &mut next.approval_chain[index];
                step.action = StepAction::Approved;
                step.timestamp = Some(Utc::now());
                step.comments = comments.clone();
                // Record who actually decided; the submission-time binding
                // was only a routing default.
                step.user_id = actor.user_id.clone();
                step.user_name = actor.name.clone();
            }

            let record = AuditRecord::new(
                format!("Result Approved by {}", actor.role.audit_label()),
                actor.user_id.clone(),
                actor.name.clone(),
                actor.role,
                Some(current.id.clone()),
                format!(
                    "Approved result with comments: {}",
                    comments.as_deref().unwrap_or("No comments")
                ),
            );
            let tx = self.ledger.append(record)?;
            next.approval_chain[index].tx_ref = Some(tx.clone());
            next.tx_ref = Some(tx);
            next.comments = comments.clone();
            next.status = next.derived_status();
            next.current_approver = next.active_step().map(|s| s.user_id.clone());
            Ok(next)
        })?;

        debug!(
            result_id = %updated.id,
            role = %actor.role,
            status = %updated.status,
            "approval recorded"
        );
        self.events.publish(&DomainEvent::ResultApproved {
            result_id: updated.id.clone(),
            approved_by: actor.user_id.clone(),
            role: actor.role,
            chain_complete: updated.status == ResultStatus::FinalApproved,
        });

        Ok(updated)
    }

    /// Reject the result's active step as `actor`, freezing the chain.
    ///
    /// Rejection must be justified: blank `comments` is a `Validation`
    /// error. After a rejection no further approve or reject on this
    /// result can succeed.
    ///
    /// # Errors
    ///
    /// As [`approve`](Self::approve), plus `Validation` on blank comments.
    pub fn reject(
        &self,
        result_id: &ResultId,
        actor: &Actor,
        comments: String,
    ) -> ProvostResult<StudentResult> {
        if comments.trim().is_empty() {
            return Err(ProvostError::Validation {
                reason: "rejection comments must not be blank".to_string(),
            });
        }

        let updated = self.store.update(result_id, &mut |current| {
            let index = self.active_index_for(current, actor)?;

            let mut next = current.clone();
            {
                let step = &mut next.approval_chain[index];
                step.action = StepAction::Rejected;
                step.timestamp = Some(Utc::now());
                step.comments = Some(comments.clone());
                step.user_id = actor.user_id.clone();
                step.user_name = actor.name.clone();
            }

            let record = AuditRecord::new(
                format!("Result Rejected by {}", actor.role.audit_label()),
                actor.user_id.clone(),
                actor.name.clone(),
                actor.role,
                Some(current.id.clone()),
                format!("Rejected result with comments: {}", comments),
            );
            let tx = self.ledger.append(record)?;
            next.approval_chain[index].tx_ref = Some(tx.clone());
            next.tx_ref = Some(tx);
            next.comments = Some(comments.clone());
            next.status = next.derived_status();
            // The chain is frozen; nobody is empowered to act on it now.
            next.current_approver = None;
            Ok(next)
        })?;

        warn!(
            result_id = %updated.id,
            role = %actor.role,
            "result rejected, chain frozen"
        );
        self.events.publish(&DomainEvent::ResultRejected {
            result_id: updated.id.clone(),
            rejected_by: actor.user_id.clone(),
            role: actor.role,
        });

        Ok(updated)
    }

    /// Fetch one result.
    pub fn result(&self, id: &ResultId) -> ProvostResult<StudentResult> {
        self.store.get(id)?.ok_or_else(|| ProvostError::NotFound {
            result_id: id.to_string(),
        })
    }

    /// Snapshot of every result. Role-scoped listings belong to the
    /// visibility resolver; this is the unfiltered set.
    pub fn results(&self) -> ProvostResult<Vec<StudentResult>> {
        self.store.list()
    }

    /// Locate the active slot and verify it is `actor`'s turn.
    ///
    /// Shared precondition of approve and reject: the result must not be
    /// terminal, and the first pending slot's role must equal the actor's.
    fn active_index_for(
        &self,
        current: &StudentResult,
        actor: &Actor,
    ) -> ProvostResult<usize> {
        if current.is_terminal() {
            return Err(ProvostError::InvalidState {
                reason: format!(
                    "result '{}' is already {}; its chain accepts no further decisions",
                    current.id, current.status
                ),
            });
        }

        let index = current.active_step_index().ok_or_else(|| {
            // A non-terminal result always has a pending slot; a chain
            // violating that is corrupt.
            ProvostError::InvalidState {
                reason: format!("result '{}' has no pending step", current.id),
            }
        })?;

        let active_role = current.approval_chain[index].role;
        if active_role != actor.role {
            return Err(ProvostError::InvalidState {
                reason: format!(
                    "no pending step for role '{}'; the chain is awaiting '{}'",
                    actor.role, active_role
                ),
            });
        }

        Ok(index)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
