//! The visibility rules: which results may an actor see.
//!
//! Pure read-side filtering — nothing here mutates a result. The rules are
//! an exhaustive match over the closed role enum, so adding a role forces
//! every visibility decision to be revisited at compile time:
//!
//! - a course adviser sees only the results they submitted;
//! - a hierarchy reviewer sees results where they are the current approver
//!   or appear anywhere in the chain (their history);
//! - admin sees everything.
//!
//! Dashboard statistics are always computed over the viewer's filtered set,
//! never the global set.

use std::sync::Arc;

use tracing::debug;

use provost_contracts::{
    actor::UserId,
    error::ProvostResult,
    result::{ResultStatus, StudentResult},
    role::Role,
    stats::DashboardStats,
};
use provost_engine::traits::ResultStore;

/// Return true if `result` is visible to the given viewer.
pub fn is_visible(result: &StudentResult, role: Role, user_id: &UserId) -> bool {
    match role {
        Role::CourseAdviser => &result.submitted_by == user_id,
        Role::Hod | Role::Dean | Role::DvcAcademic | Role::ViceChancellor => {
            result.current_approver.as_ref() == Some(user_id) || result.chain_includes(user_id)
        }
        Role::Admin => true,
    }
}

/// Filter `results` down to what the viewer may see, preserving order.
pub fn visible<'a>(
    results: &'a [StudentResult],
    role: Role,
    user_id: &UserId,
) -> Vec<&'a StudentResult> {
    results
        .iter()
        .filter(|r| is_visible(r, role, user_id))
        .collect()
}

/// Compute dashboard statistics over the viewer's filtered set.
///
/// `pending_approval` counts strictly "my turn now": status pending AND the
/// viewer is the current approver — a result merely pending somewhere in
/// the institution does not count.
pub fn dashboard_stats(results: &[StudentResult], role: Role, user_id: &UserId) -> DashboardStats {
    let scoped = visible(results, role, user_id);

    let count_status = |status: ResultStatus| scoped.iter().filter(|r| r.status == status).count();

    let stats = DashboardStats {
        total_results: scoped.len(),
        pending_approval: scoped
            .iter()
            .filter(|r| {
                r.status == ResultStatus::Pending && r.current_approver.as_ref() == Some(user_id)
            })
            .count(),
        approved: count_status(ResultStatus::Approved),
        rejected: count_status(ResultStatus::Rejected),
        final_approved: count_status(ResultStatus::FinalApproved),
    };

    debug!(
        role = %role,
        user_id = %user_id,
        total = stats.total_results,
        pending_approval = stats.pending_approval,
        "dashboard stats computed"
    );

    stats
}

/// A read-side view bound to a result store.
///
/// Convenience wrapper for presentation layers: holds a shared store handle
/// and snapshots it per query, so every listing and statistic observes
/// committed state only.
pub struct ResultsView {
    store: Arc<dyn ResultStore>,
}

impl ResultsView {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// The results the viewer may see, in store order.
    pub fn for_role(&self, role: Role, user_id: &UserId) -> ProvostResult<Vec<StudentResult>> {
        let snapshot = self.store.list()?;
        Ok(snapshot
            .into_iter()
            .filter(|r| is_visible(r, role, user_id))
            .collect())
    }

    /// Dashboard statistics for the viewer.
    pub fn stats(&self, role: Role, user_id: &UserId) -> ProvostResult<DashboardStats> {
        let snapshot = self.store.list()?;
        Ok(dashboard_stats(&snapshot, role, user_id))
    }
}
