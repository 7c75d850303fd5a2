//! Domain events emitted after successful engine mutations.
//!
//! Provost emits events; how they are surfaced (toasts, email, nothing) is
//! the hosting application's concern. Delivery is fire-and-forget — a slow
//! or absent subscriber never blocks the workflow.

use serde::{Deserialize, Serialize};

use crate::{actor::UserId, result::ResultId, role::Role};

/// A notification-worthy fact about a result's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    ResultSubmitted {
        result_id: ResultId,
        submitted_by: UserId,
        course_code: String,
        student_name: String,
    },
    ResultApproved {
        result_id: ResultId,
        approved_by: UserId,
        role: Role,
        /// True when this approval completed the chain.
        chain_complete: bool,
    },
    ResultRejected {
        result_id: ResultId,
        rejected_by: UserId,
        role: Role,
    },
}
