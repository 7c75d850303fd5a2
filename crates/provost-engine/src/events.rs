//! Stock `EventSink` implementations.

use tracing::info;

use provost_contracts::event::DomainEvent;

use crate::traits::EventSink;

/// An event sink that logs each event as a structured `tracing` record.
///
/// The default choice for applications without a notification layer — the
/// event stream still shows up in the logs.
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: &DomainEvent) {
        match event {
            DomainEvent::ResultSubmitted {
                result_id,
                submitted_by,
                course_code,
                student_name,
            } => {
                info!(
                    result_id = %result_id,
                    submitted_by = %submitted_by,
                    course = %course_code,
                    student = %student_name,
                    "result submitted"
                );
            }
            DomainEvent::ResultApproved {
                result_id,
                approved_by,
                role,
                chain_complete,
            } => {
                info!(
                    result_id = %result_id,
                    approved_by = %approved_by,
                    role = %role,
                    chain_complete = chain_complete,
                    "result approved"
                );
            }
            DomainEvent::ResultRejected {
                result_id,
                rejected_by,
                role,
            } => {
                info!(
                    result_id = %result_id,
                    rejected_by = %rejected_by,
                    role = %role,
                    "result rejected"
                );
            }
        }
    }
}

/// An event sink that drops everything. Useful in tests.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&self, _event: &DomainEvent) {}
}
