//! # provost-ref-university
//!
//! University reference runtime for the Provost result-approval workflow
//! engine.
//!
//! Demonstrates three scenarios using mock data:
//!
//! 1. **Full Approval Chain** — a submission approved through every
//!    hierarchy role to final_approved, with the canonical 5-entry ledger.
//! 2. **Rejection Freezes the Chain** — a mid-chain rejection with
//!    mandatory justification; the frozen chain refuses later decisions.
//! 3. **Visibility and Audit Review** — per-role visible sets, dashboard
//!    statistics, and filtered audit queries over a populated store.
//!
//! All data is hardcoded and fictional. No external systems are contacted.

pub mod mock_data;
pub mod scenarios;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use provost_contracts::{grade::Grade, result::ResultStatus, role::Role};

    use crate::mock_data::{cs301_submission, cs302_submission, university};
    use crate::scenarios::{full_approval, rejection_path, visibility_review};

    /// The fixture wires a working stack: a submission travels end to end.
    #[test]
    fn fixture_stack_round_trip() {
        let fixture = university().unwrap();
        let adviser = fixture.directory.actor_for_role(Role::CourseAdviser).unwrap();

        let result = fixture.engine.submit(cs301_submission(), &adviser).unwrap();
        assert_eq!(result.grade, Grade::A);

        for role in [Role::Hod, Role::Dean, Role::DvcAcademic, Role::ViceChancellor] {
            let reviewer = fixture.directory.actor_for_role(role).unwrap();
            fixture.engine.approve(&result.id, &reviewer, None).unwrap();
        }

        let stored = fixture.engine.result(&result.id).unwrap();
        assert_eq!(stored.status, ResultStatus::FinalApproved);
        assert_eq!(fixture.ledger.len(), 5);
        assert!(fixture.ledger.verify_integrity());
    }

    #[test]
    fn sample_submissions_validate() {
        assert_eq!(cs301_submission().validate().unwrap(), Grade::A);
        assert_eq!(cs302_submission().validate().unwrap(), Grade::APlus);
    }

    /// Every scenario runs to completion against the in-memory stack.
    #[test]
    fn scenarios_run_clean() {
        full_approval::run_scenario().unwrap();
        rejection_path::run_scenario().unwrap();
        visibility_review::run_scenario().unwrap();
    }
}
