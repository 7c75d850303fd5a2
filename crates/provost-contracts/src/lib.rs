//! # provost-contracts
//!
//! Shared types, schemas, and contracts for the Provost workflow engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, validation rules on those
//! definitions, and error types.

pub mod actor;
pub mod audit;
pub mod error;
pub mod event;
pub mod grade;
pub mod result;
pub mod role;
pub mod stats;
pub mod submission;

#[cfg(test)]
mod tests {
    use super::*;
    use actor::UserId;
    use error::ProvostError;
    use grade::Grade;
    use result::{derive_status, ApprovalStep, ResultId, ResultStatus, StepAction};
    use role::Role;
    use submission::ResultSubmission;

    // ── Helpers ──────────────────────────────────────────────────────────────

    /// Build a chain slot with the given action, bound to a throwaway user.
    fn step(role: Role, action: StepAction) -> ApprovalStep {
        ApprovalStep {
            action,
            ..ApprovalStep::pending(role, UserId::new("u-0"), "Test User")
        }
    }

    fn submission(score: u8, grade: Option<Grade>) -> ResultSubmission {
        ResultSubmission {
            student_id: "CS2021001".to_string(),
            student_name: "John Smith".to_string(),
            course_code: "CS301".to_string(),
            course_name: "Data Structures and Algorithms".to_string(),
            score,
            grade,
            semester: "Fall 2024".to_string(),
            academic_year: "2024-2025".to_string(),
            comments: None,
        }
    }

    // ── Grade derivation ─────────────────────────────────────────────────────

    #[test]
    fn grade_bands_at_boundaries() {
        let cases = [
            (100, Grade::APlus),
            (90, Grade::APlus),
            (89, Grade::A),
            (85, Grade::A),
            (80, Grade::A),
            (79, Grade::BPlus),
            (75, Grade::BPlus),
            (74, Grade::B),
            (70, Grade::B),
            (65, Grade::CPlus),
            (60, Grade::C),
            (55, Grade::DPlus),
            (50, Grade::D),
            (45, Grade::E),
            (44, Grade::F),
            (0, Grade::F),
        ];
        for (score, expected) in cases {
            assert_eq!(
                Grade::from_score(score),
                expected,
                "score {} should derive {}",
                score,
                expected
            );
        }
    }

    // ── Status derivation ────────────────────────────────────────────────────

    #[test]
    fn fresh_submission_is_pending() {
        // Only the submitter's self-certified slot is approved.
        let chain = vec![
            step(Role::CourseAdviser, StepAction::Approved),
            step(Role::Hod, StepAction::Pending),
            step(Role::Dean, StepAction::Pending),
            step(Role::DvcAcademic, StepAction::Pending),
            step(Role::ViceChancellor, StepAction::Pending),
        ];
        assert_eq!(derive_status(&chain), ResultStatus::Pending);
    }

    #[test]
    fn reviewer_approval_makes_mid_chain_approved() {
        let chain = vec![
            step(Role::CourseAdviser, StepAction::Approved),
            step(Role::Hod, StepAction::Approved),
            step(Role::Dean, StepAction::Pending),
        ];
        assert_eq!(derive_status(&chain), ResultStatus::Approved);
    }

    #[test]
    fn all_approved_is_final_approved() {
        let chain = vec![
            step(Role::CourseAdviser, StepAction::Approved),
            step(Role::Hod, StepAction::Approved),
            step(Role::Dean, StepAction::Approved),
        ];
        assert_eq!(derive_status(&chain), ResultStatus::FinalApproved);
    }

    #[test]
    fn any_rejection_freezes_as_rejected() {
        // A rejected slot dominates regardless of later pending slots.
        let chain = vec![
            step(Role::CourseAdviser, StepAction::Approved),
            step(Role::Hod, StepAction::Approved),
            step(Role::Dean, StepAction::Rejected),
            step(Role::DvcAcademic, StepAction::Pending),
        ];
        assert_eq!(derive_status(&chain), ResultStatus::Rejected);
    }

    #[test]
    fn single_slot_chain_is_immediately_final() {
        let chain = vec![step(Role::CourseAdviser, StepAction::Approved)];
        assert_eq!(derive_status(&chain), ResultStatus::FinalApproved);
    }

    #[test]
    fn terminal_statuses() {
        assert!(ResultStatus::Rejected.is_terminal());
        assert!(ResultStatus::FinalApproved.is_terminal());
        assert!(!ResultStatus::Pending.is_terminal());
        assert!(!ResultStatus::Approved.is_terminal());
    }

    // ── Role hierarchy ───────────────────────────────────────────────────────

    #[test]
    fn hierarchy_order_is_fixed() {
        assert_eq!(Role::HIERARCHY[0], Role::CourseAdviser);
        assert_eq!(Role::HIERARCHY[4], Role::ViceChancellor);
        assert_eq!(Role::Hod.hierarchy_index(), Some(1));
        assert_eq!(Role::Dean.hierarchy_index(), Some(2));
        assert_eq!(Role::DvcAcademic.hierarchy_index(), Some(3));
    }

    #[test]
    fn admin_is_not_a_hierarchy_role() {
        assert_eq!(Role::Admin.hierarchy_index(), None);
        assert!(!Role::Admin.is_hierarchy());
        assert!(Role::ViceChancellor.is_hierarchy());
    }

    #[test]
    fn audit_labels_match_institutional_vocabulary() {
        assert_eq!(Role::Hod.audit_label(), "HOD");
        assert_eq!(Role::DvcAcademic.audit_label(), "DVC ACADEMIC");
        assert_eq!(Role::ViceChancellor.audit_label(), "VICE CHANCELLOR");
    }

    // ── Submission validation ────────────────────────────────────────────────

    #[test]
    fn valid_submission_returns_derived_grade() {
        let grade = submission(85, None).validate().unwrap();
        assert_eq!(grade, Grade::A);
    }

    #[test]
    fn consistent_supplied_grade_is_honored() {
        let grade = submission(92, Some(Grade::APlus)).validate().unwrap();
        assert_eq!(grade, Grade::APlus);
    }

    #[test]
    fn inconsistent_supplied_grade_is_rejected() {
        let err = submission(85, Some(Grade::BPlus)).validate().unwrap_err();
        match err {
            ProvostError::Validation { reason } => {
                assert!(reason.contains("inconsistent"), "unexpected reason: {reason}");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut sub = submission(70, None);
        sub.course_code = "   ".to_string();
        let err = sub.validate().unwrap_err();
        match err {
            ProvostError::Validation { reason } => {
                assert!(reason.contains("course_code"), "unexpected reason: {reason}");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let err = submission(101, None).validate().unwrap_err();
        match err {
            ProvostError::Validation { reason } => {
                assert!(reason.contains("out of range"), "unexpected reason: {reason}");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    // ── Serialized vocabulary ────────────────────────────────────────────────

    // The snake_case role and status strings are the institution's stored
    // vocabulary; renames here would corrupt persisted data.

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::DvcAcademic).unwrap(),
            "\"dvc_academic\""
        );
        let decoded: Role = serde_json::from_str("\"vice_chancellor\"").unwrap();
        assert_eq!(decoded, Role::ViceChancellor);
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ResultStatus::FinalApproved).unwrap(),
            "\"final_approved\""
        );
    }

    #[test]
    fn grade_serializes_display_string() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        let decoded: Grade = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(decoded, Grade::BPlus);
    }

    // ── ResultId ─────────────────────────────────────────────────────────────

    #[test]
    fn result_id_new_produces_unique_values() {
        let ids: Vec<ResultId> = (0..100).map(|_| ResultId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── Error display messages ───────────────────────────────────────────────

    #[test]
    fn error_invalid_state_display() {
        let err = ProvostError::InvalidState {
            reason: "result is already rejected".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid state"));
        assert!(msg.contains("already rejected"));
    }

    #[test]
    fn error_not_found_display() {
        let err = ProvostError::NotFound {
            result_id: "r-404".to_string(),
        };
        assert!(err.to_string().contains("r-404"));
    }

    #[test]
    fn error_authorization_display() {
        let err = ProvostError::Authorization {
            reason: "only a course adviser may submit results".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not authorized"));
        assert!(msg.contains("course adviser"));
    }
}
