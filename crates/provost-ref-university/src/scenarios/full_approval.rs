//! Scenario 1: Full Approval Chain
//!
//! A course adviser submits a result and every hierarchy role approves it
//! in turn. Walk-through for the demo run:
//!
//!   1. Submission validates the payload and derives the grade (85 → A)
//!   2. The chain is created self-certified: adviser approved, four pending
//!   3. HOD, Dean, DVC Academic, Vice Chancellor approve in order
//!   4. The result reaches final_approved with no current approver
//!   5. The ledger holds 5 entries (1 submit + 4 approvals); chain verified

use provost_audit::{LogQuery, SortOrder};
use provost_contracts::{error::ProvostResult, role::Role};

use crate::mock_data::{cs301_submission, university};

/// Run Scenario 1: Full Approval Chain.
pub fn run_scenario() -> ProvostResult<()> {
    println!("=== Scenario 1: Full Approval Chain ===");
    println!();

    let fixture = university()?;
    let adviser = fixture.directory.actor_for_role(Role::CourseAdviser)?;

    // ── Submission ────────────────────────────────────────────────────────────

    let result = fixture.engine.submit(cs301_submission(), &adviser)?;

    println!(
        "  Submitted: {} - {} (score {}, derived grade {})",
        result.course_code, result.student_name, result.score, result.grade
    );
    println!("  Status:    {}", result.status);
    println!(
        "  Chain:     {} slots, awaiting {}",
        result.approval_chain.len(),
        result.approval_chain[1].user_name
    );
    println!();

    // ── Approvals in hierarchy order ──────────────────────────────────────────

    for role in [Role::Hod, Role::Dean, Role::DvcAcademic, Role::ViceChancellor] {
        let reviewer = fixture.directory.actor_for_role(role)?;
        let updated = fixture.engine.approve(
            &result.id,
            &reviewer,
            Some("Verified against departmental records".to_string()),
        )?;

        let next = updated
            .current_approver
            .as_ref()
            .and_then(|id| fixture.directory.find_user(id))
            .map(|a| a.name)
            .unwrap_or_else(|| "nobody (chain complete)".to_string());

        println!(
            "  {} approved -> status {}, next: {}",
            reviewer.name, updated.status, next
        );
    }
    println!();

    // ── Ledger shape and integrity ────────────────────────────────────────────

    let entries = fixture.ledger.entries(&LogQuery {
        order: SortOrder::OldestFirst,
        ..LogQuery::default()
    });
    println!("  Ledger entries ({} total, creation order):", entries.len());
    for entry in &entries {
        println!("    [{}] {}", entry.sequence, entry.record.action);
    }
    println!(
        "  Audit chain integrity: {}",
        if fixture.ledger.verify_integrity() {
            "VERIFIED"
        } else {
            "FAILED"
        }
    );
    println!();
    println!("  Scenario 1 complete.");
    println!();

    Ok(())
}
