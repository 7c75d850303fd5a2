//! Scenario 2: Rejection Freezes the Chain
//!
//! A result is approved by the HOD, then rejected by the Dean with a
//! justification. Walk-through for the demo run:
//!
//!   1. Submission (92 → A+), HOD approval as usual
//!   2. Dean rejects with mandatory comments
//!   3. The chain is frozen: the DVC's approval attempt is refused with an
//!      invalid-state error and nothing is appended to the ledger
//!   4. A blank-comment rejection is shown to fail validation up front

use provost_audit::{LogQuery, SortOrder};
use provost_contracts::{error::ProvostResult, role::Role};

use crate::mock_data::{cs302_submission, university};

/// Run Scenario 2: Rejection Freezes the Chain.
pub fn run_scenario() -> ProvostResult<()> {
    println!("=== Scenario 2: Rejection Freezes the Chain ===");
    println!();

    let fixture = university()?;
    let adviser = fixture.directory.actor_for_role(Role::CourseAdviser)?;
    let hod = fixture.directory.actor_for_role(Role::Hod)?;
    let dean = fixture.directory.actor_for_role(Role::Dean)?;
    let dvc = fixture.directory.actor_for_role(Role::DvcAcademic)?;

    let result = fixture.engine.submit(cs302_submission(), &adviser)?;
    println!(
        "  Submitted: {} - {} ({}/{})",
        result.course_code, result.student_name, result.score, result.grade
    );

    fixture.engine.approve(&result.id, &hod, None)?;
    println!("  {} approved", hod.name);

    // ── A rejection without justification is refused ──────────────────────────

    match fixture.engine.reject(&result.id, &dean, "  ".to_string()) {
        Err(e) => println!("  Blank-comment rejection refused: {}", e),
        Ok(_) => println!("  UNEXPECTED: blank-comment rejection succeeded"),
    }

    // ── The Dean rejects with a justification ─────────────────────────────────

    let rejected = fixture
        .engine
        .reject(&result.id, &dean, "incomplete data".to_string())?;
    println!(
        "  {} rejected -> status {}, current approver cleared: {}",
        dean.name,
        rejected.status,
        rejected.current_approver.is_none()
    );

    // ── The frozen chain refuses further decisions ────────────────────────────

    match fixture.engine.approve(&result.id, &dvc, None) {
        Err(e) => println!("  {}'s approval refused: {}", dvc.name, e),
        Ok(_) => println!("  UNEXPECTED: approval on a frozen chain succeeded"),
    }
    println!();

    let entries = fixture.ledger.entries(&LogQuery {
        order: SortOrder::OldestFirst,
        ..LogQuery::default()
    });
    println!("  Ledger entries ({} total, creation order):", entries.len());
    for entry in &entries {
        println!(
            "    [{}] {}: {}",
            entry.sequence, entry.record.action, entry.record.details
        );
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
    println!("  Scenario 2 complete.");
    println!();

    Ok(())
}
