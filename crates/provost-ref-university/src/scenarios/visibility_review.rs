//! Scenario 3: Visibility and Audit Review
//!
//! Populates the store with results in different lifecycle stages, then
//! walks the read path:
//!
//!   1. Per-role visible sets (adviser sees own, reviewers see their queue
//!      and history, admin sees all)
//!   2. Dashboard statistics per viewer, always over the filtered set
//!   3. Audit ledger queries: category filter, free-text search, ordering

use provost_audit::{LogCategory, LogQuery, SortOrder};
use provost_contracts::{actor::UserId, error::ProvostResult, role::Role};
use provost_visibility::ResultsView;

use crate::mock_data::{cs301_submission, cs302_submission, cs303_submission, university};

/// Run Scenario 3: Visibility and Audit Review.
pub fn run_scenario() -> ProvostResult<()> {
    println!("=== Scenario 3: Visibility and Audit Review ===");
    println!();

    let fixture = university()?;
    let adviser = fixture.directory.actor_for_role(Role::CourseAdviser)?;
    let hod = fixture.directory.actor_for_role(Role::Hod)?;
    let dean = fixture.directory.actor_for_role(Role::Dean)?;

    // One fresh, one mid-chain, one rejected.
    let fresh = fixture.engine.submit(cs301_submission(), &adviser)?;
    let mid = fixture.engine.submit(cs302_submission(), &adviser)?;
    fixture.engine.approve(&mid.id, &hod, None)?;
    let doomed = fixture.engine.submit(cs303_submission(), &adviser)?;
    fixture.engine.approve(&doomed.id, &hod, None)?;
    fixture
        .engine
        .reject(&doomed.id, &dean, "score sheet missing signatures".to_string())?;

    println!(
        "  Populated: {} fresh, {} mid-chain, {} rejected",
        fresh.course_code, mid.course_code, doomed.course_code
    );
    println!();

    // ── Per-role visible sets ─────────────────────────────────────────────────

    let view = ResultsView::new(fixture.store.clone());
    let admin = UserId::new("u-6");

    let viewers = [
        ("course adviser", Role::CourseAdviser, &adviser.user_id),
        ("hod", Role::Hod, &hod.user_id),
        ("dean", Role::Dean, &dean.user_id),
        ("admin", Role::Admin, &admin),
    ];

    for (label, role, user_id) in viewers {
        let results = view.for_role(role, user_id)?;
        let courses: Vec<&str> = results.iter().map(|r| r.course_code.as_str()).collect();
        println!("  Visible to {:>14}: {:?}", label, courses);
    }
    println!();

    // ── Dashboard statistics ──────────────────────────────────────────────────

    for (label, role, user_id) in [
        ("course adviser", Role::CourseAdviser, &adviser.user_id),
        ("hod", Role::Hod, &hod.user_id),
        ("admin", Role::Admin, &admin),
    ] {
        let stats = view.stats(role, user_id)?;
        println!(
            "  Stats for {:>14}: total {} | my turn {} | approved {} | rejected {} | final {}",
            label,
            stats.total_results,
            stats.pending_approval,
            stats.approved,
            stats.rejected,
            stats.final_approved
        );
    }
    println!();

    // ── Audit queries ─────────────────────────────────────────────────────────

    let approvals = fixture.ledger.entries(&LogQuery {
        category: Some(LogCategory::Approved),
        order: SortOrder::OldestFirst,
        ..LogQuery::default()
    });
    println!("  Approval entries: {}", approvals.len());

    let cs302_trail = fixture.ledger.entries(&LogQuery {
        text: Some("cs302".to_string()),
        ..LogQuery::default()
    });
    println!("  Entries mentioning CS302: {}", cs302_trail.len());

    let newest = fixture.ledger.entries(&LogQuery::default());
    if let Some(latest) = newest.first() {
        println!("  Most recent action: {}", latest.record.action);
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
    println!("  Scenario 3 complete.");
    println!();

    Ok(())
}
