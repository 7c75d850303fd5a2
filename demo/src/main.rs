//! Provost University Reference Runtime — Demo CLI
//!
//! Runs one or all of the three university demo scenarios. Each scenario
//! uses real Provost components (approval engine, roster directory,
//! hash-chained ledger, visibility resolver) wired together with mock
//! university data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- full-approval
//!   cargo run -p demo -- rejection-path
//!   cargo run -p demo -- visibility-review

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use provost_ref_university::scenarios::{full_approval, rejection_path, visibility_review};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Provost — result-approval workflow engine university demo.
///
/// Each subcommand runs one or all of the three approval scenarios,
/// demonstrating chain ordering, rejection freezing, and role-scoped
/// visibility over an audited result set.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Provost university reference runtime demo",
    long_about = "Runs Provost university demo scenarios showing the approval chain\n\
                  state machine, per-role visibility, and audit ledger integrity."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three university scenarios in sequence.
    RunAll,
    /// Scenario 1: Full Approval Chain (submit, then four approvals).
    FullApproval,
    /// Scenario 2: Rejection Freezes the Chain (mid-chain rejection).
    RejectionPath,
    /// Scenario 3: Visibility and Audit Review (read path walkthrough).
    VisibilityReview,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::FullApproval => full_approval::run_scenario(),
        Command::RejectionPath => rejection_path::run_scenario(),
        Command::VisibilityReview => visibility_review::run_scenario(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

fn run_all() -> provost_contracts::error::ProvostResult<()> {
    full_approval::run_scenario()?;
    rejection_path::run_scenario()?;
    visibility_review::run_scenario()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("Provost — Result Approval Workflow Engine");
    println!("University Reference Demo");
    println!("=========================================");
    println!();
    println!("Lifecycle per result:");
    println!("  [1] Course adviser submits; payload validated, grade derived from score");
    println!("  [2] Chain created self-certified: adviser approved, reviewers pending");
    println!("  [3] HOD -> Dean -> DVC Academic -> Vice Chancellor approve in order");
    println!("  [4] Any rejection (with justification) freezes the chain permanently");
    println!("  [5] Every action appended to a SHA-256 hash-chained audit ledger");
    println!();
}
