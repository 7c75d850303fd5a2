//! University reference runtime demo scenarios.
//!
//! Each scenario is a self-contained module that wires up real Provost
//! components (engine, directory, store, ledger, visibility resolver) with
//! mock university data and demonstrates a distinct workflow pattern.

pub mod full_approval;
pub mod rejection_path;
pub mod visibility_review;
