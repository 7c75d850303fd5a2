//! # provost-visibility
//!
//! Role-scoped visibility and dashboard statistics for the Provost
//! workflow engine.
//!
//! ## Overview
//!
//! This crate answers the read-side question "which results may this actor
//! see or act on" — used for every listing (pending approval, approved,
//! rejected views) and for dashboard aggregates. The rules are pure
//! functions over a result snapshot; [`ResultsView`] binds them to a shared
//! [`ResultStore`](provost_engine::traits::ResultStore) handle.

pub mod resolver;

pub use resolver::{dashboard_stats, is_visible, visible, ResultsView};

// ── Tests ─────────────────────────────────────────────────────────────────────
