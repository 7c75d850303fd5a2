//! # provost-engine
//!
//! The approval chain engine for the Provost workflow system.
//!
//! ## Overview
//!
//! [`ApprovalEngine`] owns every mutation of the result set: submission,
//! approval, rejection. Its collaborators sit behind the four traits in
//! [`traits`] — the result store, the audit ledger, the role directory,
//! and the event sink — so persistence and delivery mechanisms stay
//! pluggable. [`InMemoryResultStore`] is the reference store.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use provost_engine::{ApprovalEngine, InMemoryResultStore, TracingEventSink};
//!
//! let store = Arc::new(InMemoryResultStore::new());
//! let engine = ApprovalEngine::new(
//!     store.clone(),
//!     ledger,            // Arc<dyn AuditSink>, e.g. provost_audit::InMemoryLedger
//!     Box::new(directory),
//!     Box::new(TracingEventSink),
//! );
//!
//! let result = engine.submit(submission, &adviser)?;
//! engine.approve(&result.id, &hod, None)?;
//! ```

pub mod engine;
pub mod events;
pub mod memory;
pub mod traits;

pub use engine::ApprovalEngine;
pub use events::{NullEventSink, TracingEventSink};
pub use memory::InMemoryResultStore;
