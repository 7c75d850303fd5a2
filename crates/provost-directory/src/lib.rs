//! # provost-directory
//!
//! A TOML-driven role directory for the Provost workflow engine.
//!
//! ## Overview
//!
//! This crate provides [`TomlDirectory`], which implements the
//! [`Directory`](provost_engine::traits::Directory) trait. The roster is
//! declared in a TOML file; `resolve(role)` returns the first declared
//! holder of the role, which the engine binds into pending chain slots at
//! submission time.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use provost_directory::TomlDirectory;
//!
//! let directory = TomlDirectory::from_file(Path::new("rosters/university.toml"))?;
//! // Pass `Box::new(directory)` to `provost_engine::ApprovalEngine::new(...)`.
//! ```

pub mod directory;
pub mod roster;

pub use directory::TomlDirectory;
pub use roster::{RosterConfig, RosterUser};

// ── Tests ─────────────────────────────────────────────────────────────────────
