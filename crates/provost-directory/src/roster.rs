//! Roster configuration schema.
//!
//! A `RosterConfig` is deserialized from TOML and holds an ordered list of
//! `RosterUser`s. Users are listed in precedence order — when two users
//! hold the same role, the first one declared is the one chain slots are
//! routed to.

use serde::{Deserialize, Serialize};

use provost_contracts::role::Role;

/// A single directory user loaded from TOML.
///
/// Example:
/// ```toml
/// [[users]]
/// id = "u-2"
/// name = "Prof. Michael Chen"
/// role = "hod"
/// department = "Computer Science"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterUser {
    /// Stable identifier, as issued by the identity provider.
    pub id: String,

    /// Display name, cached into chain slots and audit records.
    pub name: String,

    /// The role this user holds. Uses the institutional snake_case
    /// vocabulary ("course_adviser", "hod", "dean", …).
    pub role: Role,

    pub department: Option<String>,
}

/// The top-level structure deserialized from a TOML roster file.
///
/// Example:
/// ```toml
/// [[users]]
/// id = "u-1"
/// name = "Dr. Sarah Johnson"
/// role = "course_adviser"
///
/// [[users]]
/// id = "u-2"
/// name = "Prof. Michael Chen"
/// role = "hod"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Ordered list of users. First holder of a role wins.
    pub users: Vec<RosterUser>,
}
