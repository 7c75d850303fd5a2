//! Caller identity and directory binding types.
//!
//! Identity is supplied by an external identity provider and trusted as
//! already authenticated. Provost never verifies credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Stable identifier for a user, as issued by the identity provider.
///
/// Appears in chain slots, audit records, and visibility queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Construct a user id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The authenticated caller of an engine operation.
///
/// Built by the hosting application from its identity provider. The engine
/// trusts every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    pub department: Option<String>,
}

/// The concrete user a directory resolves for a hierarchy role.
///
/// Bound into a pending chain slot at submission time. The binding is a
/// routing default — the chain slot is re-stamped to the actual actor when
/// a decision is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBinding {
    pub user_id: UserId,
    pub user_name: String,
}
