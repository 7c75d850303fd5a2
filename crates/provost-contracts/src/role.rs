//! Institutional roles and the fixed approval hierarchy.
//!
//! The five hierarchy roles are ordered; every approval chain passes through
//! them in exactly this order. `Admin` is a system-management role that is
//! never part of a chain. The enum is closed on purpose: adding or removing
//! a hierarchy role is a compile-checked change everywhere roles are matched.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A role within the institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Submits results and self-certifies the first chain slot.
    CourseAdviser,
    /// Head of Department — first reviewer after submission.
    Hod,
    Dean,
    DvcAcademic,
    /// Final approver in the hierarchy.
    ViceChancellor,
    /// System management. Orthogonal to the hierarchy; sees everything,
    /// approves nothing.
    Admin,
}

impl Role {
    /// The fixed approval hierarchy, in chain order.
    ///
    /// Index 0 is the submitting role; the remaining slots are created
    /// `Pending` at submission time.
    pub const HIERARCHY: [Role; 5] = [
        Role::CourseAdviser,
        Role::Hod,
        Role::Dean,
        Role::DvcAcademic,
        Role::ViceChancellor,
    ];

    /// Position of this role within the hierarchy, or `None` for `Admin`.
    pub fn hierarchy_index(self) -> Option<usize> {
        Self::HIERARCHY.iter().position(|r| *r == self)
    }

    /// Return true if this role participates in approval chains.
    pub fn is_hierarchy(self) -> bool {
        self.hierarchy_index().is_some()
    }

    /// The upper-case label used in audit action strings,
    /// e.g. "Result Approved by DVC ACADEMIC".
    pub fn audit_label(self) -> &'static str {
        match self {
            Role::CourseAdviser => "COURSE ADVISER",
            Role::Hod => "HOD",
            Role::Dean => "DEAN",
            Role::DvcAcademic => "DVC ACADEMIC",
            Role::ViceChancellor => "VICE CHANCELLOR",
            Role::Admin => "ADMIN",
        }
    }

    /// The snake_case name this role serializes to.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::CourseAdviser => "course_adviser",
            Role::Hod => "hod",
            Role::Dean => "dean",
            Role::DvcAcademic => "dvc_academic",
            Role::ViceChancellor => "vice_chancellor",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
