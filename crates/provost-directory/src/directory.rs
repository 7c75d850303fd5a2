//! TOML-driven directory implementation.
//!
//! `TomlDirectory` loads a `RosterConfig` from a TOML string or file and
//! implements the `Directory` trait from provost-engine.
//!
//! Resolution algorithm: iterate users in declaration order and return the
//! first one holding the requested role. An unstaffed role is a `Config`
//! error — the engine cannot route a chain slot to nobody.

use std::path::Path;

use tracing::debug;

use provost_contracts::{
    actor::{Actor, RoleBinding, UserId},
    error::{ProvostError, ProvostResult},
    role::Role,
};
use provost_engine::traits::Directory;

use crate::roster::RosterConfig;

/// A `Directory` implementation that reads its roster from a TOML document.
///
/// Construct via `from_toml_str` or `from_file`, then pass to the engine.
///
/// ```rust,ignore
/// use provost_directory::TomlDirectory;
///
/// let directory = TomlDirectory::from_file(Path::new("rosters/university.toml"))?;
/// ```
#[derive(Debug)]
pub struct TomlDirectory {
    config: RosterConfig,
}

impl TomlDirectory {
    /// Parse `s` as TOML and build a `TomlDirectory`.
    ///
    /// Returns `ProvostError::Config` if the TOML is malformed or does not
    /// match the expected `RosterConfig` schema.
    pub fn from_toml_str(s: &str) -> ProvostResult<Self> {
        let config: RosterConfig = toml::from_str(s).map_err(|e| ProvostError::Config {
            reason: format!("failed to parse roster TOML: {}", e),
        })?;
        Ok(Self { config })
    }

    /// Read the file at `path` and parse it as a TOML roster.
    ///
    /// Returns `ProvostError::Config` if the file cannot be read or its
    /// contents are not valid TOML matching `RosterConfig`.
    pub fn from_file(path: &Path) -> ProvostResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ProvostError::Config {
            reason: format!("failed to read roster file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Look up a user by id and build an `Actor` for them.
    ///
    /// Used by hosting applications that drive the engine on behalf of
    /// roster users (the demo does); a real deployment gets actors from its
    /// identity provider instead.
    pub fn find_user(&self, id: &UserId) -> Option<Actor> {
        self.config.users.iter().find(|u| u.id == id.0).map(|u| Actor {
            user_id: UserId::new(u.id.clone()),
            name: u.name.clone(),
            role: u.role,
            department: u.department.clone(),
        })
    }

    /// Build an `Actor` for the current holder of `role`.
    pub fn actor_for_role(&self, role: Role) -> ProvostResult<Actor> {
        let binding = self.resolve(role)?;
        self.find_user(&binding.user_id)
            .ok_or_else(|| ProvostError::Config {
                reason: format!("roster user '{}' vanished mid-lookup", binding.user_id),
            })
    }
}

impl Directory for TomlDirectory {
    /// Return the first roster user holding `role`, in declaration order.
    fn resolve(&self, role: Role) -> ProvostResult<RoleBinding> {
        let user = self
            .config
            .users
            .iter()
            .find(|u| u.role == role)
            .ok_or_else(|| ProvostError::Config {
                reason: format!("no user in the roster holds role '{}'", role),
            })?;

        debug!(role = %role, user_id = %user.id, "role resolved");

        Ok(RoleBinding {
            user_id: UserId::new(user.id.clone()),
            user_name: user.name.clone(),
        })
    }
}
