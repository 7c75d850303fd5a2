//! Dashboard aggregate counters.

use serde::{Deserialize, Serialize};

/// Per-viewer dashboard statistics, always derived from the viewer's
/// role-filtered result set — never the global set (except for admin,
/// whose filtered set is the global set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_results: usize,
    /// Results that are strictly "my turn now": status pending AND the
    /// viewer is the current approver.
    pub pending_approval: usize,
    pub approved: usize,
    pub rejected: usize,
    pub final_approved: usize,
}
