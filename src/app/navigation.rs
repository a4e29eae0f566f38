use std::fmt;

use crate::domain::WorkspaceId;

/// Where the host application should navigate when the user cancels.
/// Only the path is produced here; following it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelTarget(String);

impl CancelTarget {
    pub fn data_sources(workspace_id: &WorkspaceId) -> Self {
        Self(format!("/workspaces/{}/data-sources", workspace_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CancelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
