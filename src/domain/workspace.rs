use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the workspace the data source belongs to. Only used to build
/// the cancel navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed egress address shown to the user so they can allow-list it.
/// Opaque: never parsed or validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GatewayIp(Option<String>);

impl GatewayIp {
    pub fn new(ip: impl Into<String>) -> Self {
        let ip = ip.into();
        if ip.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(ip))
        }
    }

    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}
