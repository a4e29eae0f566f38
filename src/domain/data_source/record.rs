use serde::{Deserialize, Serialize};

use super::id::DataSourceId;

pub const DEFAULT_REDSHIFT_PORT: u16 = 5439;

/// A Redshift data source as persisted by the store. The password never leaves
/// the store, so it is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedshiftDataSource {
    pub id: DataSourceId,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    #[serde(default = "default_read_only")]
    pub read_only: bool,
    #[serde(default)]
    pub notes: String,
}

fn default_read_only() -> bool {
    true
}

impl RedshiftDataSource {
    /// Format: host:port/database
    pub fn display_name(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

/// An existing record together with the free-form context that the AI
/// assistant keeps for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingDataSource {
    pub record: RedshiftDataSource,
    pub additional_context: Option<String>,
}
