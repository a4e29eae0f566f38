use serde::{Deserialize, Serialize};

use crate::domain::{DataSourceId, ExistingDataSource, RedshiftDataSource};

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct DataSourceConfigFile {
    pub version: u32,
    #[serde(default)]
    pub data_sources: Vec<DataSourceEntry>,
}

impl Default for DataSourceConfigFile {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            data_sources: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceEntry {
    pub id: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_read_only")]
    pub read_only: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

fn default_read_only() -> bool {
    true
}

impl DataSourceEntry {
    pub fn to_record(&self) -> RedshiftDataSource {
        RedshiftDataSource {
            id: DataSourceId::from_string(&self.id),
            name: self.name.clone(),
            host: self.host.clone(),
            port: self.port,
            database: self.database.clone(),
            username: self.username.clone(),
            read_only: self.read_only,
            notes: self.notes.clone(),
        }
    }

    pub fn to_existing(&self) -> ExistingDataSource {
        ExistingDataSource {
            record: self.to_record(),
            additional_context: self.additional_context.clone(),
        }
    }
}

impl DataSourceConfigFile {
    pub fn find(&self, id: &DataSourceId) -> Option<&DataSourceEntry> {
        self.data_sources.iter().find(|e| e.id == id.as_str())
    }

    pub fn position(&self, id: &DataSourceId) -> Option<usize> {
        self.data_sources.iter().position(|e| e.id == id.as_str())
    }

    /// Case-insensitive, ignoring the entry being edited.
    pub fn name_taken(&self, name: &str, except: Option<&DataSourceId>) -> bool {
        let normalized = name.trim().to_lowercase();
        self.data_sources.iter().any(|e| {
            e.name.trim().to_lowercase() == normalized
                && except.is_none_or(|id| e.id != id.as_str())
        })
    }
}
