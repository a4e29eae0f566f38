use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{DataSourceId, ExistingDataSource, RedshiftDataSource};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataSourceStoreError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Data source name already exists: {0}")]
    DuplicateName(String),
    #[error("Data source not found: {0}")]
    NotFound(String),
    #[error("A password is required for a new data source")]
    MissingPassword,
}

/// Provides existing records for edit mode.
pub trait DataSourceStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<RedshiftDataSource>, DataSourceStoreError>;

    fn find_by_id(
        &self,
        id: &DataSourceId,
    ) -> Result<Option<ExistingDataSource>, DataSourceStoreError>;

    fn storage_path(&self) -> PathBuf;
}
