use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::app::ports::{DataSourceStore, DataSourceStoreError, SubmissionHandler, SubmitError};
use crate::domain::{DataSourceId, ExistingDataSource, RedshiftDataSource, RedshiftDataSourceInput};
use crate::infra::config::data_source_file::{
    CURRENT_VERSION, DataSourceConfigFile, DataSourceEntry,
};

const CONFIG_FILE_NAME: &str = "data_sources.toml";

/// Keeps every data source in one versioned TOML file. Doubles as the
/// submission handler for the terminal app.
#[derive(Debug, Clone)]
pub struct TomlDataSourceStore {
    config_dir: PathBuf,
}

impl TomlDataSourceStore {
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn read_file(&self) -> Result<DataSourceConfigFile, DataSourceStoreError> {
        let path = self.config_file_path();

        if !path.exists() {
            return Ok(DataSourceConfigFile::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| DataSourceStoreError::ReadError(e.to_string()))?;

        let config: DataSourceConfigFile = toml::from_str(&content)
            .map_err(|e| DataSourceStoreError::InvalidFormat(e.to_string()))?;

        if config.version != CURRENT_VERSION {
            return Err(DataSourceStoreError::VersionMismatch {
                found: config.version,
                expected: CURRENT_VERSION,
            });
        }

        Ok(config)
    }

    fn write_file(&self, config: &DataSourceConfigFile) -> Result<(), DataSourceStoreError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| DataSourceStoreError::IoError(e.to_string()))?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| DataSourceStoreError::WriteError(e.to_string()))?;

        let content_with_header = format!(
            "# redshift-setup data sources\n# WARNING: Passwords are stored in plain text\n\n{}",
            content
        );

        let path = self.config_file_path();
        fs::write(&path, content_with_header)
            .map_err(|e| DataSourceStoreError::WriteError(e.to_string()))?;

        set_file_permissions(&path)?;

        Ok(())
    }

    /// Creates a new entry when `payload.id` is None, otherwise replaces the
    /// entry with that id. A missing password on edit keeps the stored one.
    pub fn save(
        &self,
        payload: &RedshiftDataSourceInput,
    ) -> Result<RedshiftDataSource, DataSourceStoreError> {
        let mut config = self.read_file()?;

        if config.name_taken(&payload.name, payload.id.as_ref()) {
            return Err(DataSourceStoreError::DuplicateName(payload.name.clone()));
        }

        let entry = match &payload.id {
            Some(id) => {
                let idx = config
                    .position(id)
                    .ok_or_else(|| DataSourceStoreError::NotFound(id.to_string()))?;
                let password = payload
                    .password
                    .clone()
                    .unwrap_or_else(|| config.data_sources[idx].password.clone());
                let entry = entry_from_payload(id.clone(), payload, password);
                config.data_sources[idx] = entry.clone();
                entry
            }
            None => {
                let password = payload
                    .password
                    .clone()
                    .ok_or(DataSourceStoreError::MissingPassword)?;
                let entry = entry_from_payload(DataSourceId::new(), payload, password);
                config.data_sources.push(entry.clone());
                entry
            }
        };

        self.write_file(&config)?;
        tracing::info!(
            id = %entry.id,
            edit = payload.is_edit(),
            kept_password = payload.keeps_existing_password(),
            "data source saved"
        );

        Ok(entry.to_record())
    }
}

fn entry_from_payload(
    id: DataSourceId,
    payload: &RedshiftDataSourceInput,
    password: String,
) -> DataSourceEntry {
    DataSourceEntry {
        id: id.as_str().to_string(),
        name: payload.name.clone(),
        host: payload.host.clone(),
        port: payload.port,
        database: payload.database.clone(),
        username: payload.username.clone(),
        password,
        read_only: payload.read_only,
        notes: payload.notes.clone(),
        additional_context: payload.additional_info.clone(),
    }
}

impl DataSourceStore for TomlDataSourceStore {
    fn load_all(&self) -> Result<Vec<RedshiftDataSource>, DataSourceStoreError> {
        let config = self.read_file()?;
        Ok(config
            .data_sources
            .iter()
            .map(DataSourceEntry::to_record)
            .collect())
    }

    fn find_by_id(
        &self,
        id: &DataSourceId,
    ) -> Result<Option<ExistingDataSource>, DataSourceStoreError> {
        let config = self.read_file()?;
        Ok(config.find(id).map(DataSourceEntry::to_existing))
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}

#[async_trait]
impl SubmissionHandler for TomlDataSourceStore {
    async fn submit(&self, payload: RedshiftDataSourceInput) -> Result<(), SubmitError> {
        let store = self.clone();
        let result = tokio::task::spawn_blocking(move || store.save(&payload))
            .await
            .map_err(|e| SubmitError::Aborted(e.to_string()))?;

        match result {
            Ok(_) => Ok(()),
            Err(
                err @ (DataSourceStoreError::DuplicateName(_)
                | DataSourceStoreError::NotFound(_)
                | DataSourceStoreError::MissingPassword),
            ) => Err(SubmitError::Rejected(err.to_string())),
            Err(err) => Err(SubmitError::Storage(err.to_string())),
        }
    }
}

#[cfg(unix)]
fn set_file_permissions(path: &std::path::Path) -> Result<(), DataSourceStoreError> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms).map_err(|e| DataSourceStoreError::IoError(e.to_string()))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &std::path::Path) -> Result<(), DataSourceStoreError> {
    Ok(())
}
