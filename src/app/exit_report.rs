//! The single JSON line written to stdout when the form closes.

use serde::Serialize;

use super::state::FormExit;
use crate::domain::RedshiftDataSourceInput;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExitReport {
    Saved {
        #[serde(rename = "dataSource")]
        data_source: Box<RedshiftDataSourceInput>,
    },
    Cancelled {
        #[serde(rename = "navigateTo")]
        navigate_to: String,
    },
}

impl ExitReport {
    /// Passwords never leave the process through the report.
    pub fn from_exit(exit: &FormExit) -> Self {
        match exit {
            FormExit::Saved(payload) => Self::Saved {
                data_source: Box::new(RedshiftDataSourceInput {
                    password: None,
                    ..payload.as_ref().clone()
                }),
            },
            FormExit::Cancelled(target) => Self::Cancelled {
                navigate_to: target.as_str().to_string(),
            },
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
