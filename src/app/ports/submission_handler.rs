use async_trait::async_trait;
use thiserror::Error;

use crate::domain::RedshiftDataSourceInput;

/// Failure reported by a submission handler. The form does not interpret it;
/// the message is shown as-is and the form becomes interactive again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Data source rejected: {0}")]
    Rejected(String),
    #[error("Could not save data source: {0}")]
    Storage(String),
    #[error("Submission handler stopped unexpectedly: {0}")]
    Aborted(String),
}

/// Persists a validated data source. Implementations own transport, storage
/// and any timeout policy.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&self, payload: RedshiftDataSourceInput) -> Result<(), SubmitError>;
}
