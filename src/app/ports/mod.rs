pub mod data_source_store;
pub mod renderer;
pub mod submission_handler;

pub use data_source_store::{DataSourceStore, DataSourceStoreError};
pub use renderer::Renderer;
pub use submission_handler::{SubmissionHandler, SubmitError};
