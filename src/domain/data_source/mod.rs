mod id;
mod input;
mod record;

pub use id::DataSourceId;
pub use input::RedshiftDataSourceInput;
pub use record::{ExistingDataSource, RedshiftDataSource};
