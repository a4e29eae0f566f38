pub mod data_source;
pub mod workspace;

pub use data_source::{
    DataSourceId, ExistingDataSource, RedshiftDataSource, RedshiftDataSourceInput,
};
pub use workspace::{GatewayIp, WorkspaceId};
