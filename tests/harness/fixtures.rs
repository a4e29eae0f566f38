use redshift_setup::app::form_field::FormField;
use redshift_setup::app::state::{AppState, FormProps};
use redshift_setup::domain::{DataSourceId, GatewayIp, RedshiftDataSource, WorkspaceId};

use super::type_into;

pub const WORKSPACE: &str = "ws-1";
pub const GATEWAY: &str = "203.0.113.7";

pub fn create_props() -> FormProps {
    let mut props = FormProps::new(WorkspaceId::new(WORKSPACE));
    props.gateway_ip = GatewayIp::new(GATEWAY);
    props
}

pub fn prod_record(id: DataSourceId) -> RedshiftDataSource {
    RedshiftDataSource {
        id,
        name: "Prod".to_string(),
        host: "h".to_string(),
        port: 5439,
        database: "d".to_string(),
        username: "u".to_string(),
        read_only: false,
        notes: "n".to_string(),
    }
}

pub fn create_state() -> AppState {
    AppState::new(create_props())
}

pub fn edit_state(record: RedshiftDataSource, context: Option<&str>) -> AppState {
    let mut props = create_props();
    props.existing = Some(record);
    props.additional_context = context.map(str::to_string);
    AppState::new(props)
}

/// Fills every required field of a new data source.
pub fn fill_valid_form(state: &mut AppState) {
    type_into(state, FormField::Name, "Analytics");
    type_into(state, FormField::Host, "cluster.example.com");
    type_into(state, FormField::Port, "5439");
    type_into(state, FormField::Database, "dev");
    type_into(state, FormField::Username, "admin");
    type_into(state, FormField::Password, "secret");
}
