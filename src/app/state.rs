use std::time::Instant;

use super::form_state::DataSourceFormState;
use super::message_state::MessageState;
use super::navigation::CancelTarget;
use crate::domain::{GatewayIp, RedshiftDataSource, RedshiftDataSourceInput, WorkspaceId};

/// Inputs supplied by whoever mounts the form.
#[derive(Debug, Clone)]
pub struct FormProps {
    pub existing: Option<RedshiftDataSource>,
    pub additional_context: Option<String>,
    pub workspace_id: WorkspaceId,
    pub gateway_ip: GatewayIp,
}

impl FormProps {
    pub fn new(workspace_id: WorkspaceId) -> Self {
        Self {
            existing: None,
            additional_context: None,
            workspace_id,
            gateway_ip: GatewayIp::unknown(),
        }
    }
}

/// How the form was left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormExit {
    Saved(Box<RedshiftDataSourceInput>),
    Cancelled(CancelTarget),
}

pub struct AppState {
    pub form: DataSourceFormState,
    pub messages: MessageState,

    pub workspace_id: WorkspaceId,
    pub gateway_ip: GatewayIp,
    /// Context supplied by the caller; wins over the stored one on reload.
    pub context_override: Option<String>,

    /// Copy of the payload currently held by the submission handler.
    pub pending_payload: Option<Box<RedshiftDataSourceInput>>,
    pub exit: Option<FormExit>,

    pub should_quit: bool,
    pub render_dirty: bool,
    pub terminal_height: u16,
}

impl AppState {
    pub fn new(props: FormProps) -> Self {
        let form = DataSourceFormState::new(
            props.existing.as_ref(),
            props.additional_context.as_deref(),
        );
        Self {
            form,
            messages: MessageState::default(),
            workspace_id: props.workspace_id,
            gateway_ip: props.gateway_ip,
            context_override: props.additional_context,
            pending_payload: None,
            exit: None,
            should_quit: false,
            render_dirty: true,
            terminal_height: 0,
        }
    }

    pub fn cancel_target(&self) -> CancelTarget {
        CancelTarget::data_sources(&self.workspace_id)
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired_at(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form_field::FormField;
    use crate::app::form_mode::FormMode;

    #[test]
    fn new_without_existing_mounts_create_form() {
        let state = AppState::new(FormProps::new(WorkspaceId::new("ws-1")));

        assert_eq!(state.form.mode(), FormMode::Create);
        assert!(state.render_dirty);
        assert!(state.exit.is_none());
    }

    #[test]
    fn create_mode_drops_supplied_context() {
        let mut props = FormProps::new(WorkspaceId::new("ws-1"));
        props.additional_context = Some("ctx".to_string());

        let mut state = AppState::new(props);
        state.form.set_field(FormField::Name, "Warehouse");
        state.form.set_field(FormField::Host, "h");
        state.form.set_field(FormField::Port, "5439");
        state.form.set_field(FormField::Database, "d");
        state.form.set_field(FormField::Username, "u");
        state.form.set_field(FormField::Password, "p");

        let payload = state.form.build_payload().unwrap();
        assert_eq!(payload.additional_info, None);
    }

    #[test]
    fn cancel_target_uses_workspace() {
        let state = AppState::new(FormProps::new(WorkspaceId::new("ws-9")));
        assert_eq!(state.cancel_target().as_str(), "/workspaces/ws-9/data-sources");
    }
}
