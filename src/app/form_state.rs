use std::collections::HashMap;

use crate::app::field_schema::{self, FieldError};
use crate::app::form_field::FormField;
use crate::app::form_mode::FormMode;
use crate::app::submission::SubmissionStatus;
use crate::domain::{DataSourceId, RedshiftDataSource, RedshiftDataSourceInput};

pub const FORM_INPUT_WIDTH: u16 = 48;
pub const FORM_INPUT_VISIBLE_WIDTH: usize = (FORM_INPUT_WIDTH - 4) as usize;

/// Working copy of the data source. Values are kept as typed, so the snapshot
/// may be invalid at any point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub name: String,
    pub host: String,
    pub port: String,
    pub database: String,
    pub username: String,
    pub password: String,
    pub read_only: bool,
    pub notes: String,
    pub additional_info: Option<String>,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self {
            name: String::new(),
            host: String::new(),
            port: String::new(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
            read_only: true,
            notes: String::new(),
            additional_info: None,
        }
    }
}

impl FormSnapshot {
    /// The password is never pre-filled: the record does not carry it.
    pub fn from_existing(record: &RedshiftDataSource, additional_context: Option<&str>) -> Self {
        Self {
            name: record.name.clone(),
            host: record.host.clone(),
            port: record.port.to_string(),
            database: record.database.clone(),
            username: record.username.clone(),
            password: String::new(),
            read_only: record.read_only,
            notes: record.notes.clone(),
            additional_info: additional_context.map(str::to_string),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Host => &self.host,
            FormField::Port => &self.port,
            FormField::Database => &self.database,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
            FormField::ReadOnly => {
                if self.read_only {
                    "true"
                } else {
                    "false"
                }
            }
            FormField::Notes => &self.notes,
            FormField::AdditionalInfo => self.additional_info.as_deref().unwrap_or_default(),
        }
    }

    /// None for non-text fields.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Host => Some(&mut self.host),
            FormField::Port => Some(&mut self.port),
            FormField::Database => Some(&mut self.database),
            FormField::Username => Some(&mut self.username),
            FormField::Password => Some(&mut self.password),
            FormField::ReadOnly => None,
            FormField::Notes => Some(&mut self.notes),
            FormField::AdditionalInfo => Some(self.additional_info.get_or_insert_with(String::new)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationTrigger {
    /// Re-validate a field every time its value changes.
    #[default]
    OnChange,
    OnSubmit,
}

#[derive(Debug, Clone)]
pub struct DataSourceFormState {
    pub snapshot: FormSnapshot,
    mode: FormMode,
    editing_id: Option<DataSourceId>,

    pub validation_errors: HashMap<FormField, FieldError>,
    pub validation_trigger: ValidationTrigger,
    pub status: SubmissionStatus,

    pub focused_field: FormField,
    pub cursor_position: usize,
    pub viewport_offset: usize,
}

impl Default for DataSourceFormState {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl DataSourceFormState {
    /// Mounts the form. The mode is decided here and never changes afterwards.
    pub fn new(existing: Option<&RedshiftDataSource>, additional_context: Option<&str>) -> Self {
        let mut state = Self {
            snapshot: FormSnapshot::default(),
            mode: FormMode::from_existing(existing),
            editing_id: None,
            validation_errors: HashMap::new(),
            validation_trigger: ValidationTrigger::default(),
            status: SubmissionStatus::Idle,
            focused_field: FormField::Name,
            cursor_position: 0,
            viewport_offset: 0,
        };
        state.initialize(existing, additional_context);
        state
    }

    /// Replaces the snapshot wholesale, dropping any uncommitted edits and
    /// errors. Mode stays as mounted.
    pub fn initialize(
        &mut self,
        existing: Option<&RedshiftDataSource>,
        additional_context: Option<&str>,
    ) {
        if FormMode::from_existing(existing) != self.mode {
            tracing::warn!(
                mode = ?self.mode,
                has_existing = existing.is_some(),
                "reinitializing form with a record that does not match its mode"
            );
        }

        match existing {
            Some(record) => {
                self.snapshot = FormSnapshot::from_existing(record, additional_context);
                self.editing_id = Some(record.id.clone());
            }
            // An edit form keeps its target id so a blank password can never
            // mean "keep" for a record nobody names.
            None => self.snapshot = FormSnapshot::default(),
        }

        self.validation_errors.clear();
        self.focused_field = FormField::Name;
        self.cursor_to_end();
        tracing::debug!(mode = ?self.mode, "form initialized");
    }

    pub fn reinitialize(
        &mut self,
        existing: Option<&RedshiftDataSource>,
        additional_context: Option<&str>,
    ) {
        self.initialize(existing, additional_context);
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn editing_id(&self) -> Option<&DataSourceId> {
        self.editing_id.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn field_value(&self, field: FormField) -> &str {
        self.snapshot.value(field)
    }

    /// Stores the raw value. Validation is left to the caller.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::ReadOnly => {
                let value = value.into();
                self.snapshot.read_only = value.trim().eq_ignore_ascii_case("true");
            }
            _ => {
                if let Some(slot) = self.snapshot.text_mut(field) {
                    *slot = value.into();
                }
            }
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.snapshot.read_only = read_only;
    }

    pub fn toggle_read_only(&mut self) {
        self.snapshot.read_only = !self.snapshot.read_only;
    }

    /// Returns true when the field is valid.
    pub fn validate_field(&mut self, field: FormField) -> bool {
        self.validation_errors.remove(&field);
        match field_schema::validate(field, self.snapshot.value(field), self.mode) {
            Ok(()) => true,
            Err(err) => {
                self.validation_errors.insert(field, err);
                false
            }
        }
    }

    /// Returns true when every field is valid.
    pub fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for field in FormField::all() {
            valid &= self.validate_field(*field);
        }
        valid
    }

    pub fn error_for(&self, field: FormField) -> Option<&FieldError> {
        self.validation_errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    /// First invalid field in tab order.
    pub fn first_invalid_field(&self) -> Option<FormField> {
        FormField::all()
            .iter()
            .copied()
            .find(|f| self.validation_errors.contains_key(f))
    }

    /// Normalizes the snapshot into the outbound payload: identifying text is
    /// trimmed, the port is coerced to a number and a blank edit-mode password
    /// becomes `None` ("keep existing").
    pub fn build_payload(&self) -> Result<RedshiftDataSourceInput, FieldError> {
        for field in FormField::all() {
            field_schema::validate(*field, self.snapshot.value(*field), self.mode)?;
        }

        let snapshot = &self.snapshot;
        let password = if snapshot.password.trim().is_empty() {
            None
        } else {
            Some(snapshot.password.clone())
        };

        Ok(RedshiftDataSourceInput {
            id: self.editing_id.clone(),
            name: snapshot.name.trim().to_string(),
            host: snapshot.host.trim().to_string(),
            port: field_schema::parse_port(&snapshot.port)?,
            database: snapshot.database.trim().to_string(),
            username: snapshot.username.trim().to_string(),
            password,
            read_only: snapshot.read_only,
            notes: snapshot.notes.clone(),
            additional_info: snapshot.additional_info.clone(),
        })
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused_field = field;
        self.cursor_to_end();
    }

    pub fn update_cursor(&mut self, cursor: usize, visible_width: usize) {
        self.cursor_position = cursor;
        if cursor < self.viewport_offset {
            self.viewport_offset = cursor;
        } else if cursor >= self.viewport_offset + visible_width {
            self.viewport_offset = cursor.saturating_sub(visible_width) + 1;
        }
    }

    pub fn cursor_to_end(&mut self) {
        let len = self.field_value(self.focused_field).chars().count();
        self.cursor_position = len;
        self.viewport_offset = len.saturating_sub(FORM_INPUT_VISIBLE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prod_record() -> RedshiftDataSource {
        RedshiftDataSource {
            id: DataSourceId::from_string("ds-1"),
            name: "Prod".to_string(),
            host: "h".to_string(),
            port: 5439,
            database: "d".to_string(),
            username: "u".to_string(),
            read_only: false,
            notes: "n".to_string(),
        }
    }

    fn filled_create_form() -> DataSourceFormState {
        let mut state = DataSourceFormState::new(None, None);
        state.set_field(FormField::Name, "Warehouse");
        state.set_field(FormField::Host, "cluster.example.com");
        state.set_field(FormField::Port, "5439");
        state.set_field(FormField::Database, "analytics");
        state.set_field(FormField::Username, "etl");
        state.set_field(FormField::Password, "secret");
        state
    }

    mod initialize {
        use super::*;

        #[test]
        fn without_existing_uses_defaults_in_create_mode() {
            let state = DataSourceFormState::new(None, None);

            assert_eq!(state.mode(), FormMode::Create);
            assert!(state.snapshot.read_only);
            assert_eq!(state.snapshot.notes, "");
            assert!(state.snapshot.name.is_empty());
            assert!(state.snapshot.host.is_empty());
            assert!(state.snapshot.port.is_empty());
            assert!(state.snapshot.database.is_empty());
            assert!(state.snapshot.username.is_empty());
            assert!(state.snapshot.password.is_empty());
            assert_eq!(state.snapshot.additional_info, None);
            assert!(state.editing_id().is_none());
        }

        #[test]
        fn with_existing_copies_record_and_context() {
            let state = DataSourceFormState::new(Some(&prod_record()), Some("ctx"));

            assert_eq!(state.mode(), FormMode::Edit);
            assert_eq!(
                state.snapshot,
                FormSnapshot {
                    name: "Prod".to_string(),
                    host: "h".to_string(),
                    port: "5439".to_string(),
                    database: "d".to_string(),
                    username: "u".to_string(),
                    password: String::new(),
                    read_only: false,
                    notes: "n".to_string(),
                    additional_info: Some("ctx".to_string()),
                }
            );
            assert_eq!(state.editing_id().map(DataSourceId::as_str), Some("ds-1"));
        }

        #[test]
        fn with_existing_and_no_context_leaves_additional_info_unset() {
            let state = DataSourceFormState::new(Some(&prod_record()), None);
            assert_eq!(state.snapshot.additional_info, None);
        }

        #[test]
        fn reinitialize_discards_uncommitted_edits_and_errors() {
            let mut state = DataSourceFormState::new(Some(&prod_record()), Some("ctx"));
            state.set_field(FormField::Host, "");
            state.set_field(FormField::Password, "typed");
            state.validate_all();
            assert!(state.has_errors());

            let mut changed = prod_record();
            changed.host = "new-host".to_string();
            state.reinitialize(Some(&changed), Some("ctx2"));

            assert_eq!(state.snapshot.host, "new-host");
            assert!(state.snapshot.password.is_empty());
            assert_eq!(state.snapshot.additional_info.as_deref(), Some("ctx2"));
            assert!(!state.has_errors());
        }

        #[test]
        fn reinitialize_keeps_mounted_mode() {
            let mut state = DataSourceFormState::new(Some(&prod_record()), None);
            state.reinitialize(None, None);
            assert_eq!(state.mode(), FormMode::Edit);
            assert_eq!(state.snapshot, FormSnapshot::default());
        }

        #[test]
        fn edit_form_reinitialized_without_record_still_targets_mounted_id() {
            let mut state = DataSourceFormState::new(Some(&prod_record()), None);
            state.reinitialize(None, None);
            state.set_field(FormField::Name, "Prod");
            state.set_field(FormField::Host, "h");
            state.set_field(FormField::Port, "5439");
            state.set_field(FormField::Database, "d");
            state.set_field(FormField::Username, "u");

            let payload = state.build_payload().unwrap();

            assert_eq!(state.editing_id().map(DataSourceId::as_str), Some("ds-1"));
            assert_eq!(payload.id.as_ref().map(DataSourceId::as_str), Some("ds-1"));
            assert!(payload.password.is_none());
        }

        #[test]
        fn create_mode_ignores_supplied_context() {
            let state = DataSourceFormState::new(None, Some("ctx"));

            assert_eq!(state.mode(), FormMode::Create);
            assert_eq!(state.snapshot.additional_info, None);
        }
    }

    mod set_field {
        use super::*;

        #[test]
        fn stores_raw_value_without_validating() {
            let mut state = DataSourceFormState::new(None, None);
            state.set_field(FormField::Port, "abc");

            assert_eq!(state.field_value(FormField::Port), "abc");
            assert!(!state.has_errors());
        }

        #[test]
        fn additional_info_becomes_set_on_first_edit() {
            let mut state = DataSourceFormState::new(None, None);
            state.set_field(FormField::AdditionalInfo, "hint");
            assert_eq!(state.snapshot.additional_info.as_deref(), Some("hint"));
        }

        #[test]
        fn read_only_accepts_flag_text() {
            let mut state = DataSourceFormState::new(None, None);
            state.set_field(FormField::ReadOnly, "false");
            assert!(!state.snapshot.read_only);
            state.toggle_read_only();
            assert!(state.snapshot.read_only);
        }
    }

    mod validate {
        use super::*;

        #[test]
        fn validate_all_collects_every_error() {
            let mut state = DataSourceFormState::new(None, None);

            assert!(!state.validate_all());

            assert_eq!(state.validation_errors.len(), 6);
            assert_eq!(state.first_invalid_field(), Some(FormField::Name));
            assert_eq!(
                state.error_for(FormField::Password).map(ToString::to_string),
                Some("Password is required.".to_string())
            );
        }

        #[test]
        fn validate_field_clears_previous_error_once_fixed() {
            let mut state = DataSourceFormState::new(None, None);
            state.validate_field(FormField::Host);
            assert!(state.error_for(FormField::Host).is_some());

            state.set_field(FormField::Host, "h");
            assert!(state.validate_field(FormField::Host));
            assert!(state.error_for(FormField::Host).is_none());
        }

        #[test]
        fn edit_mode_accepts_blank_password() {
            let mut state = DataSourceFormState::new(Some(&prod_record()), None);
            assert!(state.validate_all());
        }
    }

    mod build_payload {
        use super::*;

        #[test]
        fn create_payload_is_normalized() {
            let mut state = filled_create_form();
            state.set_field(FormField::Host, "  cluster.example.com ");
            state.set_field(FormField::AdditionalInfo, "ctx");

            let payload = state.build_payload().unwrap();

            assert_eq!(payload.id, None);
            assert_eq!(payload.host, "cluster.example.com");
            assert_eq!(payload.port, 5439);
            assert_eq!(payload.password.as_deref(), Some("secret"));
            assert!(payload.read_only);
            assert_eq!(payload.additional_info.as_deref(), Some("ctx"));
        }

        #[test]
        fn edit_payload_with_blank_password_keeps_existing() {
            let state = DataSourceFormState::new(Some(&prod_record()), Some("ctx"));

            let payload = state.build_payload().unwrap();

            assert_eq!(payload.id.as_ref().map(DataSourceId::as_str), Some("ds-1"));
            assert!(payload.keeps_existing_password());
            assert_eq!(payload.additional_info.as_deref(), Some("ctx"));
        }

        #[test]
        fn invalid_snapshot_is_rejected() {
            let mut state = filled_create_form();
            state.set_field(FormField::Port, "abc");
            assert_eq!(state.build_payload(), Err(FieldError::NotANumber));
        }
    }

    mod cursor {
        use super::*;

        #[test]
        fn focus_moves_cursor_to_end_of_value() {
            let mut state = filled_create_form();
            state.focus(FormField::Host);
            assert_eq!(state.cursor_position, "cluster.example.com".len());
        }

        #[test]
        fn update_cursor_scrolls_viewport() {
            let mut state = DataSourceFormState::default();
            state.update_cursor(10, 4);
            assert_eq!(state.viewport_offset, 7);
            state.update_cursor(2, 4);
            assert_eq!(state.viewport_offset, 2);
        }
    }
}
