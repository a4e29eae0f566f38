pub mod action;
pub mod effect;
pub mod effect_runner;
pub mod exit_report;
pub mod field_schema;
pub mod form_field;
pub mod form_mode;
pub mod form_state;
pub mod message_state;
pub mod navigation;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod state;
pub mod submission;
