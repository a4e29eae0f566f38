pub mod atoms;
pub mod data_source_form;
pub mod molecules;
pub mod overlay;
pub mod status_message;
