mod form;
mod helpers;
mod submission;

pub use form::reduce_form;
pub use helpers::{char_count, char_to_byte_index, insert_char_at_cursor, remove_char_before_cursor};
pub use submission::reduce_submission;
