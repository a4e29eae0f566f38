mod key_chip;
mod spinner;

pub use key_chip::{key_chip, key_text};
pub use spinner::spinner_char;
