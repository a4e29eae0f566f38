//! Declarative validation rules for the data source form.
//!
//! Every field maps to a [`FieldRule`] and a single generic validator
//! evaluates it. Mode is an explicit parameter so the rules stay pure.

use thiserror::Error;

use crate::app::form_field::FormField;
use crate::app::form_mode::FormMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{subject} is required.")]
    Required { subject: &'static str },
    #[error("Port must be a number.")]
    NotANumber,
    #[error("Port must be between 1 and 65535.")]
    PortOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requiredness {
    Always,
    CreateOnly,
    Never,
}

impl Requiredness {
    pub fn applies(self, mode: FormMode) -> bool {
        match self {
            Requiredness::Always => true,
            Requiredness::CreateOnly => mode == FormMode::Create,
            Requiredness::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueParser {
    Text,
    Port,
    Flag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub required: Requiredness,
    pub parser: ValueParser,
}

impl FieldRule {
    const fn new(required: Requiredness, parser: ValueParser) -> Self {
        Self { required, parser }
    }
}

pub fn rule_for(field: FormField) -> FieldRule {
    use Requiredness::{Always, CreateOnly, Never};
    use ValueParser::{Flag, Port, Text};

    match field {
        FormField::Name
        | FormField::Host
        | FormField::Database
        | FormField::Username => FieldRule::new(Always, Text),
        FormField::Port => FieldRule::new(Always, Port),
        FormField::Password => FieldRule::new(CreateOnly, Text),
        FormField::ReadOnly => FieldRule::new(Never, Flag),
        FormField::Notes | FormField::AdditionalInfo => FieldRule::new(Never, Text),
    }
}

pub fn is_required(field: FormField, mode: FormMode) -> bool {
    rule_for(field).required.applies(mode)
}

/// Requiredness is checked before parsing, so a blank port reports
/// "Port is required." rather than a parse error.
pub fn validate(field: FormField, raw: &str, mode: FormMode) -> Result<(), FieldError> {
    let rule = rule_for(field);
    let blank = raw.trim().is_empty();

    if blank {
        return if rule.required.applies(mode) {
            Err(FieldError::Required {
                subject: field.subject(),
            })
        } else {
            Ok(())
        };
    }

    match rule.parser {
        ValueParser::Text | ValueParser::Flag => Ok(()),
        ValueParser::Port => parse_port(raw).map(|_| ()),
    }
}

pub fn parse_port(raw: &str) -> Result<u16, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required {
            subject: FormField::Port.subject(),
        });
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::NotANumber);
    }
    match trimmed.parse::<u16>() {
        Ok(0) | Err(_) => Err(FieldError::PortOutOfRange),
        Ok(port) => Ok(port),
    }
}
