/// Whether the form creates a new data source or edits an existing one.
/// Fixed when the form is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit,
}

impl FormMode {
    pub fn from_existing<T>(existing: Option<&T>) -> Self {
        if existing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    pub fn is_edit(self) -> bool {
        self == FormMode::Edit
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => "New Redshift data source",
            FormMode::Edit => "Edit Redshift data source",
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Edit => "Edit",
        }
    }
}
