use crate::domain::ExistingDataSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Form editing
    FormInput(char),
    FormBackspace,
    FormCursorLeft,
    FormCursorRight,
    FormNextField,
    FormPrevField,
    FormToggleReadOnly,

    // Submission
    Submit,
    SubmissionSucceeded,
    SubmissionFailed(String),
    Cancel,

    // Existing record (re)load
    ReloadExisting,
    ExistingLoaded(Option<Box<ExistingDataSource>>),
    ExistingLoadFailed(String),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
