#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Host,
    Port,
    Database,
    Username,
    Password,
    ReadOnly,
    Notes,
    AdditionalInfo,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::ReadOnly,
            FormField::Host,
            FormField::Port,
            FormField::Database,
            FormField::Username,
            FormField::Password,
            FormField::Notes,
            FormField::AdditionalInfo,
        ]
    }

    /// Tab order follows the on-screen layout.
    pub fn next(&self) -> Option<FormField> {
        let all = Self::all();
        let idx = self.position();
        all.get(idx + 1).copied()
    }

    pub fn prev(&self) -> Option<FormField> {
        let idx = self.position();
        idx.checked_sub(1).map(|i| Self::all()[i])
    }

    fn position(&self) -> usize {
        Self::all()
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Display name",
            FormField::Host => "Host",
            FormField::Port => "Port",
            FormField::Database => "Database name",
            FormField::Username => "Username",
            FormField::Password => "Password",
            FormField::ReadOnly => "Read-only connection",
            FormField::Notes => "Notes",
            FormField::AdditionalInfo => "AI Additional Context",
        }
    }

    /// Noun used in validation messages ("Database is required.").
    pub fn subject(&self) -> &'static str {
        match self {
            FormField::Database => "Database",
            other => other.label(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "My Redshift database",
            FormField::Host => "example.com",
            FormField::Port => "5439",
            FormField::Database => "db",
            FormField::Username => "postgres",
            FormField::AdditionalInfo => {
                "Enter additional context for the AI assistant (examples, descriptions, etc.)"
            }
            FormField::Password | FormField::ReadOnly | FormField::Notes => "",
        }
    }

    pub fn is_text_input(&self) -> bool {
        !matches!(self, FormField::ReadOnly)
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, FormField::Password)
    }
}
