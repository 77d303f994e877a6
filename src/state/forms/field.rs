//! Form field value objects

/// Declarative constraint attached to a field, checked before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Must be non-empty after trimming
    Required,
    /// Must be a syntactically plausible email address; empty allowed
    Email,
    /// Like Email but must also be non-empty
    RequiredEmail,
    /// Anything goes, including empty
    Optional,
}

/// Kind of widget the field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Local path to the file to attach
    File,
}

/// Represents a single form field with its configuration, value, and
/// any server-reported validation message (the inline "tooltip")
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub constraint: Constraint,
    pub is_multiline: bool,
    /// Message from a 400 response, shown inline under the field
    pub server_error: Option<String>,
    /// Set when client-side validation rejected the current value
    pub invalid: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, constraint: Constraint, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
            constraint,
            is_multiline,
            server_error: None,
            invalid: false,
        }
    }

    /// Create a new file-picker field
    pub fn file(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::File,
            constraint: Constraint::Optional,
            is_multiline: false,
            server_error: None,
            invalid: false,
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Reset the field to its initial state
    pub fn reset(&mut self) {
        self.value.clear();
        self.server_error = None;
        self.invalid = false;
    }

    /// Check the field value against its constraint, recording the result
    pub fn check(&mut self) -> bool {
        self.invalid = !self.is_satisfied();
        !self.invalid
    }

    fn is_satisfied(&self) -> bool {
        let trimmed = self.value.trim();
        match self.constraint {
            Constraint::Required => !trimmed.is_empty(),
            Constraint::Optional => true,
            Constraint::Email => trimmed.is_empty() || looks_like_email(trimmed),
            Constraint::RequiredEmail => looks_like_email(trimmed),
        }
    }

    /// Message to reveal inline under the field, if any. Server-reported
    /// messages win over client-side constraint failures.
    pub fn error_message(&self) -> Option<&str> {
        if let Some(msg) = &self.server_error {
            return Some(msg);
        }
        if self.invalid {
            return Some(match self.constraint {
                Constraint::Required => "This field is required.",
                Constraint::Email | Constraint::RequiredEmail => "Enter a valid email address.",
                Constraint::Optional => "Invalid value.",
            });
        }
        None
    }

    /// Base name of the chosen file, for display next to the picker
    pub fn chosen_file_name(&self) -> Option<&str> {
        if self.kind != FieldKind::File || self.value.is_empty() {
            return None;
        }
        // Accept either separator, like the original picker label did
        self.value
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        match self.kind {
            FieldKind::Text => &self.value,
            FieldKind::File => self.chosen_file_name().unwrap_or(""),
        }
    }
}

/// Same bar as browser `type=email` constraint validation: one '@' with
/// something on both sides and no whitespace
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace_only() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.value = "   ".to_string();
        assert!(!field.check());
        assert!(field.invalid);
    }

    #[test]
    fn test_required_accepts_value() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.value = "hello".to_string();
        assert!(field.check());
        assert!(!field.invalid);
    }

    #[test]
    fn test_optional_email_accepts_empty() {
        let mut field = FormField::text("author", "Author email", Constraint::Email, false);
        assert!(field.check());
    }

    #[test]
    fn test_optional_email_rejects_malformed() {
        let mut field = FormField::text("author", "Author email", Constraint::Email, false);
        field.value = "not-an-email".to_string();
        assert!(!field.check());
    }

    #[test]
    fn test_required_email_rejects_empty() {
        let mut field =
            FormField::text("reporter", "Reporter email", Constraint::RequiredEmail, false);
        assert!(!field.check());
    }

    #[test]
    fn test_required_email_accepts_plausible_address() {
        let mut field =
            FormField::text("reporter", "Reporter email", Constraint::RequiredEmail, false);
        field.value = "someone@example.org".to_string();
        assert!(field.check());
    }

    #[test]
    fn test_email_rejects_missing_sides() {
        assert!(!looks_like_email("@example.org"));
        assert!(!looks_like_email("someone@"));
        assert!(!looks_like_email("some one@example.org"));
    }

    #[test]
    fn test_chosen_file_name_strips_directories() {
        let mut field = FormField::file("image", "Image");
        field.value = "/home/user/photos/cat.jpg".to_string();
        assert_eq!(field.chosen_file_name(), Some("cat.jpg"));

        field.value = r"C:\photos\cat.jpg".to_string();
        assert_eq!(field.chosen_file_name(), Some("cat.jpg"));
    }

    #[test]
    fn test_chosen_file_name_empty_when_unset() {
        let field = FormField::file("image", "Image");
        assert_eq!(field.chosen_file_name(), None);
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_reset_clears_value_and_errors() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.value = "x".to_string();
        field.server_error = Some("taken".to_string());
        field.invalid = true;
        field.reset();
        assert!(field.value.is_empty());
        assert!(field.server_error.is_none());
        assert!(!field.invalid);
    }

    #[test]
    fn test_error_message_prefers_server_error() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.invalid = true;
        assert_eq!(field.error_message(), Some("This field is required."));
        field.server_error = Some("Title already exists.".to_string());
        assert_eq!(field.error_message(), Some("Title already exists."));
    }

    #[test]
    fn test_error_message_absent_when_valid() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.value = "ok".to_string();
        field.check();
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_push_pop_char() {
        let mut field = FormField::text("title", "Title", Constraint::Required, false);
        field.push_char('h');
        field.push_char('i');
        assert_eq!(field.value, "hi");
        field.pop_char();
        assert_eq!(field.value, "h");
    }
}
