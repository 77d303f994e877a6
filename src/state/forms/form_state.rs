//! Form state management and form structs

use super::field::{Constraint, FormField};
use std::collections::HashMap;
use std::path::PathBuf;

/// Submission lifecycle for a form's submit button. `Submitting` is the
/// re-entry guard: a second submission cannot start until the first
/// outcome has been observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Editable,
    Submitting,
}

/// Canonical submit-button label
pub const SUBMIT_LABEL: &str = "Submit";
/// Label shown while a submission is outstanding
pub const SUBMITTING_LABEL: &str = "⠋ Sending…";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;

    fn active_field_is_multiline(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(|field| field.is_multiline)
    }

    fn submit_state(&self) -> SubmitState;
    fn set_submit_state(&mut self, state: SubmitState);

    /// Whether client-side validation has run since the last reset
    fn was_validated(&self) -> bool;
    fn set_was_validated(&mut self, validated: bool);

    /// Check every field against its constraint. Marks the form
    /// validated and returns whether submission may proceed.
    fn validate(&mut self) -> bool {
        self.set_was_validated(true);
        let mut ok = true;
        for field in self.fields_mut() {
            ok &= field.check();
        }
        ok
    }

    /// Start a submission. Returns false (and does nothing) when one is
    /// already outstanding.
    fn begin_submit(&mut self) -> bool {
        if self.submit_state() == SubmitState::Submitting {
            return false;
        }
        self.set_submit_state(SubmitState::Submitting);
        true
    }

    /// Observe the outcome: the button returns to its canonical enabled
    /// state whatever happened.
    fn finish_submit(&mut self) {
        self.set_submit_state(SubmitState::Editable);
    }

    /// Current submit-button label
    fn submit_label(&self) -> &'static str {
        match self.submit_state() {
            SubmitState::Editable => SUBMIT_LABEL,
            SubmitState::Submitting => SUBMITTING_LABEL,
        }
    }

    /// Reset to initial values: field contents, validity markers,
    /// server errors, and the submit button
    fn reset(&mut self) {
        for field in self.fields_mut() {
            field.reset();
        }
        self.set_was_validated(false);
        self.set_submit_state(SubmitState::Editable);
        self.set_active_field(0);
    }

    /// Reveal per-field messages from a 400 response. Unknown field
    /// names are ignored; no other field changes.
    fn set_field_errors(&mut self, errors: &HashMap<String, String>) {
        for field in self.fields_mut() {
            if let Some(msg) = errors.get(&field.name) {
                field.server_error = Some(msg.clone());
            }
        }
    }
}

/// Payload for the create-entry endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub subtitle: String,
    pub event: String,
    pub content: String,
    pub image_caption: String,
    pub reference: String,
    pub author: String,
    pub image: Option<PathBuf>,
}

/// Payload for the create-report endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDraft {
    pub body: String,
    pub reporter: String,
    /// pid of the entry being reported
    pub page: String,
}

// Entry create form. Field set mirrors the create-entry endpoint:
// title and content are required, author is an optional email, and a
// single optional image file may be attached.
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub title: FormField,
    pub subtitle: FormField,
    pub event: FormField,
    pub content: FormField,
    pub image_caption: FormField,
    pub reference: FormField,
    pub author: FormField,
    pub image: FormField,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Cancel)
    pub selected_button: usize,
    submit_state: SubmitState,
    was_validated: bool,
}

impl EntryForm {
    pub fn new() -> Self {
        Self {
            title: FormField::text("title", "Title", Constraint::Required, false),
            subtitle: FormField::text("subtitle", "Subtitle", Constraint::Optional, false),
            event: FormField::text("event", "Event", Constraint::Optional, false),
            content: FormField::text("content", "Content", Constraint::Required, true),
            image_caption: FormField::text(
                "image_caption",
                "Image caption",
                Constraint::Optional,
                false,
            ),
            reference: FormField::text("reference", "Reference", Constraint::Optional, false),
            author: FormField::text("author", "Author email", Constraint::Email, false),
            image: FormField::file("image", "Image"),
            active_field_index: 0,
            selected_button: 0,
            submit_state: SubmitState::Editable,
            was_validated: false,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 8
    }

    /// Toggle between Submit and Cancel
    pub fn toggle_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Snapshot the field values for submission
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.value.clone(),
            subtitle: self.subtitle.value.clone(),
            event: self.event.value.clone(),
            content: self.content.value.clone(),
            image_caption: self.image_caption.value.clone(),
            reference: self.reference.value.clone(),
            author: self.author.value.clone(),
            image: if self.image.value.is_empty() {
                None
            } else {
                Some(PathBuf::from(&self.image.value))
            },
        }
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for EntryForm {
    fn field_count(&self) -> usize {
        9 // eight fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(8);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.title),
            1 => Some(&mut self.subtitle),
            2 => Some(&mut self.event),
            3 => Some(&mut self.content),
            4 => Some(&mut self.image_caption),
            5 => Some(&mut self.reference),
            6 => Some(&mut self.author),
            7 => Some(&mut self.image),
            // Index 8 is the buttons row
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.title),
            1 => Some(&self.subtitle),
            2 => Some(&self.event),
            3 => Some(&self.content),
            4 => Some(&self.image_caption),
            5 => Some(&self.reference),
            6 => Some(&self.author),
            7 => Some(&self.image),
            _ => None,
        }
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![
            &mut self.title,
            &mut self.subtitle,
            &mut self.event,
            &mut self.content,
            &mut self.image_caption,
            &mut self.reference,
            &mut self.author,
            &mut self.image,
        ]
    }
    fn submit_state(&self) -> SubmitState {
        self.submit_state
    }
    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_state = state;
    }
    fn was_validated(&self) -> bool {
        self.was_validated
    }
    fn set_was_validated(&mut self, validated: bool) {
        self.was_validated = validated;
    }
}

// Report create form. The reported entry's pid is supplied by the
// browse selection, not typed by the user.
#[derive(Debug, Clone)]
pub struct ReportForm {
    pub body: FormField,
    pub reporter: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
    submit_state: SubmitState,
    was_validated: bool,
}

impl ReportForm {
    pub fn new() -> Self {
        Self {
            body: FormField::text("body", "What is wrong?", Constraint::Required, true),
            reporter: FormField::text(
                "reporter",
                "Your email",
                Constraint::RequiredEmail,
                false,
            ),
            active_field_index: 0,
            selected_button: 0,
            submit_state: SubmitState::Editable,
            was_validated: false,
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 2
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Snapshot the field values for submission against `page`
    pub fn draft(&self, page: &str) -> ReportDraft {
        ReportDraft {
            body: self.body.value.clone(),
            reporter: self.reporter.value.clone(),
            page: page.to_string(),
        }
    }
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ReportForm {
    fn field_count(&self) -> usize {
        3 // body, reporter, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.body),
            1 => Some(&mut self.reporter),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.body),
            1 => Some(&self.reporter),
            _ => None,
        }
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.body, &mut self.reporter]
    }
    fn submit_state(&self) -> SubmitState {
        self.submit_state
    }
    fn set_submit_state(&mut self, state: SubmitState) {
        self.submit_state = state;
    }
    fn was_validated(&self) -> bool {
        self.was_validated
    }
    fn set_was_validated(&mut self, validated: bool) {
        self.was_validated = validated;
    }
}
