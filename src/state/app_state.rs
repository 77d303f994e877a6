//! Application state definitions

use crate::state::{EntryForm, Form, Notification, ReportForm};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Which dismissible overlay is open, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    EntryCreate,
    ReportCreate,
}

/// Input focus on the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseFocus {
    #[default]
    List,
    Search,
}

/// Image attached to an entry. Natural dimensions drive the thumbnail
/// framing on the browse view.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A published entry as returned by the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub pid: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub event: String,
    pub content: String,
    #[serde(default)]
    pub image_caption: String,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub image: Option<EntryImage>,
    pub created_on: DateTime<Utc>,
}

/// Shared UI state
pub struct AppState {
    /// Entries shown on the browse view
    pub entries: Vec<Entry>,
    /// Selected index into `entries`
    pub selected_index: usize,
    /// Whether the initial load reached the server
    pub server_reachable: bool,
    pub overlay: Overlay,
    pub browse_focus: BrowseFocus,
    pub search_query: String,
    /// pid of the entry the report overlay was opened for
    pub report_target: Option<String>,
    /// The single notification slot; writing replaces any prior toast
    pub notification: Option<Notification>,
    // Forms persist across submissions; they are reset, never rebuilt
    pub entry_form: EntryForm,
    pub report_form: ReportForm,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selected_index: 0,
            server_reachable: false,
            overlay: Overlay::default(),
            browse_focus: BrowseFocus::default(),
            search_query: String::new(),
            report_target: None,
            notification: None,
            entry_form: EntryForm::new(),
            report_form: ReportForm::new(),
        }
    }
}

impl AppState {
    /// Show a toast, replacing whatever was visible before
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Drop the toast once its display window has passed
    pub fn expire_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired()) {
            self.notification = None;
        }
    }

    /// The entry the cursor is on
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.entries.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Reset every form on the page to its canonical state. Runs on any
    /// overlay dismissal, regardless of prior submission outcome.
    pub fn reset_forms(&mut self) {
        self.entry_form.reset();
        self.report_form.reset();
    }
}
