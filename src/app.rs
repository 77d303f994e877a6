//! Application state and core logic

use crate::api::{ApiError, PagesApi};
use crate::config::TuiConfig;
use crate::state::{AppState, BrowseFocus, Form, Notification, Overlay};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct. Generic over the API client so the
/// submission flows can be exercised against a mock.
pub struct App<C: PagesApi> {
    /// Current application state
    pub state: AppState,
    /// Client for the site API
    pub api: C,
    /// User configuration (prefills, server address)
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl<C: PagesApi> App<C> {
    /// Create a new App instance
    pub fn new(api: C, config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            api,
            config,
            quit: false,
        }
    }

    /// Initial page load: fetch entries (which also primes the CSRF
    /// cookie on the client's jar) and mark the server reachable.
    pub async fn initialize(&mut self) {
        match self.api.list_entries(None).await {
            Ok(entries) => {
                self.state.entries = entries;
                self.state.server_reachable = true;
            }
            Err(err) => {
                tracing::warn!("initial load failed: {err}");
                self.state.server_reachable = false;
                self.state
                    .notify(Notification::error("Could not reach the server."));
            }
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Route a key event to the active overlay or the browse view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.overlay {
            Overlay::EntryCreate => self.handle_entry_form_key(key).await,
            Overlay::ReportCreate => self.handle_report_form_key(key).await,
            Overlay::None => match self.state.browse_focus {
                BrowseFocus::Search => self.handle_search_key(key).await,
                BrowseFocus::List => self.handle_browse_key(key),
            },
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('/') => self.state.browse_focus = BrowseFocus::Search,
            KeyCode::Char('n') => self.open_entry_overlay(),
            KeyCode::Char('r') => self.open_report_overlay(),
            _ => {}
        }
    }

    async fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.browse_focus = BrowseFocus::List,
            KeyCode::Enter => self.submit_search().await,
            KeyCode::Backspace => {
                self.state.search_query.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.search_query.push(c);
            }
            _ => {}
        }
    }

    /// Run the search, unless the trimmed query is empty: an empty
    /// query issues no request at all.
    async fn submit_search(&mut self) {
        if self.state.search_query.trim().is_empty() {
            return;
        }

        let query = self.state.search_query.clone();
        match self.api.list_entries(Some(query)).await {
            Ok(entries) => {
                self.state.entries = entries;
                self.state.selected_index = 0;
                self.state.browse_focus = BrowseFocus::List;
            }
            Err(err) => {
                tracing::warn!("search failed: {err}");
                self.state.notify(Notification::error("Search failed."));
            }
        }
    }

    fn open_entry_overlay(&mut self) {
        self.state.overlay = Overlay::EntryCreate;
        // Prefill from config; reset() cleared any previous value
        if let Some(email) = &self.config.author_email {
            if self.state.entry_form.author.value.is_empty() {
                self.state.entry_form.author.value = email.clone();
            }
        }
    }

    fn open_report_overlay(&mut self) {
        let Some(entry) = self.state.selected_entry() else {
            self.state
                .notify(Notification::error("No entry selected to report."));
            return;
        };
        self.state.report_target = Some(entry.pid.clone());
        self.state.overlay = Overlay::ReportCreate;
        if let Some(email) = &self.config.reporter_email {
            if self.state.report_form.reporter.value.is_empty() {
                self.state.report_form.reporter.value = email.clone();
            }
        }
    }

    /// Dismiss whichever overlay is open. Every form on the page is
    /// reset, regardless of what happened before the dismissal.
    pub fn dismiss_overlay(&mut self) {
        self.state.overlay = Overlay::None;
        self.state.report_target = None;
        self.state.reset_forms();
    }

    async fn handle_entry_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dismiss_overlay(),
            KeyCode::Tab => self.state.entry_form.next_field(),
            KeyCode::BackTab => self.state.entry_form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_entry().await;
            }
            KeyCode::Left | KeyCode::Right if self.state.entry_form.is_buttons_row_active() => {
                self.state.entry_form.toggle_button();
            }
            KeyCode::Enter => {
                if self.state.entry_form.is_buttons_row_active() {
                    if self.state.entry_form.selected_button == 0 {
                        self.submit_entry().await;
                    } else {
                        self.dismiss_overlay();
                    }
                } else if self.state.entry_form.active_field_is_multiline() {
                    if let Some(field) = self.state.entry_form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.state.entry_form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.entry_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.entry_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    async fn handle_report_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dismiss_overlay(),
            KeyCode::Tab => self.state.report_form.next_field(),
            KeyCode::BackTab => self.state.report_form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_report().await;
            }
            KeyCode::Left | KeyCode::Right if self.state.report_form.is_buttons_row_active() => {
                self.state.report_form.toggle_button();
            }
            KeyCode::Enter => {
                if self.state.report_form.is_buttons_row_active() {
                    if self.state.report_form.selected_button == 0 {
                        self.submit_report().await;
                    } else {
                        self.dismiss_overlay();
                    }
                } else if self.state.report_form.active_field_is_multiline() {
                    if let Some(field) = self.state.report_form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    self.state.report_form.next_field();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.report_form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.report_form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Submit the entry form. The `begin_submit` guard ensures a second
    /// submission cannot start while one is outstanding; the submit
    /// button always returns to its canonical state afterwards.
    pub async fn submit_entry(&mut self) {
        if !self.state.entry_form.begin_submit() {
            return;
        }
        if !self.state.entry_form.validate() {
            self.state.entry_form.finish_submit();
            self.state
                .notify(Notification::error("Please fix the highlighted fields."));
            return;
        }

        let draft = self.state.entry_form.draft();
        let result = self.api.create_entry(draft).await;
        self.state.entry_form.finish_submit();

        match result {
            Ok(()) => {
                self.state
                    .notify(Notification::success("Entry submitted successfully."));
                self.dismiss_overlay();
                self.refresh_entries().await;
            }
            Err(ApiError::Server) => {
                self.state.notify(Notification::error("Server error."));
            }
            Err(ApiError::Validation(errors)) => {
                self.state.entry_form.set_field_errors(&errors);
                self.state.notify(Notification::error("Submission failed."));
            }
            Err(ApiError::NotFound) => {
                self.state.notify(Notification::error("Target not found."));
            }
            Err(ApiError::Attachment(err)) => {
                self.state.entry_form.image.server_error = Some(err.to_string());
                self.state
                    .notify(Notification::error("Could not read the chosen image."));
            }
            Err(err) => self.notify_generic_failure(err),
        }
    }

    /// Submit the report form against the entry selected when the
    /// overlay was opened.
    pub async fn submit_report(&mut self) {
        let Some(page) = self.state.report_target.clone() else {
            self.state
                .notify(Notification::error("No entry selected to report."));
            return;
        };

        if !self.state.report_form.begin_submit() {
            return;
        }
        if !self.state.report_form.validate() {
            self.state.report_form.finish_submit();
            self.state
                .notify(Notification::error("Please fix the highlighted fields."));
            return;
        }

        let draft = self.state.report_form.draft(&page);
        let result = self.api.create_report(draft).await;
        self.state.report_form.finish_submit();

        match result {
            Ok(()) => {
                self.state
                    .notify(Notification::success("Report submitted successfully."));
                self.dismiss_overlay();
            }
            Err(ApiError::Server) => {
                self.state.notify(Notification::error("Server error."));
            }
            Err(ApiError::Validation(errors)) => {
                self.state.report_form.set_field_errors(&errors);
                self.state.notify(Notification::error("Submission failed."));
            }
            Err(ApiError::NotFound) => {
                self.state.notify(Notification::error(
                    "The entry you are reporting no longer exists.",
                ));
            }
            Err(err) => self.notify_generic_failure(err),
        }
    }

    /// Fall back to the response's own message when one was present
    fn notify_generic_failure(&mut self, err: ApiError) {
        let message = match err {
            ApiError::Unknown {
                message: Some(message),
            } => message,
            ApiError::Transport(err) => {
                tracing::warn!("transport failure: {err}");
                "Could not reach the server.".to_string()
            }
            _ => "Submission failed.".to_string(),
        };
        self.state.notify(Notification::error(message));
    }

    async fn refresh_entries(&mut self) {
        if let Ok(entries) = self.api.list_entries(None).await {
            self.state.entries = entries;
        }
    }
}
