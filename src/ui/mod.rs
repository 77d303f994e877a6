//! UI module for rendering the TUI

mod components;
mod entries;
mod forms;
mod layout;
mod search;
mod thumbnail;

use crate::state::{AppState, Overlay};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let (search_area, content_area) = layout::create_layout(area);

    search::draw(frame, search_area, state);
    entries::draw(frame, content_area, state);
    layout::draw_status_bar(frame, state);

    // Overlays render above the page content
    match state.overlay {
        Overlay::None => {}
        Overlay::EntryCreate => forms::draw_entry_create(frame, state),
        Overlay::ReportCreate => forms::draw_report_create(frame, state),
    }

    // The notification renders above everything, one at most
    if let Some(notification) = &state.notification {
        components::render_toast(frame, notification);
    }
}
