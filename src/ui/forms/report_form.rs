//! Report create overlay rendering

use super::field_renderer::{draw_field, field_height};
use crate::state::{AppState, Form, SubmitState};
use crate::ui::components::{centered_rect, render_button, render_popup_frame, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

const FORM_WIDTH: u16 = 60;

/// Draw the "report entry" overlay
pub fn draw(frame: &mut Frame, state: &AppState) {
    let form = &state.report_form;

    let title = match state.selected_entry() {
        Some(entry) => format!("Report: {}", entry.title),
        None => "Report".to_string(),
    };

    let field_rows: u16 = (0..2)
        .filter_map(|idx| form.get_field(idx))
        .map(field_height)
        .sum();
    let area = centered_rect(frame.area(), FORM_WIDTH, field_rows + BUTTON_HEIGHT + 2);
    let inner = render_popup_frame(frame, area, &title, Color::Yellow);

    let mut constraints: Vec<Constraint> = (0..2)
        .filter_map(|idx| form.get_field(idx))
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for idx in 0..2 {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, chunks[idx], field, form.active_field() == idx);
        }
    }

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let on_buttons = form.is_buttons_row_active();
    let submitting = form.submit_state() == SubmitState::Submitting;

    render_button(
        frame,
        row[0],
        form.submit_label(),
        on_buttons && form.selected_button == 0,
        !submitting,
    );
    render_button(
        frame,
        row[1],
        "Cancel",
        on_buttons && form.selected_button == 1,
        true,
    );
}
