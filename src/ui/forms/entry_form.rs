//! Entry create overlay rendering

use super::field_renderer::{draw_field, field_height};
use crate::state::{AppState, Form, SubmitState};
use crate::ui::components::{centered_rect, render_button, render_popup_frame, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};

const FORM_WIDTH: u16 = 72;

/// Draw the "create entry" overlay
pub fn draw(frame: &mut Frame, state: &AppState) {
    let form = &state.entry_form;

    let mut constraints: Vec<Constraint> = (0..8)
        .filter_map(|idx| form.get_field(idx))
        .map(|field| Constraint::Length(field_height(field)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let content_height: u16 = constraints
        .iter()
        .map(|c| match c {
            Constraint::Length(n) => *n,
            _ => 0,
        })
        .sum();

    let area = centered_rect(frame.area(), FORM_WIDTH, content_height + 2);
    let inner = render_popup_frame(frame, area, "New entry", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for idx in 0..8 {
        if let Some(field) = form.get_field(idx) {
            draw_field(frame, chunks[idx], field, form.active_field() == idx);
        }
    }

    draw_buttons(frame, chunks[8], state);
}

fn draw_buttons(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let form = &state.entry_form;
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

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
