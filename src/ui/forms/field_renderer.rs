//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies: borders + content, plus one for the inline
/// error line when one is revealed
pub fn field_height(field: &FormField) -> u16 {
    let base = if field.is_multiline { 5 } else { 3 };
    if field.error_message().is_some() {
        base + 1
    } else {
        base
    }
}

/// Draw a form field, including its inline error line when present
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let has_error = field.error_message().is_some();

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let mut lines: Vec<Line> = if field.is_multiline {
        display_value
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect()
    } else {
        Vec::new()
    };

    if field.is_multiline {
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
    } else {
        let placeholder = if display_value.is_empty() && !is_active {
            placeholder_for(field)
        } else {
            ""
        };
        lines.push(Line::from(vec![
            Span::styled(display_value.to_string(), value_style),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]));
    }

    if let Some(message) = field.error_message() {
        lines.push(Line::from(Span::styled(
            format!("▲ {message}"),
            Style::default().fg(Color::Red),
        )));
    }

    let title = if field.kind == FieldKind::File {
        match field.chosen_file_name() {
            Some(name) => format!(" {} — {} ", field.label, name),
            None => format!(" {} ", field.label),
        }
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn placeholder_for(field: &FormField) -> &'static str {
    match field.kind {
        FieldKind::File => "(path to file)",
        FieldKind::Text => "(empty)",
    }
}
