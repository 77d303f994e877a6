//! Toast rendering for the single notification slot

use super::popup::wrap_text;
use crate::state::{Notification, NotificationKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 40;

/// Draw the notification in the top-right corner, above everything else
pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let inner_width = width.saturating_sub(4) as usize;

    let lines: Vec<Line> = wrap_text(&notification.message, inner_width.max(1))
        .into_iter()
        .map(Line::from)
        .collect();
    let height = (lines.len() as u16 + 2).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    let (title, color) = match notification.kind {
        NotificationKind::Success => (" ✓ ", Color::Green),
        NotificationKind::Error => (" ✗ ", Color::Red),
    };

    frame.render_widget(Clear, toast_area);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(widget, toast_area);
}
