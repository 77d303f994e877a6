//! Search input bar

use crate::state::{AppState, BrowseFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the search bar at the top of the browse view
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.browse_focus == BrowseFocus::Search;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let input_text = if state.search_query.is_empty() && !is_focused {
        Span::styled("Press / to search…", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.search_query.as_str(), Style::default().fg(Color::White))
    };

    let input = Paragraph::new(Line::from(input_text)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(input, area);

    if is_focused {
        frame.set_cursor_position((
            area.x + 1 + state.search_query.len() as u16,
            area.y + 1,
        ));
    }
}
