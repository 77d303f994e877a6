//! Browse view: entry list and detail pane

use crate::state::{AppState, BrowseFocus, Entry};
use crate::ui::thumbnail::ThumbnailFit;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the entry list and the detail pane for the selection
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_list(frame, chunks[0], state);
    draw_detail(frame, chunks[1], state);
}

fn draw_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let is_focused = state.browse_focus == BrowseFocus::List;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let items: Vec<ListItem> = state
        .entries
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(entry.title.clone())];
            if !entry.event.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", entry.event),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(" Entries ({}) ", state.entries.len());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !state.entries.is_empty() {
        list_state.select(Some(state.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(entry) = state.selected_entry() else {
        let empty = Paragraph::new("No entries. Press n to submit one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    };

    let has_image = entry.image.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_image {
            vec![
                Constraint::Length(2), // title + subtitle
                Constraint::Length(8), // thumbnail frame
                Constraint::Min(0),    // content
            ]
        } else {
            vec![Constraint::Length(2), Constraint::Min(0)]
        })
        .split(inner);

    let mut header = vec![Line::from(Span::styled(
        entry.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !entry.subtitle.is_empty() {
        header.push(Line::from(Span::styled(
            entry.subtitle.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    frame.render_widget(Paragraph::new(header), chunks[0]);

    if has_image {
        draw_thumbnail(frame, chunks[1], entry);
    }

    let content_area = if has_image { chunks[2] } else { chunks[1] };
    let mut content = vec![Line::from(entry.content.clone())];
    if !entry.reference.is_empty() {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("Reference: {}", entry.reference),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }),
        content_area,
    );
}

/// Placeholder frame for the entry image. The fit is recomputed from
/// the current frame size on every draw, so resizes just work.
fn draw_thumbnail(frame: &mut Frame, area: Rect, entry: &Entry) {
    let Some(image) = &entry.image else {
        return;
    };

    // Terminal cells are roughly twice as tall as wide
    let frame_w = u32::from(area.width);
    let frame_h = u32::from(area.height) * 2;
    let fit = ThumbnailFit::compute(image.width, image.height, frame_w, frame_h);

    let caption = if entry.image_caption.is_empty() {
        image.url.clone()
    } else {
        entry.image_caption.clone()
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("🖼 {}x{} [{}]", image.width, image.height, fit.label()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(caption, Style::default().fg(Color::Gray))),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(widget, area);
}
