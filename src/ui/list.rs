// List rendering for categories and badge files.
// Provides styled list views with loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::{BadgeFile, Category};
use crate::state::{LoadingState, SelectableList};

use super::theme::Theme;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, theme: &Theme, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.accent));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, theme: &Theme, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.error));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, theme: &Theme, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dim));
    frame.render_widget(text, area);
}

fn bordered_list<'a>(title: &'a str, items: Vec<ListItem<'a>>, theme: &Theme) -> List<'a> {
    List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(format!(" {} ", title)),
        )
        .highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
}

/// Render the category list.
pub fn render_categories_list(
    frame: &mut Frame,
    theme: &Theme,
    list: &mut SelectableList<Category>,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, theme, area, "Nothing loaded yet"),
        LoadingState::Loading => render_loading(frame, theme, area, "Fetching catalog"),
        LoadingState::Error(e) => render_error(frame, theme, area, e),
        LoadingState::Loaded(categories) => {
            if categories.is_empty() {
                render_empty(frame, theme, area, "No badge categories found");
            } else {
                let items: Vec<ListItem> = categories
                    .iter()
                    .map(|category| {
                        ListItem::new(Line::from(vec![
                            Span::styled(
                                category.label.clone(),
                                Style::default().fg(theme.fg),
                            ),
                            Span::styled(
                                format!("  ({} badges)", category.files.len()),
                                Style::default().fg(theme.dim),
                            ),
                        ]))
                    })
                    .collect();

                let widget = bordered_list("Categories", items, theme);
                frame.render_stateful_widget(widget, area, &mut list.list_state);
            }
        }
    }
}

/// Render the badge file list for the opened category.
pub fn render_files_list(
    frame: &mut Frame,
    theme: &Theme,
    list: &mut SelectableList<BadgeFile>,
    title: &str,
    area: Rect,
) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, theme, area, "Nothing loaded yet"),
        LoadingState::Loading => render_loading(frame, theme, area, "Fetching badges"),
        LoadingState::Error(e) => render_error(frame, theme, area, e),
        LoadingState::Loaded(files) => {
            if files.is_empty() {
                render_empty(frame, theme, area, "No badges in this category");
            } else {
                let items: Vec<ListItem> = files
                    .iter()
                    .map(|file| {
                        ListItem::new(Line::from(vec![
                            Span::styled(file.label.clone(), Style::default().fg(theme.fg)),
                            Span::styled(
                                format!("  {}", file.value),
                                Style::default().fg(theme.dim),
                            ),
                        ]))
                    })
                    .collect();

                let widget = bordered_list(title, items, theme);
                frame.render_stateful_widget(widget, area, &mut list.list_state);
            }
        }
    }
}
