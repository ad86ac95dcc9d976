// Snippet modal rendering.
// Centered dialog with Markdown/HTML tabs and the embed snippet to copy.

use ratatui::{prelude::*, widgets::*};

use crate::app::{SnippetModal, SnippetTab};

use super::theme::Theme;

/// Draw the copy-snippet modal on top of the current view.
pub fn draw_snippet_modal(frame: &mut Frame, theme: &Theme, modal: &SnippetModal) {
    let area = frame.area();

    // Create centered modal
    let modal_width = area.width.min(72);
    let modal_height = 11;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.title))
        .title(format!(" Copy Snippet: {} ", modal.file.label));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    // Split modal into sections
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tab strip
            Constraint::Min(1),    // Snippet body
            Constraint::Length(1), // Per-format note
            Constraint::Length(1), // Instructions
        ])
        .split(inner);

    // Tab strip
    let titles: Vec<Line> = SnippetTab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == modal.tab {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            Line::from(Span::styled(tab.title(), style))
        })
        .collect();

    let selected = SnippetTab::ALL
        .iter()
        .position(|t| *t == modal.tab)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        )
        .select(selected)
        .divider(Span::styled(" │ ", Style::default().fg(theme.dim)));
    frame.render_widget(tabs_widget, chunks[0]);

    // Snippet body
    let snippet = Paragraph::new(modal.snippet())
        .style(Style::default().fg(theme.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(snippet, chunks[1]);

    // Per-format note
    let note = Paragraph::new(modal.tab.note()).style(Style::default().fg(theme.dim));
    frame.render_widget(note, chunks[2]);

    // Instructions
    let instructions = if modal.copied {
        Line::from(Span::styled(
            " Copied to clipboard! ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(theme.accent)),
            Span::styled(" = Copy  ", Style::default().fg(theme.dim)),
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::styled(" = Format  ", Style::default().fg(theme.dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" = Close ", Style::default().fg(theme.dim)),
        ])
    };

    let instructions_widget = Paragraph::new(instructions).alignment(Alignment::Center);
    frame.render_widget(instructions_widget, chunks[3]);
}
