// UI module for rendering the TUI.
// Contains widgets for the header, breadcrumbs, lists, and snippet modal.

mod breadcrumb;
mod list;
mod snippet;
pub mod theme;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::state::ViewLevel;

use theme::Theme;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let theme = app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, &theme, chunks[0]);

    let breadcrumbs = app.browse.nav.breadcrumbs();
    breadcrumb::draw_breadcrumb(frame, &theme, &breadcrumbs, app.browse.style, chunks[1]);

    draw_content(frame, app, &theme, chunks[2]);

    draw_status_bar(frame, app, &theme, chunks[3]);

    // Snippet modal (rendered last, on top of everything)
    if let Some(modal) = &app.snippet {
        snippet::draw_snippet_modal(frame, &theme, modal);
    }
}

/// Draw the header bar.
fn draw_header(frame: &mut Frame, theme: &Theme, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " badgedex ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("a browsable index of Devin's Badges", Style::default().fg(theme.dim)),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(header, area);
}

/// Draw the main content area based on the current view level.
fn draw_content(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    match app.browse.current_level().clone() {
        ViewLevel::Categories => {
            list::render_categories_list(frame, theme, &mut app.browse.categories, area);
        }
        ViewLevel::Files { .. } => {
            let title = app.browse.current_level().title();
            list::render_files_list(frame, theme, &mut app.browse.files, &title, area);
        }
    }
}

/// Draw the status bar with contextual key hints.
fn draw_status_bar(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let hints: &[(&str, &str)] = match app.browse.current_level() {
        ViewLevel::Categories => &[
            ("↑↓", "move"),
            ("Enter", "open"),
            ("←→", "style"),
            ("r", "refresh"),
            ("t", "theme"),
            ("q", "quit"),
        ],
        ViewLevel::Files { .. } => &[
            ("↑↓", "move"),
            ("Enter", "snippet"),
            ("Esc", "back"),
            ("←→", "style"),
            ("t", "theme"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(" {} ", action),
            Style::default().fg(theme.dim),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
