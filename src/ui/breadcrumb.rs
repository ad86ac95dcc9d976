// Breadcrumb rendering for the navigation trail.
// Shows the current drill-down path with the active badge style on the right.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::BadgeStyle;
use crate::state::BreadcrumbNode;

use super::theme::Theme;

/// Render the breadcrumb trail with the active style indicator.
pub fn draw_breadcrumb(
    frame: &mut Frame,
    theme: &Theme,
    breadcrumbs: &[BreadcrumbNode],
    style: BadgeStyle,
    area: Rect,
) {
    let mut spans = Vec::new();

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(theme.dim)));
        }

        let span_style = if i == breadcrumbs.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg)
        };

        spans.push(Span::styled(node.label.clone(), span_style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));

    let breadcrumb_para = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(breadcrumb_para, area);

    // Active style on the right
    let style_line = Line::from(vec![
        Span::styled("Style: ", Style::default().fg(theme.dim)),
        Span::styled(
            style.as_str(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (←/→)", Style::default().fg(theme.dim)),
    ]);
    let style_para = Paragraph::new(style_line).alignment(Alignment::Right);
    frame.render_widget(
        style_para,
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );
}
