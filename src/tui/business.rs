//! Business roadmap views and the consulting page.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme};
use crate::view_model::{BusinessRow, CONSULTING_POINTS};

/// Render the roadmap sections of the active business view.
pub fn render_roadmap(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let overall = state.business.overall_progress();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Business roadmap ")
                .style(Style::default().bg(theme.background)),
        )
        .gauge_style(
            Style::default()
                .fg(theme.progress_color(overall))
                .bg(theme.surface),
        )
        .percent(u16::from(overall))
        .label(format!("{overall}% overall"));
    f.render_widget(gauge, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;
    let mut row_index = 0;
    for section in state.business_sections(state.active_view) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                section.title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}%", section.progress),
                Style::default().fg(theme.progress_color(section.progress)),
            ),
        ]));

        for row in &section.rows {
            let highlighted = row_index == state.business_cursor;
            if highlighted {
                cursor_line = lines.len();
            }
            let link_cursor = highlighted.then_some(state.link_cursor);
            lines.push(row_line(row, highlighted, link_cursor, theme));
            row_index += 1;
        }
    }

    let inner_height = usize::from(chunks[1].height.saturating_sub(2));
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1));

    let roadmap = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.background)),
        )
        .scroll((scroll as u16, 0));
    f.render_widget(roadmap, chunks[1]);
}

fn row_line(
    row: &BusinessRow,
    highlighted: bool,
    link_cursor: Option<usize>,
    theme: &Theme,
) -> Line<'static> {
    let (mark, mark_color) = if row.checked {
        ("[x] ", theme.success)
    } else {
        ("[ ] ", theme.text_muted)
    };
    let label_style = if row.checked {
        Style::default().fg(theme.text_secondary)
    } else {
        Style::default().fg(theme.text)
    };

    let mut spans = vec![
        Span::styled(
            if highlighted { "▶ " } else { "  " },
            Style::default().fg(theme.accent),
        ),
        Span::styled(mark, Style::default().fg(mark_color)),
        Span::styled(row.label, label_style),
    ];

    // The focused link wraps so `O` can cycle past the end
    let focused_link = link_cursor
        .filter(|_| !row.links.is_empty())
        .map(|cursor| cursor % row.links.len());
    for (i, link) in row.links.iter().enumerate() {
        let chip_style = if focused_link == Some(i) {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.primary)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[{}]", link.label), chip_style));
    }

    let line = Line::from(spans);
    if highlighted {
        line.style(Style::default().bg(theme.highlight_bg))
    } else {
        line
    }
}

/// Render the consulting page.
pub fn render_consulting(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            "What we can work on together",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(CONSULTING_POINTS.iter().map(|point| {
        Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.accent)),
            Span::styled(*point, Style::default().fg(theme.text)),
        ])
    }));

    let page = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(page, area);
}
