//! Dashboard view: stat counters and one card per release.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::view_model::{DashboardModel, ReleaseCard, Stats};

const CARD_HEIGHT: u16 = 6;

/// Render the dashboard.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_stats(f, chunks[0], state.stats(), &state.theme);

    match state.dashboard() {
        DashboardModel::Empty => render_empty(f, chunks[1], &state.theme),
        DashboardModel::Cards(cards) => render_cards(f, chunks[1], &cards, state),
    }
}

/// Render the three counters side by side.
pub fn render_stats(f: &mut Frame, area: Rect, stats: Stats, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let counters = [
        ("Total releases", stats.total, theme.primary),
        ("In progress", stats.in_progress, theme.status_progress),
        ("Released", stats.completed, theme.status_released),
    ];

    for ((label, value, color), column) in counters.into_iter().zip(columns.iter()) {
        let counter = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {label} "))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(counter, *column);
    }
}

fn render_empty(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            "No releases yet.",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "n",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to create your first release."),
        ]),
    ];
    let empty = Paragraph::new(text)
        .style(Style::default().fg(theme.text_secondary))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Releases ")
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(empty, area);
}

fn render_cards(f: &mut Frame, area: Rect, cards: &[ReleaseCard], state: &AppState) {
    let theme = &state.theme;
    let visible = usize::from((area.height / CARD_HEIGHT).max(1));
    // Keep the highlighted card on screen
    let first = state.list_cursor.saturating_sub(visible - 1);

    let constraints: Vec<Constraint> = (0..visible)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, (index, card)) in slots
        .iter()
        .zip(cards.iter().enumerate().skip(first))
    {
        render_card(f, *slot, card, index == state.list_cursor, theme);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &ReleaseCard, highlighted: bool, theme: &Theme) {
    let border = if highlighted {
        theme.accent
    } else {
        theme.text_muted
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let status_color = theme.status_color(card.status_style);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(card.artist.as_str(), Style::default().fg(theme.text_secondary)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", card.status),
                Style::default().fg(status_color),
            ),
        ])),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            card.meta_line(),
            Style::default().fg(theme.text_muted),
        )),
        rows[1],
    );

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.progress_color(card.progress))
                .bg(theme.surface),
        )
        .percent(u16::from(card.progress))
        .label(format!("{}% complete", card.progress));
    f.render_widget(gauge, rows[2]);
}
