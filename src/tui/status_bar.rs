//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::{
    CONTEXT_BUSINESS, CONTEXT_DETAILS, CONTEXT_EDIT, CONTEXT_FORM, CONTEXT_LIST,
};

/// Hints shown for a shortcut context, most important first.
#[must_use]
pub fn context_hints(context: &str) -> &'static [(&'static str, &'static str)] {
    match context {
        CONTEXT_LIST => &[
            ("↑↓", "Move"),
            ("Enter", "Open"),
            ("n", "New release"),
            ("Tab", "Next view"),
            ("q", "Quit"),
        ],
        CONTEXT_DETAILS => &[
            ("↑↓", "Move"),
            ("Enter", "Edit/Toggle"),
            ("←→", "Change"),
            ("[ ]", "Tab"),
            ("Esc", "Back"),
        ],
        CONTEXT_BUSINESS => &[
            ("↑↓", "Move"),
            ("Space", "Toggle"),
            ("o", "Open link"),
            ("O", "Next link"),
            ("y", "Copy link"),
        ],
        CONTEXT_FORM => &[
            ("Tab", "Next field"),
            ("←→", "Change"),
            ("Enter", "Create"),
            ("Esc", "Cancel"),
        ],
        CONTEXT_EDIT => &[("Enter", "Done"), ("Esc", "Revert")],
        _ => &[("1-6", "Views"), ("n", "New release"), ("q", "Quit")],
    }
}

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut status_text: Vec<Line> = Vec::new();

        // First line: error, status message, or the current business progress
        if let Some(error) = &state.error_message {
            status_text.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error),
            ]));
        } else if !state.status_message.is_empty() {
            let line = if let Some(color) = state.status_color_override {
                Line::from(vec![Span::styled(
                    state.status_message.as_str(),
                    Style::default().fg(color),
                )])
            } else {
                Line::from(state.status_message.as_str())
            };
            status_text.push(line);
        } else {
            status_text.push(Self::progress_line(state, theme));
        }

        if state.config.ui.show_hints {
            status_text.push(Self::hints_line(state.input_context(), theme));
        } else {
            status_text.push(Line::from(""));
        }

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn progress_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let stats = state.stats();
        let business = state.business.overall_progress();
        Line::from(vec![
            Span::styled("Releases: ", Style::default().fg(theme.primary)),
            Span::raw(format!(
                "{} total, {} in progress, {} released",
                stats.total, stats.in_progress, stats.completed
            )),
            Span::styled("  Business: ", Style::default().fg(theme.primary)),
            Span::styled(
                format!("{business}%"),
                Style::default().fg(theme.progress_color(business)),
            ),
        ])
    }

    fn hints_line(context: &str, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in context_hints(context).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
