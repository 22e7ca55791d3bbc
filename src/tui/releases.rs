//! Releases view: the releases table and the details panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

use super::{AppState, DetailField, Focus, Theme};
use crate::view_model::{ChecklistTab, DetailsView, StatusStyle};

/// Render the releases table, plus the details panel when a release is selected.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    match state.details_view() {
        Some(details) => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(area);
            render_table(f, columns[0], state);
            render_details(f, columns[1], &details, state);
        }
        None => render_table(f, area, state),
    }
}

fn render_table(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::List || state.details_view().is_none();

    let header = Row::new(["Title", "Artist", "Type", "Status", "Date", "Progress"])
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .table_rows()
        .into_iter()
        .map(|row| {
            let status_color = theme.status_color(StatusStyle::for_status(row.status));
            let progress_label = row.progress_label();
            Row::new(vec![
                Cell::from(row.title),
                Cell::from(row.artist),
                Cell::from(row.type_label),
                Cell::from(Span::styled(
                    row.status.label(),
                    Style::default().fg(status_color),
                )),
                Cell::from(row.date),
                Cell::from(Span::styled(
                    progress_label,
                    Style::default().fg(theme.progress_color(row.progress)),
                )),
            ])
        })
        .collect();

    let border = if focused { theme.accent } else { theme.text_muted };
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(26),
            Constraint::Percentage(22),
            Constraint::Length(7),
            Constraint::Length(17),
            Constraint::Length(11),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" All releases ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.background)),
    )
    .row_highlight_style(
        Style::default()
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !state.releases.is_empty() {
        table_state.select(Some(state.list_cursor));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

fn field_value(details: &DetailsView, field: DetailField) -> String {
    match field {
        DetailField::Title => details.title.clone(),
        DetailField::Artist => details.artist.clone(),
        DetailField::Type => format!("◀ {} ▶", details.type_label),
        DetailField::Status => format!("◀ {} ▶", details.status),
        DetailField::Date => details.date.clone(),
    }
}

fn render_details(f: &mut Frame, area: Rect, details: &DetailsView, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Details;
    let border = if focused { theme.accent } else { theme.text_muted };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", details.heading),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(DetailField::ALL.len() as u16 + 1),
            Constraint::Length(2), // Tabs
            Constraint::Min(3),    // Checklist
            Constraint::Length(1), // Progress
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(
            details.subtitle.as_str(),
            Style::default().fg(theme.text_secondary),
        )),
        chunks[0],
    );

    let mut field_lines = vec![Line::from("")];
    for (i, field) in DetailField::ALL.into_iter().enumerate() {
        let highlighted = focused && state.details_cursor == i;
        let editing = state
            .field_editor
            .as_ref()
            .filter(|editor| editor.field == field);
        let value = match editing {
            Some(editor) => format!("{}█", editor.buffer),
            None => field_value(details, field),
        };
        let value_style = match (editing.is_some(), field) {
            (true, _) => Style::default().fg(theme.accent),
            (false, DetailField::Status) => {
                Style::default().fg(theme.status_color(StatusStyle::for_status(details.status)))
            }
            _ => Style::default().fg(theme.text),
        };
        let marker = if highlighted { "▶ " } else { "  " };
        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(
                format!("{:<8}", field.label()),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(value, value_style),
        ]);
        if highlighted {
            line = line.style(Style::default().bg(theme.highlight_bg));
        }
        field_lines.push(line);
    }
    f.render_widget(Paragraph::new(field_lines), chunks[1]);

    let titles: Vec<Line> = ChecklistTab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();
    let selected = ChecklistTab::ALL
        .iter()
        .position(|tab| *tab == details.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme.text_muted))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[2]);

    let offset = DetailField::ALL.len();
    let checklist: Vec<Line> = details
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let highlighted = focused && state.details_cursor == offset + i;
            let (mark, mark_color) = if row.checked {
                ("[x] ", theme.success)
            } else {
                ("[ ] ", theme.text_muted)
            };
            let mut line = Line::from(vec![
                Span::styled(if highlighted { "▶ " } else { "  " }, Style::default().fg(theme.accent)),
                Span::styled(mark, Style::default().fg(mark_color)),
                Span::styled(row.label, Style::default().fg(theme.text)),
            ]);
            if highlighted {
                line = line.style(Style::default().bg(theme.highlight_bg));
            }
            line
        })
        .collect();
    f.render_widget(Paragraph::new(checklist), chunks[3]);

    render_progress(f, chunks[4], details, theme);
}

fn render_progress(f: &mut Frame, area: Rect, details: &DetailsView, theme: &Theme) {
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.progress_color(details.progress))
                .bg(theme.surface),
        )
        .percent(u16::from(details.progress))
        .label(details.progress_label());
    f.render_widget(gauge, area);
}
