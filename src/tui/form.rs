//! New-release modal: form state and rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, Theme};
use crate::models::{parse_date, NewRelease, ReleaseStatus, ReleaseType};

/// Field in the new-release form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Title text
    Title,
    /// Artist text
    Artist,
    /// Type selector
    Type,
    /// Status selector
    Status,
    /// Date text (`YYYY-MM-DD`)
    Date,
}

impl FormField {
    /// Fields in tab order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Artist,
        Self::Type,
        Self::Status,
        Self::Date,
    ];

    /// Get the next field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Artist,
            Self::Artist => Self::Type,
            Self::Type => Self::Status,
            Self::Status => Self::Date,
            Self::Date => Self::Title,
        }
    }

    /// Get the previous field.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Date,
            Self::Artist => Self::Title,
            Self::Type => Self::Artist,
            Self::Status => Self::Type,
            Self::Date => Self::Status,
        }
    }

    /// Get the field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Date => "Date",
        }
    }

    /// Whether the field takes typed text.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Artist | Self::Date)
    }
}

/// State of the open new-release modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReleaseForm {
    /// Currently active field
    pub active_field: FormField,
    /// Title as typed
    pub title: String,
    /// Artist as typed
    pub artist: String,
    /// Selected type
    pub release_type: ReleaseType,
    /// Selected status
    pub status: ReleaseStatus,
    /// Date as typed
    pub date_input: String,
}

impl NewReleaseForm {
    /// Fresh form: empty text, Single, In Progress, no date.
    #[must_use]
    pub fn new() -> Self {
        let defaults = NewRelease::default();
        Self {
            active_field: FormField::Title,
            title: defaults.title,
            artist: defaults.artist,
            release_type: defaults.release_type,
            status: defaults.status,
            date_input: String::new(),
        }
    }

    /// Get a mutable reference to the active field's text, if it is a text field.
    pub fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::Title => Some(&mut self.title),
            FormField::Artist => Some(&mut self.artist),
            FormField::Date => Some(&mut self.date_input),
            FormField::Type | FormField::Status => None,
        }
    }

    /// Move to the next field.
    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Move to the previous field.
    pub fn previous_field(&mut self) {
        self.active_field = self.active_field.previous();
    }

    /// Cycle the active selector forward. No effect on text fields.
    pub fn cycle_next(&mut self) {
        match self.active_field {
            FormField::Type => self.release_type = self.release_type.next(),
            FormField::Status => self.status = self.status.next(),
            _ => {}
        }
    }

    /// Cycle the active selector backward. No effect on text fields.
    pub fn cycle_previous(&mut self) {
        match self.active_field {
            FormField::Type => self.release_type = self.release_type.previous(),
            FormField::Status => self.status = self.status.previous(),
            _ => {}
        }
    }

    /// Collects the submitted data.
    ///
    /// Text is passed through untrimmed; trimming happens when the release is
    /// built. A date that is neither blank nor `YYYY-MM-DD` is rejected.
    pub fn to_new_release(&self) -> Result<NewRelease, String> {
        let date = parse_date(&self.date_input);
        if date.is_none() && !self.date_input.trim().is_empty() {
            return Err(format!(
                "Invalid date '{}': use YYYY-MM-DD",
                self.date_input.trim()
            ));
        }
        Ok(NewRelease {
            title: self.title.clone(),
            artist: self.artist.clone(),
            release_type: self.release_type.clone(),
            status: self.status,
            date,
        })
    }

    fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::Title => self.title.clone(),
            FormField::Artist => self.artist.clone(),
            FormField::Type => format!("◀ {} ▶", self.release_type),
            FormField::Status => format!("◀ {} ▶", self.status),
            FormField::Date => self.date_input.clone(),
        }
    }
}

impl Default for NewReleaseForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the new-release modal over the current frame.
pub fn render_new_release_form(f: &mut Frame, form: &NewReleaseForm, theme: &Theme) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Release ")
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in FormField::ALL.into_iter().enumerate() {
        let active = field == form.active_field;
        let border = if active { theme.accent } else { theme.text_muted };
        let placeholder = field == FormField::Date && form.date_input.is_empty() && !active;
        let (value, value_style) = if placeholder {
            ("YYYY-MM-DD".to_string(), Style::default().fg(theme.text_muted))
        } else {
            let mut value = form.display_value(field);
            if active && field.is_text() {
                value.push('█');
            }
            (value, Style::default().fg(theme.text))
        };

        let input = Paragraph::new(Line::from(Span::styled(value, value_style))).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(Style::default().fg(border)),
        );
        f.render_widget(input, chunks[i]);
    }

    let key_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let help = Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(" Next field  "),
        Span::styled("←/→", key_style),
        Span::raw(" Change  "),
        Span::styled("Enter", key_style),
        Span::raw(" Create  "),
        Span::styled("Esc", key_style),
        Span::raw(" Cancel"),
    ]);
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(theme.text_muted)),
        chunks[FormField::ALL.len() + 1],
    );
}
