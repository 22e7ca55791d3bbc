//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod business;
pub mod dashboard;
pub mod editor;
pub mod form;
pub mod handlers;
pub mod links;
pub mod nav;
pub mod releases;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{
    generate_release_id, BusinessState, Release, ReleaseStatus, ReleaseType,
};
use crate::services::{KeyValueStore, ReleaseStore};
use crate::shortcuts::{
    ShortcutRegistry, CONTEXT_BUSINESS, CONTEXT_DETAILS, CONTEXT_EDIT, CONTEXT_FORM, CONTEXT_LIST,
    CONTEXT_MAIN,
};
use crate::view_model::{
    self, BusinessRow, BusinessSectionView, ChecklistTab, DashboardModel, DetailsView, LinkView,
    ReleaseCard, Stats, TableRow, ViewId,
};

// Re-export TUI components
pub use editor::{DetailField, FieldEditor};
pub use form::{FormField, NewReleaseForm};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Persistence handle used by the TUI.
pub type Store = ReleaseStore<Box<dyn KeyValueStore>>;

/// Which pane of the Releases view has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The releases table
    #[default]
    List,
    /// The details panel of the selected release
    Details,
}

/// One field change on the selected release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseEdit {
    /// New title, stored as typed
    Title(String),
    /// New artist, stored as typed
    Artist(String),
    /// New type
    Type(ReleaseType),
    /// New status
    Status(ReleaseStatus),
    /// New date, or cleared
    Date(Option<NaiveDate>),
}

/// What the details cursor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsTarget {
    /// An editable field
    Field(DetailField),
    /// A checklist item of the active tab
    Item {
        /// Section id
        section: &'static str,
        /// Item key
        key: &'static str,
    },
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// All releases, in creation order
    pub releases: Vec<Release>,
    /// Business roadmap checkboxes
    pub business: BusinessState,
    store: Store,

    // Navigation
    /// Release shown in the details panel
    pub selected_release_id: Option<String>,
    /// Currently displayed view
    pub active_view: ViewId,
    /// Checklist tab of the details panel
    pub active_tab: ChecklistTab,
    /// Focused pane in the Releases view
    pub focus: Focus,
    /// Highlighted card (dashboard) or row (releases table)
    pub list_cursor: usize,
    /// Highlighted entry of the details panel (fields, then checklist rows)
    pub details_cursor: usize,
    /// Highlighted roadmap row of the active business view
    pub business_cursor: usize,
    /// Which link of the highlighted roadmap row `o` opens
    pub link_cursor: usize,

    // Dialogs
    /// New-release modal (open iff `Some`)
    pub new_release_form: Option<NewReleaseForm>,
    /// Inline text editor of the details panel
    pub field_editor: Option<FieldEditor>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Application configuration
    pub config: Config,
    /// Shortcut bindings
    pub shortcuts: ShortcutRegistry,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for status message
    pub status_color_override: Option<Color>,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Loads both documents from `store` and builds the initial state.
    ///
    /// # Errors
    ///
    /// Returns error if the storage medium itself fails
    pub fn new(mut store: Store, config: Config) -> Result<Self> {
        let releases = store.load_releases().context("Failed to load releases")?;
        let business = store
            .load_business_state()
            .context("Failed to load business state")?;
        info!(releases = releases.len(), "Loaded application state");

        Ok(Self {
            releases,
            business,
            store,
            selected_release_id: None,
            active_view: config.ui.start_view,
            active_tab: ChecklistTab::default(),
            focus: Focus::List,
            list_cursor: 0,
            details_cursor: 0,
            business_cursor: 0,
            link_cursor: 0,
            new_release_form: None,
            field_editor: None,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            shortcuts: ShortcutRegistry::new(),
            status_message: String::new(),
            status_color_override: None,
            error_message: None,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.error_message = None;
        self.status_color_override = Some(color);
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    // === Persistence ===

    fn persist_releases(&mut self) {
        if let Err(e) = self.store.save_releases(&self.releases) {
            error!(error = %format!("{e:#}"), "Failed to save releases");
            let color = self.theme.error;
            self.set_status_with_style(format!("Save failed: {e:#}"), color);
        }
    }

    fn persist_business(&mut self) {
        if let Err(e) = self.store.save_business_state(&self.business) {
            error!(error = %format!("{e:#}"), "Failed to save business state");
            let color = self.theme.error;
            self.set_status_with_style(format!("Save failed: {e:#}"), color);
        }
    }

    // === Navigation ===

    /// Switches the displayed view.
    pub fn set_active_view(&mut self, view: ViewId) {
        self.active_view = view;
        self.focus = Focus::List;
        self.field_editor = None;
        self.business_cursor = 0;
        self.link_cursor = 0;
        if view == ViewId::Releases {
            if let Some(index) = self.selected_index() {
                self.list_cursor = index;
            }
        }
        self.clamp_cursors();
    }

    /// Selects a release and shows it in the Releases view.
    pub fn select_release(&mut self, id: &str) {
        self.selected_release_id = Some(id.to_string());
        self.active_view = ViewId::Releases;
        self.focus = Focus::Details;
        self.field_editor = None;
        self.details_cursor = 0;
        if let Some(index) = self.selected_index() {
            self.list_cursor = index;
        }
    }

    /// Shows one checklist tab in the details panel.
    pub fn set_active_tab(&mut self, tab: ChecklistTab) {
        self.active_tab = tab;
        if self.details_cursor >= DetailField::ALL.len() {
            self.details_cursor = DetailField::ALL.len();
        }
        self.clamp_cursors();
    }

    /// Next checklist tab (wraps).
    pub fn next_tab(&mut self) {
        self.set_active_tab(self.active_tab.next());
    }

    /// Previous checklist tab (wraps).
    pub fn previous_tab(&mut self) {
        self.set_active_tab(self.active_tab.previous());
    }

    // === Release mutations ===

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_release_id.as_deref()?;
        self.releases.iter().position(|r| r.id == id)
    }

    /// The selected release, if the selection is live.
    pub fn selected_release(&self) -> Option<&Release> {
        self.selected_index().map(|i| &self.releases[i])
    }

    /// Flips a checklist item of the selected release.
    ///
    /// Returns the new value, or `None` when nothing is selected.
    pub fn toggle_release_item(&mut self, section: &str, key: &str) -> Option<bool> {
        let index = self.selected_index()?;
        let checked = self.releases[index].checklists.toggle(section, key);
        self.persist_releases();
        Some(checked)
    }

    /// Applies one field change to the selected release.
    ///
    /// Returns `false` when nothing is selected or the selection is stale.
    pub fn update_selected_release(&mut self, edit: ReleaseEdit) -> bool {
        let Some(index) = self.selected_index() else {
            return false;
        };
        let release = &mut self.releases[index];
        match edit {
            ReleaseEdit::Title(title) => release.set_title(title),
            ReleaseEdit::Artist(artist) => release.set_artist(artist),
            ReleaseEdit::Type(release_type) => release.set_type(release_type),
            ReleaseEdit::Status(status) => release.set_status(status),
            ReleaseEdit::Date(date) => release.set_date(date),
        }
        self.persist_releases();
        true
    }

    // === New release modal ===

    /// Opens the modal with a fresh form.
    pub fn open_new_release_form(&mut self) {
        self.field_editor = None;
        self.new_release_form = Some(NewReleaseForm::new());
    }

    /// Closes the modal, discarding its input.
    pub fn close_new_release_form(&mut self) {
        self.new_release_form = None;
    }

    /// Creates a release from the open form.
    ///
    /// The new release is appended and persisted, the modal closes, and the
    /// release becomes the selection in the Releases view. Returns the new id,
    /// or `None` if no form is open or the form input is rejected.
    pub fn submit_new_release(&mut self) -> Option<String> {
        let form = self.new_release_form.as_ref()?;
        let data = match form.to_new_release() {
            Ok(data) => data,
            Err(message) => {
                let color = self.theme.error;
                self.set_status_with_style(message, color);
                return None;
            }
        };

        let id = generate_release_id(
            Utc::now().timestamp_millis(),
            self.releases.iter().map(|r| r.id.as_str()),
        );
        let release = Release::from_form(&data, id.clone());
        info!(id = %id, title = %release.title, "Created release");
        self.set_status(format!("Created \"{}\"", release.display_title()));
        self.releases.push(release);
        self.persist_releases();

        self.close_new_release_form();
        self.select_release(&id);
        Some(id)
    }

    // === Business roadmap ===

    /// Flips a business roadmap item and returns its new value.
    pub fn toggle_business_item(&mut self, section: &str, key: &str) -> bool {
        let checked = self.business.toggle(section, key);
        self.persist_business();
        checked
    }

    // === View model ===

    /// Release counters.
    pub fn stats(&self) -> Stats {
        view_model::stats(&self.releases)
    }

    /// Dashboard release area.
    pub fn dashboard(&self) -> DashboardModel {
        view_model::dashboard(&self.releases)
    }

    /// Dashboard cards in release order.
    pub fn cards(&self) -> Vec<ReleaseCard> {
        self.releases.iter().map(ReleaseCard::from_release).collect()
    }

    /// Releases table rows.
    pub fn table_rows(&self) -> Vec<TableRow> {
        view_model::table_rows(&self.releases)
    }

    /// Details panel, present only in the Releases view with a live selection.
    pub fn details_view(&self) -> Option<DetailsView> {
        view_model::details_view(
            &self.releases,
            self.selected_release_id.as_deref(),
            self.active_view,
            self.active_tab,
        )
    }

    /// Roadmap sections of a view.
    pub fn business_sections(&self, view: ViewId) -> Vec<BusinessSectionView> {
        view_model::business_sections(&self.business, view)
    }

    /// Roadmap rows of the active view, flattened in display order.
    pub fn business_rows(&self) -> Vec<BusinessRow> {
        self.business_sections(self.active_view)
            .into_iter()
            .flat_map(|section| section.rows)
            .collect()
    }

    /// Roadmap row under the cursor.
    pub fn focused_business_row(&self) -> Option<BusinessRow> {
        self.business_rows().into_iter().nth(self.business_cursor)
    }

    /// Link of the focused roadmap row that `o` would open.
    pub fn focused_link(&self) -> Option<LinkView> {
        let row = self.focused_business_row()?;
        if row.links.is_empty() {
            return None;
        }
        row.links.get(self.link_cursor % row.links.len()).copied()
    }

    // === Cursors ===

    /// Shortcut context for the current focus.
    pub fn input_context(&self) -> &'static str {
        if self.field_editor.is_some() {
            return CONTEXT_EDIT;
        }
        if self.new_release_form.is_some() {
            return CONTEXT_FORM;
        }
        match self.active_view {
            ViewId::Dashboard => CONTEXT_LIST,
            ViewId::Releases => {
                if self.focus == Focus::Details && self.selected_release().is_some() {
                    CONTEXT_DETAILS
                } else {
                    CONTEXT_LIST
                }
            }
            ViewId::Company | ViewId::Contracts | ViewId::Royalties => CONTEXT_BUSINESS,
            ViewId::Consulting => CONTEXT_MAIN,
        }
    }

    fn details_len(&self) -> usize {
        let rows = crate::models::release_schema()
            .section(self.active_tab.section_id())
            .map_or(0, |s| s.items.len());
        DetailField::ALL.len() + rows
    }

    fn cursor_len(&self) -> usize {
        match self.input_context() {
            CONTEXT_LIST => self.releases.len(),
            CONTEXT_DETAILS => self.details_len(),
            CONTEXT_BUSINESS => self.business_rows().len(),
            _ => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.input_context() {
            CONTEXT_LIST => Some(&mut self.list_cursor),
            CONTEXT_DETAILS => Some(&mut self.details_cursor),
            CONTEXT_BUSINESS => Some(&mut self.business_cursor),
            _ => None,
        }
    }

    /// Moves the focused cursor by `delta`, clamped to the list.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.cursor_len();
        let business = self.input_context() == CONTEXT_BUSINESS;
        if let Some(cursor) = self.cursor_mut() {
            let max = len.saturating_sub(1);
            *cursor = cursor.saturating_add_signed(delta).min(max);
        }
        if business {
            self.link_cursor = 0;
        }
    }

    /// Moves the focused cursor to the first entry.
    pub fn cursor_to_first(&mut self) {
        if let Some(cursor) = self.cursor_mut() {
            *cursor = 0;
        }
        self.link_cursor = 0;
    }

    /// Moves the focused cursor to the last entry.
    pub fn cursor_to_last(&mut self) {
        let last = self.cursor_len().saturating_sub(1);
        if let Some(cursor) = self.cursor_mut() {
            *cursor = last;
        }
        self.link_cursor = 0;
    }

    fn clamp_cursors(&mut self) {
        self.list_cursor = self.list_cursor.min(self.releases.len().saturating_sub(1));
        self.details_cursor = self.details_cursor.min(self.details_len().saturating_sub(1));
        let business_len = self.business_rows().len();
        self.business_cursor = self.business_cursor.min(business_len.saturating_sub(1));
    }

    /// What the details cursor points at.
    pub fn details_target(&self) -> Option<DetailsTarget> {
        if let Some(field) = DetailField::ALL.get(self.details_cursor) {
            return Some(DetailsTarget::Field(*field));
        }
        let section = crate::models::release_schema().section(self.active_tab.section_id())?;
        let item = section
            .items
            .get(self.details_cursor - DetailField::ALL.len())?;
        Some(DetailsTarget::Item {
            section: section.id,
            key: item.key,
        })
    }

    /// Id of the release under the list cursor.
    pub fn release_at_cursor(&self) -> Option<&str> {
        self.releases.get(self.list_cursor).map(|r| r.id.as_str())
    }

    // === Field editing ===

    /// Opens the inline editor for a text field of the selected release.
    pub fn open_field_editor(&mut self, field: DetailField) {
        let Some(release) = self.selected_release() else {
            return;
        };
        let value = match field {
            DetailField::Title => release.title.clone(),
            DetailField::Artist => release.artist.clone(),
            DetailField::Date => release.date_label(),
            DetailField::Type | DetailField::Status => return,
        };
        self.field_editor = Some(FieldEditor::new(field, value));
    }

    /// Pushes the editor buffer to the release if the field is live.
    pub fn sync_field_editor(&mut self) {
        let Some(editor) = &self.field_editor else {
            return;
        };
        let edit = match editor.field {
            DetailField::Title => ReleaseEdit::Title(editor.buffer.clone()),
            DetailField::Artist => ReleaseEdit::Artist(editor.buffer.clone()),
            _ => return,
        };
        self.update_selected_release(edit);
    }

    /// Finishes editing. A malformed date keeps the editor open.
    pub fn commit_field_editor(&mut self) {
        let Some(editor) = self.field_editor.take() else {
            return;
        };
        if editor.field == DetailField::Date {
            let date = crate::models::parse_date(&editor.buffer);
            if date.is_none() && !editor.buffer.trim().is_empty() {
                let color = self.theme.error;
                let message = format!("Invalid date '{}': use YYYY-MM-DD", editor.buffer.trim());
                self.set_status_with_style(message, color);
                self.field_editor = Some(editor);
                return;
            }
            self.update_selected_release(ReleaseEdit::Date(date));
        }
    }

    /// Abandons editing and restores the value the editor opened with.
    pub fn cancel_field_editor(&mut self) {
        let Some(editor) = self.field_editor.take() else {
            return;
        };
        let edit = match editor.field {
            DetailField::Title => ReleaseEdit::Title(editor.original),
            DetailField::Artist => ReleaseEdit::Artist(editor.original),
            _ => return,
        };
        self.update_selected_release(edit);
    }

    /// Steps the type or status of the selected release.
    pub fn cycle_selected_field(&mut self, field: DetailField, forward: bool) {
        let Some(release) = self.selected_release() else {
            return;
        };
        let edit = match field {
            DetailField::Type => {
                let current = &release.release_type;
                ReleaseEdit::Type(if forward {
                    current.next()
                } else {
                    current.previous()
                })
            }
            DetailField::Status => {
                let current = release.status;
                ReleaseEdit::Status(if forward {
                    current.next()
                } else {
                    current.previous()
                })
            }
            _ => return,
        };
        self.update_selected_release(edit);
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                // Resize and everything else redraws on the next pass
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], state);

    let body = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(40)])
        .split(chunks[1]);

    nav::render(f, body[0], state);
    render_main_content(f, body[1], state);

    StatusBar::render(f, chunks[2], state, &state.theme);

    if let Some(form) = &state.new_release_form {
        form::render_new_release_form(f, form, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render header with view title and subtitle
fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let meta = view_model::view_meta(state.active_view);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                meta.title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   n: New release",
                Style::default().fg(theme.text_muted),
            ),
        ]),
        Line::from(Span::styled(
            meta.subtitle,
            Style::default().fg(theme.text_secondary),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", crate::constants::APP_NAME))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(header, area);
}

/// Render the active view
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    match state.active_view {
        ViewId::Dashboard => dashboard::render(f, area, state),
        ViewId::Releases => releases::render(f, area, state),
        ViewId::Company | ViewId::Contracts | ViewId::Royalties => {
            business::render_roadmap(f, area, state);
        }
        ViewId::Consulting => business::render_consulting(f, area, &state.theme),
    }
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(Style::default().fg(theme.error).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if state.field_editor.is_some() {
        return handlers::handle_edit_input(state, key);
    }

    if state.new_release_form.is_some() {
        return handlers::handle_form_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
