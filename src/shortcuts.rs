//! Key bindings and the actions they trigger.
//!
//! Bindings are grouped by input context. The TUI asks the registry for the
//! action of a key in the focused context and dispatches on the result.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::view_model::ViewId;

/// Global shortcuts, consulted after the focused context.
pub const CONTEXT_MAIN: &str = "main";
/// Dashboard cards and releases table.
pub const CONTEXT_LIST: &str = "list";
/// Release details panel.
pub const CONTEXT_DETAILS: &str = "details";
/// Business roadmap checklists.
pub const CONTEXT_BUSINESS: &str = "business";
/// New-release modal.
pub const CONTEXT_FORM: &str = "form";
/// Inline field editor in the details panel.
pub const CONTEXT_EDIT: &str = "edit";

/// Everything a key can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    JumpToFirst,
    JumpToLast,

    // === VIEWS ===
    ShowView(ViewId),
    NextView,
    PreviousView,

    // === SELECTION & EDITING ===
    Select,
    ToggleItem,
    CycleNext,
    CyclePrevious,
    NextTab,
    PreviousTab,
    Back,

    // === LINKS ===
    OpenLink,
    NextLink,
    CopyLink,

    // === FORM ===
    NewRelease,
    NextField,
    PreviousField,
    Submit,
    Cancel,

    // === GENERAL ===
    Quit,
}

impl Action {
    /// Stable identifier of the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",

            Self::ShowView(_) => "show_view",
            Self::NextView => "next_view",
            Self::PreviousView => "previous_view",

            Self::Select => "select",
            Self::ToggleItem => "toggle_item",
            Self::CycleNext => "cycle_next",
            Self::CyclePrevious => "cycle_previous",
            Self::NextTab => "next_tab",
            Self::PreviousTab => "previous_tab",
            Self::Back => "back",

            Self::OpenLink => "open_link",
            Self::NextLink => "next_link",
            Self::CopyLink => "copy_link",

            Self::NewRelease => "new_release",
            Self::NextField => "next_field",
            Self::PreviousField => "previous_field",
            Self::Submit => "submit",
            Self::Cancel => "cancel",

            Self::Quit => "quit",
        }
    }
}

/// Maps `(context, key)` to an [`Action`].
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys since the character already
    /// carries the case.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) | KeyCode::BackTab => {
                event.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_list_shortcuts();
        registry.register_details_shortcuts();
        registry.register_business_shortcuts();
        registry.register_form_shortcuts();
        registry.register_edit_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MAIN;

        // === VIEWS ===
        for (n, view) in ('1'..='6').zip(ViewId::ALL) {
            self.register(ctx, K::Char(n), M::NONE, Action::ShowView(view));
        }
        self.register(ctx, K::Tab, M::NONE, Action::NextView);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousView);

        // === FORM ===
        self.register(ctx, K::Char('n'), M::NONE, Action::NewRelease);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register_cursor_keys(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
    }

    /// Register shortcuts for the dashboard cards and releases table.
    fn register_list_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_LIST;
        self.register_cursor_keys(ctx);
        self.register(ctx, K::Enter, M::NONE, Action::Select);
    }

    /// Register shortcuts for the details panel.
    fn register_details_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_DETAILS;
        self.register_cursor_keys(ctx);
        self.register(ctx, K::Enter, M::NONE, Action::Select);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleItem);
        self.register(ctx, K::Right, M::NONE, Action::CycleNext);
        self.register(ctx, K::Char('l'), M::NONE, Action::CycleNext);
        self.register(ctx, K::Left, M::NONE, Action::CyclePrevious);
        self.register(ctx, K::Char('h'), M::NONE, Action::CyclePrevious);
        self.register(ctx, K::Char(']'), M::NONE, Action::NextTab);
        self.register(ctx, K::Char('['), M::NONE, Action::PreviousTab);
        self.register(ctx, K::Esc, M::NONE, Action::Back);
    }

    /// Register shortcuts for the business roadmap checklists.
    fn register_business_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_BUSINESS;
        self.register_cursor_keys(ctx);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleItem);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleItem);
        self.register(ctx, K::Char('o'), M::NONE, Action::OpenLink);
        self.register(ctx, K::Char('O'), M::NONE, Action::NextLink);
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyLink);
    }

    /// Register shortcuts for the new-release modal.
    fn register_form_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_FORM;
        self.register(ctx, K::Tab, M::NONE, Action::NextField);
        self.register(ctx, K::Down, M::NONE, Action::NextField);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousField);
        self.register(ctx, K::Up, M::NONE, Action::PreviousField);
        self.register(ctx, K::Right, M::NONE, Action::CycleNext);
        self.register(ctx, K::Left, M::NONE, Action::CyclePrevious);
        self.register(ctx, K::Enter, M::NONE, Action::Submit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts for the inline field editor.
    fn register_edit_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_EDIT;
        self.register(ctx, K::Enter, M::NONE, Action::Submit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Look up in `context` first, then in the global context.
    ///
    /// The form and edit contexts capture text input, so they never fall
    /// through to global shortcuts.
    #[must_use]
    pub fn resolve(&self, context: &str, event: KeyEvent) -> Option<Action> {
        self.lookup(context, event).or_else(|| {
            if context == CONTEXT_FORM || context == CONTEXT_EDIT {
                None
            } else {
                self.lookup(CONTEXT_MAIN, event)
            }
        })
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
