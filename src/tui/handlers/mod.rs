//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod edit;
pub mod form;
pub mod main;

// Re-export handler functions
pub use actions::dispatch_action;
pub use edit::handle_edit_input;
pub use form::handle_form_input;
pub use main::handle_main_input;
