//! Terminal reporting.
//!
//! This module provides:
//! - [`UserInterface`] trait, the sink every check reports through
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] which records everything for assertions in tests
//!
//! # Example
//!
//! ```
//! use gangway::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.comment("Checking presence of git");
//! ui.info("Your server is ready to deploy");
//!
//! assert!(ui.has_comment("git"));
//! assert!(ui.has_info("ready"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GangwayTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a progress comment ("Checking presence of git").
    fn comment(&mut self, msg: &str);

    /// Display a command that was run on the server.
    fn command(&mut self, command: &str);

    /// Display a confirmation.
    fn info(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
