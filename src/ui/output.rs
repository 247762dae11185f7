//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the commands that were run.
    Verbose,
    /// Show progress comments and the final report.
    #[default]
    Normal,
    /// Show the final report only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode lists the commands that were run.
    pub fn shows_command_history(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows "Checking ..." progress comments.
    pub fn shows_comments(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
