//! Terminal styling helpers
//!
//! Output goes through `anstream`, which strips escapes when the stream
//! isn't a color-capable terminal.

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use std::fmt::Display;

/// Success marker
pub const CHECK: &str = "✓";

/// Failure marker
pub const CROSS: &str = "✗";

/// Semantic styles for CLI text
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Headings and labels
    fn emphasis(&self) -> String;
    /// Names the user typed or will want to copy
    fn accent(&self) -> String;
    /// Completed actions
    fn success(&self) -> String;
    /// Recoverable problems
    fn warn(&self) -> String;
    /// Fatal problems
    fn error(&self) -> String;
}

impl<T: Display + ?Sized> Stylize for T {
    fn muted(&self) -> String {
        self.to_string().dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.to_string().bold().to_string()
    }

    fn accent(&self) -> String {
        self.to_string().cyan().to_string()
    }

    fn success(&self) -> String {
        self.to_string().green().to_string()
    }

    fn warn(&self) -> String {
        self.to_string().yellow().to_string()
    }

    fn error(&self) -> String {
        self.to_string().red().bold().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Red cross
pub fn cross() -> String {
    CROSS.error()
}

/// Dimmed arrow for lists
pub fn arrow() -> String {
    "→".muted()
}

/// Spinner used while waiting on the API
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
}

/// `url` as a clickable link where the terminal supports it
pub fn hyperlink(text: &str, url: &str) -> String {
    if supports_hyperlinks::supports_hyperlinks() {
        terminal_link::Link::new(text, url).to_string()
    } else {
        url.to_string()
    }
}
