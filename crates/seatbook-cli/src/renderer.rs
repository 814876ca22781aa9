//! Terminal rendering for the interactive session
//!
//! Markdown from the core display types is rendered with termimad, or
//! printed verbatim when color is disabled.

use std::io::{self, Write};

use anyhow::{Context, Result};
use seatbook_core::display::{OperationStatus, StatusKind};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.table.set_fg(Color::AnsiValue(250));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_text(markdown);
        } else {
            print!("{markdown}");
        }
        io::stdout().flush().context("Failed to write to standard output")
    }

    /// Print a prompt and leave the cursor on the same line
    pub fn prompt(&self, text: &str) -> Result<()> {
        print!("{text}");
        io::stdout().flush().context("Failed to write to standard output")
    }

    /// Render a one-line status, colored by its kind
    pub fn status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            return self.render(&status.to_string());
        }

        let mut skin = self.skin.clone();
        skin.paragraph.set_fg(status_color(status.kind));
        skin.print_text(&status.to_string());
        io::stdout().flush().context("Failed to write to standard output")
    }
}

fn status_color(kind: StatusKind) -> Color {
    match kind {
        StatusKind::Success => Color::Green,
        StatusKind::Notice => Color::Yellow,
        StatusKind::Error => Color::Red,
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(StatusKind::Success), Color::Green);
        assert_eq!(status_color(StatusKind::Notice), Color::Yellow);
        assert_eq!(status_color(StatusKind::Error), Color::Red);
    }
}
