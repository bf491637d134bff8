//! Terminal rendering for the markdown produced by the core display types.
//!
//! Rich mode styles headers, bold labels and inline code through termimad;
//! plain mode prints the markdown untouched so output stays greppable.

use std::io::{self, Write};

use anyhow::Result;
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
        skin.set_headers_fg(Color::Rgb {
            r: 0xef,
            g: 0x6c,
            b: 0x39,
        });
        skin.bold.set_fg(Color::White);
        skin.inline_code.set_bg(Color::AnsiValue(238));
        skin.quote_mark.set_fg(Color::Red);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            for line in markdown.lines() {
                // Headers keep their hashes so the step number stays visible
                if line.starts_with('#') {
                    writeln!(stdout, "\x1b[1;38;2;239;108;57m{line}\x1b[0m")?;
                } else {
                    writeln!(stdout, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(stdout, "{markdown}")?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print the interactive prompt without a newline
    pub fn prompt(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "> ")?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
