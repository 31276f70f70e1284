//! Terminal output through termimad, with a plain-text fallback.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders the markdown produced by the core display impls.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::Reset);

        Self { rich_enabled, skin }
    }

    /// Print `markdown` to stdout.
    ///
    /// Headers keep their `#` markers so program, week and day levels stay
    /// distinguishable in the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_color(line) {
                Some(color) => println!("\x1b[{color}m{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color code for a header line, by level.
fn header_color(line: &str) -> Option<u8> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if level == 0 || !line[level..].starts_with(' ') {
        return None;
    }
    Some(match level {
        1 | 2 => 34,
        3 => 36,
        _ => 32,
    })
}
