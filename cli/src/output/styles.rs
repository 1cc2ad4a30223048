//! owo-colors stylesheet for command messages.

use owo_colors::Style;

/// Message styles. Plain until [`Styles::colorize`] is called.
#[derive(Default, Clone)]
pub struct Styles {
    /// "I have set …" lines
    pub success: Style,
    /// "I would set …" lines
    pub info: Style,
}

impl Styles {
    /// Switch to colored output for a color-capable terminal.
    pub fn colorize(&mut self) {
        self.success = Style::new().green().bold();
        self.info = Style::new().cyan();
    }
}
