//! Colours and emphasis.
//!
//! Every helper returns plain text when colour is off, so layout never
//! depends on whether escape sequences are present.

use counter_core::Sign;
use crossterm::style::{Color, Stylize, style};

/// Styling for the counter screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Theme with colour on or off.
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    /// Theme that never emits escape sequences.
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Whether colour is on.
    pub const fn is_colored(&self) -> bool {
        self.color
    }

    /// Bold title.
    pub fn title(&self, text: &str) -> String {
        if self.color {
            style(text).with(Color::Magenta).bold().to_string()
        } else {
            text.to_owned()
        }
    }

    /// The counter value: green above zero, red below.
    pub fn value(&self, value: i64) -> String {
        let text = value.to_string();
        if !self.color {
            return text;
        }
        match Sign::of(value) {
            Sign::Positive => style(text).with(Color::Green).bold().to_string(),
            Sign::Negative => style(text).with(Color::Red).bold().to_string(),
            Sign::Zero => style(text).bold().to_string(),
        }
    }

    /// A control. The focused one is reversed, or bracketed with `>`/`<`
    /// when colour is off; both forms have the same width.
    pub fn button(&self, label: &str, focused: bool) -> String {
        match (self.color, focused) {
            (true, true) => style(format!("[ {label} ]")).reverse().bold().to_string(),
            (true, false) => style(format!("[ {label} ]")).with(Color::Cyan).to_string(),
            (false, true) => format!("[>{label}<]"),
            (false, false) => format!("[ {label} ]"),
        }
    }

    /// De-emphasised text.
    pub fn muted(&self, text: &str) -> String {
        if self.color {
            style(text).with(Color::DarkGrey).to_string()
        } else {
            text.to_owned()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_has_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.title("T"), "T");
        assert_eq!(theme.value(-3), "-3");
        assert_eq!(theme.button("+", false), "[ + ]");
        assert_eq!(theme.button("+", true), "[>+<]");
        assert_eq!(theme.muted("m"), "m");
    }

    #[test]
    fn colored_wraps_text() {
        let theme = Theme::default();
        assert!(theme.is_colored());
        let value = theme.value(7);
        assert!(value.contains('7'));
        assert!(value.contains('\u{1b}'));
    }

    #[test]
    fn value_color_follows_sign() {
        let theme = Theme::new(true);
        assert_ne!(theme.value(1), theme.value(-1).replace('-', ""));
        assert_ne!(theme.value(0), "0");
    }
}
