//! Title header.

use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Title shown when none is supplied.
pub const DEFAULT_TITLE: &str = "React Counter App";

/// The header line at the top of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    title: String,
}

impl Header {
    /// A header showing `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// The title text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Display width of the title in terminal columns.
    pub fn width(&self) -> usize {
        self.title.width()
    }

    /// Two lines: the title, then a rule of the same width.
    pub fn render(&self, theme: &Theme) -> String {
        let rule = "─".repeat(self.width().max(1));
        format!("{}\n{}", theme.title(&self.title), theme.muted(&rule))
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
