//! The three on-screen controls and their layout.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::action::Action;
use crate::theme::Theme;

/// Columns left blank before the first control.
pub const MARGIN: u16 = 2;

/// Columns between adjacent controls.
pub const GAP: u16 = 2;

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// `-`
    Decrement,
    /// `Reset`
    Reset,
    /// `+`
    Increment,
}

impl Control {
    /// Controls in display order, left to right.
    pub const ALL: [Self; 3] = [Self::Decrement, Self::Reset, Self::Increment];

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decrement => "-",
            Self::Reset => "Reset",
            Self::Increment => "+",
        }
    }

    /// The action this control triggers.
    pub const fn action(self) -> Action {
        match self {
            Self::Decrement => Action::Decrement,
            Self::Reset => Action::Reset,
            Self::Increment => Action::Increment,
        }
    }

    /// The control to the right, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Decrement => Self::Reset,
            Self::Reset => Self::Increment,
            Self::Increment => Self::Decrement,
        }
    }

    /// The control to the left, wrapping around.
    pub const fn prev(self) -> Self {
        match self {
            Self::Decrement => Self::Increment,
            Self::Reset => Self::Decrement,
            Self::Increment => Self::Reset,
        }
    }

    /// Rendered width in columns: label plus two columns of frame per side.
    #[allow(clippy::cast_possible_truncation)]
    pub fn width(self) -> u16 {
        self.label().width() as u16 + 4
    }
}

/// Column span of each control on its row.
pub fn layout() -> [(Control, Range<u16>); 3] {
    let mut x = MARGIN;
    Control::ALL.map(|control| {
        let start = x;
        let end = start + control.width();
        x = end + GAP;
        (control, start..end)
    })
}

/// The control drawn at column `x`, if any.
pub fn hit(x: u16) -> Option<Control> {
    layout()
        .into_iter()
        .find(|(_, span)| span.contains(&x))
        .map(|(control, _)| control)
}

/// Render the control row with `focus` highlighted.
pub fn render(focus: Control, theme: &Theme) -> String {
    let margin = " ".repeat(usize::from(MARGIN));
    let gap = " ".repeat(usize::from(GAP));
    let buttons: Vec<String> = Control::ALL
        .iter()
        .map(|&control| theme.button(control.label(), control == focus))
        .collect();
    format!("{margin}{}", buttons.join(&gap))
}
