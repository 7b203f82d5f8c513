//! Mouse input.
//!
//! Mouse events are only reported once capture is enabled with
//! [`Program::with_mouse_cell_motion`](crate::Program::with_mouse_cell_motion).

use std::fmt;

/// A mouse event delivered to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMsg {
    /// Column, 0-indexed.
    pub x: u16,
    /// Row, 0-indexed.
    pub y: u16,
    /// What happened.
    pub action: MouseAction,
    /// Which button.
    pub button: MouseButton,
}

impl MouseMsg {
    /// A left-button press at `(x, y)`.
    pub const fn left_click(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
        }
    }

    /// Whether this is a left-button press.
    pub fn is_left_press(&self) -> bool {
        self.button == MouseButton::Left && self.action == MouseAction::Press
    }
}

impl fmt::Display for MouseMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at ({}, {})", self.button, self.action, self.x, self.y)
    }
}

/// Mouse action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Button pressed or wheel turned.
    Press,
    /// Button released.
    Release,
    /// Pointer moved or dragged.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::Motion => "motion",
        })
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// No button (plain motion).
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
            Self::WheelUp => "wheel up",
            Self::WheelDown => "wheel down",
        })
    }
}

/// Convert a crossterm mouse event into a [`MouseMsg`].
///
/// Horizontal scrolling is not modelled and yields `None`.
pub fn from_crossterm_mouse(event: crossterm::event::MouseEvent) -> Option<MouseMsg> {
    use crossterm::event::{MouseButton as CtButton, MouseEventKind};

    let map_button = |b: CtButton| match b {
        CtButton::Left => MouseButton::Left,
        CtButton::Right => MouseButton::Right,
        CtButton::Middle => MouseButton::Middle,
    };

    let (action, button) = match event.kind {
        MouseEventKind::Down(b) => (MouseAction::Press, map_button(b)),
        MouseEventKind::Up(b) => (MouseAction::Release, map_button(b)),
        MouseEventKind::Drag(b) => (MouseAction::Motion, map_button(b)),
        MouseEventKind::Moved => (MouseAction::Motion, MouseButton::None),
        MouseEventKind::ScrollUp => (MouseAction::Press, MouseButton::WheelUp),
        MouseEventKind::ScrollDown => (MouseAction::Press, MouseButton::WheelDown),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
    };

    Some(MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};

    fn event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_down_is_press() {
        let msg = from_crossterm_mouse(event(MouseEventKind::Down(
            crossterm::event::MouseButton::Left,
        )))
        .unwrap();
        assert!(msg.is_left_press());
        assert_eq!((msg.x, msg.y), (4, 2));
    }

    #[test]
    fn test_release_is_not_press() {
        let msg = from_crossterm_mouse(event(MouseEventKind::Up(
            crossterm::event::MouseButton::Left,
        )))
        .unwrap();
        assert!(!msg.is_left_press());
        assert_eq!(msg.action, MouseAction::Release);
    }

    #[test]
    fn test_wheel_and_horizontal_scroll() {
        let up = from_crossterm_mouse(event(MouseEventKind::ScrollUp)).unwrap();
        assert_eq!(up.button, MouseButton::WheelUp);
        assert!(from_crossterm_mouse(event(MouseEventKind::ScrollLeft)).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(MouseMsg::left_click(1, 3).to_string(), "left press at (1, 3)");
    }
}
