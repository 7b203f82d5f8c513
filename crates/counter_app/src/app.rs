//! The counter screen.
//!
//! [`CounterApp`] owns the counter value and is the only place it changes.
//! Every input resolves to an [`Action`], the action runs through
//! `counter_core`, and the result replaces the stored value.
//!
//! Screen rows, top to bottom:
//!
//! ```text
//! 0  title
//! 1  rule
//! 2
//! 3  value
//! 4
//! 5  [ - ]  [ Reset ]  [ + ]
//! 6
//! 7  help
//! ```

use counter_core::{INITIAL_VALUE, Sign};
use counter_tea::{Cmd, KeyMsg, KeyType, Message, Model, MouseMsg, quit, set_window_title};
use tracing::{debug, trace};

use crate::action::Action;
use crate::config::{Config, DEFAULT_STEP};
use crate::controls::{self, Control, MARGIN};
use crate::header::Header;
use crate::theme::Theme;

/// Row holding the value.
pub const VALUE_ROW: u16 = 3;

/// Row holding the controls.
pub const CONTROLS_ROW: u16 = 5;

const HELP: &str = "+/- change · r reset · ←/→ focus · enter press · q quit";

/// The counter application model.
#[derive(Debug, Clone)]
pub struct CounterApp {
    value: i64,
    header: Header,
    focus: Control,
    step: i64,
    theme: Theme,
}

impl CounterApp {
    /// A counter at zero with the default header and colour on.
    pub fn new() -> Self {
        Self {
            value: INITIAL_VALUE,
            header: Header::default(),
            focus: Control::Increment,
            step: DEFAULT_STEP,
            theme: Theme::default(),
        }
    }

    /// A counter at zero configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_title(config.title.clone())
            .with_step(config.step)
            .with_theme(Theme::new(config.color))
    }

    /// Replace the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.header = Header::new(title);
        self
    }

    /// Amount PageUp/PageDown move the value by.
    #[must_use]
    pub const fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Replace the theme.
    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Current value.
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// The header.
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// The focused control.
    pub const fn focus(&self) -> Control {
        self.focus
    }

    /// Configured PageUp/PageDown amount.
    pub const fn step(&self) -> i64 {
        self.step
    }

    /// Apply `action` and store the result.
    pub fn apply(&mut self, action: Action) {
        let before = self.value;
        self.value = action.apply(before);
        debug!(
            %action,
            before,
            after = self.value,
            sign = %Sign::of(self.value),
            "counter updated"
        );
    }

    /// Press `control`: focus it and apply its action.
    pub fn press(&mut self, control: Control) {
        self.focus = control;
        self.apply(control.action());
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        trace!(%key, "key");
        match key.key_type {
            KeyType::Runes => match key.rune()? {
                '+' | '=' | 'k' => self.apply(Action::Increment),
                '-' | '_' | 'j' => self.apply(Action::Decrement),
                'r' | 'R' | '0' => self.apply(Action::Reset),
                'q' | 'Q' => return Some(quit()),
                _ => {}
            },
            KeyType::Up => self.apply(Action::Increment),
            KeyType::Down => self.apply(Action::Decrement),
            KeyType::PgUp => self.apply(Action::IncrementBy(self.step)),
            KeyType::PgDown => self.apply(Action::DecrementBy(self.step)),
            KeyType::Left | KeyType::ShiftTab => self.focus = self.focus.prev(),
            KeyType::Right | KeyType::Tab => self.focus = self.focus.next(),
            KeyType::Enter | KeyType::Space => self.press(self.focus),
            KeyType::Esc | KeyType::CtrlC => return Some(quit()),
            _ => {}
        }
        None
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) {
        if !mouse.is_left_press() || mouse.y != CONTROLS_ROW {
            return;
        }
        if let Some(control) = controls::hit(mouse.x) {
            trace!(%mouse, ?control, "click");
            self.press(control);
        }
    }
}

impl Default for CounterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for CounterApp {
    fn init(&self) -> Option<Cmd> {
        Some(set_window_title(self.header.title()))
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse);
        }
        None
    }

    fn view(&self) -> String {
        let margin = " ".repeat(usize::from(MARGIN));
        format!(
            "{}\n\n{margin}{}\n\n{}\n\n{}\n",
            self.header.render(&self.theme),
            self.theme.value(self.value),
            controls::render(self.focus, &self.theme),
            self.theme.muted(HELP),
        )
    }
}
