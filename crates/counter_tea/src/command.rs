//! Commands.
//!
//! A [`Cmd`] is a deferred piece of work that yields a [`Message`]. Update
//! functions return commands instead of performing effects themselves; the
//! program runs each command on the event-loop thread and feeds the result
//! back in as the next message.

use crate::message::{BatchMsg, Message, QuitMsg, SetWindowTitleMsg};

/// A command that may produce a message when executed.
///
/// ```rust
/// use counter_tea::{Cmd, Message};
///
/// let cmd = Cmd::new(|| Message::new(7_i64));
/// let msg = cmd.execute().unwrap();
/// assert_eq!(msg.downcast::<i64>(), Some(7));
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a command from a closure that always yields a message.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may yield nothing.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Run the command.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

impl std::fmt::Debug for Cmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cmd").finish_non_exhaustive()
    }
}

/// Combine commands into one. `None`s are dropped.
///
/// Each command in the batch is executed in order and each resulting message
/// is dispatched separately.
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.into_iter().next(),
        _ => Some(Cmd::new(move || Message::new(BatchMsg(valid)))),
    }
}

/// Command that stops the program.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command that sets the terminal window title.
pub fn set_window_title(title: impl Into<String>) -> Cmd {
    let title = title.into();
    Cmd::new(move || Message::new(SetWindowTitleMsg(title)))
}
