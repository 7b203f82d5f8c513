//! Message types.
//!
//! Every input the model sees arrives as a [`Message`]: key presses, mouse
//! clicks, resizes and whatever a [`Cmd`](crate::Cmd) produces.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Any `Send + 'static` value can be wrapped; use [`Message::downcast_ref`]
/// or [`Message::downcast`] to get it back.
///
/// ```rust
/// use counter_tea::Message;
///
/// struct Tick(u8);
///
/// let msg = Message::new(Tick(3));
/// assert!(msg.is::<Tick>());
/// assert_eq!(msg.downcast::<Tick>().map(|t| t.0), Some(3));
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Wrap a value as a message.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Take the inner value if it is an `M`.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Borrow the inner value if it is an `M`.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Whether the inner value is an `M`.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// Ask the program to stop and hand back the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Ctrl+C. The program stops the same way it does for [`QuitMsg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Terminal size, sent at startup and on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

pub(crate) struct SetWindowTitleMsg(pub String);

pub(crate) struct BatchMsg(pub Vec<crate::Cmd>);
