#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]

//! # counter_tea
//!
//! A small runtime for terminal applications built on The Elm Architecture.
//!
//! An application is a [`Model`] with three methods:
//!
//! - `init` returns an optional startup [`Cmd`]
//! - `update` consumes a [`Message`] and may return a [`Cmd`]
//! - `view` renders the model as a string
//!
//! [`Program`] owns the terminal, turns crossterm events into messages and
//! re-renders after every update. [`simulator::ProgramSimulator`] drives a
//! model without a terminal for tests.
//!
//! ```rust
//! use counter_tea::{Cmd, KeyMsg, Message, Model};
//! use counter_tea::simulator::ProgramSimulator;
//!
//! struct Clicks(u32);
//!
//! impl Model for Clicks {
//!     fn init(&self) -> Option<Cmd> { None }
//!
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if msg.is::<KeyMsg>() {
//!             self.0 += 1;
//!         }
//!         None
//!     }
//!
//!     fn view(&self) -> String { format!("clicks: {}", self.0) }
//! }
//!
//! let mut sim = ProgramSimulator::new(Clicks(0));
//! sim.send(Message::new(KeyMsg::from_char('x')));
//! sim.run_until_empty();
//! assert_eq!(sim.last_view(), Some("clicks: 1"));
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod mouse;
pub mod program;
pub mod simulator;

pub use command::{Cmd, batch, quit, set_window_title};
pub use key::{KeyMsg, KeyType};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use program::{Error, Model, Program, ProgramOptions, Result};
