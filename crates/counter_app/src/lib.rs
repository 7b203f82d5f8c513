#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

//! # Counter
//!
//! A terminal counter: one value, a title, and three controls
//! (`-`, `Reset`, `+`). The value lives in [`app::CounterApp`]; all
//! arithmetic is delegated to `counter_core`.
//!
//! ## Modules
//!
//! - [`action`] - transitions applied to the value
//! - [`app`] - the screen model
//! - [`cli`] - command-line arguments
//! - [`config`] - resolved runtime configuration
//! - [`controls`] - control layout and hit testing
//! - [`header`] - title header
//! - [`logging`] - log subscriber setup
//! - [`theme`] - colours

pub mod action;
pub mod app;
pub mod cli;
pub mod config;
pub mod controls;
pub mod header;
pub mod logging;
pub mod theme;

pub use action::Action;
pub use app::CounterApp;
pub use config::Config;
pub use controls::Control;
pub use header::{DEFAULT_TITLE, Header};
