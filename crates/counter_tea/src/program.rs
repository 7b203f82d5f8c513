//! Program lifecycle and event loop.
//!
//! [`Program`] sets up the terminal, translates crossterm events into
//! messages, dispatches them to the model one at a time and renders the view
//! after each round of updates.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::{debug, trace};

use crate::command::Cmd;
use crate::key::{KeyType, from_crossterm_key};
use crate::message::{
    BatchMsg, InterruptMsg, Message, QuitMsg, SetWindowTitleMsg, WindowSizeMsg,
};
use crate::mouse::from_crossterm_mouse;

/// Errors that can occur while running a [`Program`].
///
/// | Variant | Usual cause |
/// |---------|-------------|
/// | [`Io`](Error::Io) | Terminal control sequence failed |
/// | [`RawModeFailure`](Error::RawModeFailure) | Not attached to a TTY |
/// | [`AltScreenFailure`](Error::AltScreenFailure) | Terminal lacks an alternate screen |
/// | [`EventPoll`](Error::EventPoll) | Terminal disconnected |
/// | [`Render`](Error::Render) | Output stream closed |
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// `"enable"` or `"disable"`.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or leave the alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// `"enter"` or `"leave"`.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll or read terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to write the view.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// Result alias for program operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The application model.
///
/// ```rust
/// use counter_tea::{Cmd, Message, Model};
///
/// struct Total(i64);
///
/// impl Model for Total {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i64>() {
///             self.0 += n;
///         }
///         None
///     }
///
///     fn view(&self) -> String { format!("Total: {}", self.0) }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Called once at startup; may return a command to run first.
    fn init(&self) -> Option<Cmd>;

    /// Apply a message to the model.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model. Must not have side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Report mouse presses, releases and drags.
    pub mouse_cell_motion: bool,
    /// Skip terminal setup and crossterm polling; input comes from
    /// [`Program::with_input_receiver`].
    pub custom_io: bool,
    /// Target frames per second.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse_cell_motion: false,
            custom_io: false,
            fps: 60,
        }
    }
}

/// The program runner.
///
/// ```rust,ignore
/// let final_model = Program::new(model)
///     .with_alt_screen()
///     .with_mouse_cell_motion()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
    external_rx: Option<Receiver<Message>>,
}

impl<M: Model> Program<M> {
    /// Create a program for `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
            external_rx: None,
        }
    }

    /// Forward messages from `rx` into the event loop.
    pub fn with_input_receiver(mut self, rx: Receiver<Message>) -> Self {
        self.external_rx = Some(rx);
        self
    }

    /// Use the alternate screen buffer (full-screen mode).
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Enable mouse press/release/drag reporting.
    pub fn with_mouse_cell_motion(mut self) -> Self {
        self.options.mouse_cell_motion = true;
        self
    }

    /// Set the target frame rate, clamped to 1..=120.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Skip raw mode and crossterm polling.
    ///
    /// Input then comes only from [`Program::with_input_receiver`]. The loop
    /// returns the model once every sender has been dropped and all queued
    /// messages are handled.
    pub fn with_custom_io(mut self) -> Self {
        self.options.custom_io = true;
        self
    }

    /// Current options.
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Run on stdout and return the final model.
    pub fn run(self) -> Result<M> {
        self.run_with_writer(io::stdout())
    }

    /// Run with a custom writer and return the final model.
    ///
    /// The terminal is restored before returning, whether the loop ended
    /// normally or with an error.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        if !options.custom_io {
            enable_raw_mode().map_err(|source| Error::RawModeFailure {
                action: "enable",
                source,
            })?;
        }

        if options.alt_screen {
            if let Err(source) = execute!(writer, EnterAlternateScreen) {
                if !options.custom_io {
                    let _ = disable_raw_mode();
                }
                return Err(Error::AltScreenFailure {
                    action: "enter",
                    source,
                });
            }
        }

        let setup = execute!(writer, Hide).and_then(|()| {
            if options.mouse_cell_motion {
                execute!(writer, EnableMouseCapture)
            } else {
                Ok(())
            }
        });

        let result = match setup {
            Ok(()) => self.event_loop(&mut writer),
            Err(e) => Err(Error::Io(e)),
        };

        if options.mouse_cell_motion {
            let _ = execute!(writer, DisableMouseCapture);
        }
        let _ = execute!(writer, Show);
        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }
        if !options.custom_io {
            let _ = disable_raw_mode();
        }

        debug!(ok = result.is_ok(), "program exited");
        result
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();

        // Finishes once every external sender is gone.
        let forwarder = self.external_rx.take().map(|ext_rx| {
            let tx = tx.clone();
            thread::spawn(move || {
                while let Ok(msg) = ext_rx.recv() {
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            })
        });

        if !self.options.custom_io {
            if let Ok((width, height)) = terminal::size() {
                let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
            }
        }

        if let Some(cmd) = self.model.init() {
            dispatch_command(cmd, &tx);
        }

        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            let mut first = None;
            if self.options.custom_io {
                // Wait for the oldest pending message; the rest are drained below.
                match rx.recv_timeout(frame) {
                    Ok(msg) => first = Some(msg),
                    Err(_) => {
                        if !input_closed(forwarder.as_ref()) {
                            continue;
                        }
                        // The forwarder may have sent its last message just before exiting.
                        match rx.try_recv() {
                            Ok(msg) => first = Some(msg),
                            Err(_) => {
                                debug!("input closed");
                                return Ok(self.model);
                            }
                        }
                    }
                }
            } else if event::poll(frame).map_err(Error::EventPoll)? {
                if let Some(msg) = translate_event(event::read().map_err(Error::EventPoll)?) {
                    let _ = tx.send(msg);
                }
            }

            let mut needs_render = false;
            let pending = first
                .into_iter()
                .chain(std::iter::from_fn(|| rx.try_recv().ok()));
            for msg in pending {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    if needs_render {
                        self.render(writer, &mut last_view)?;
                    }
                    return Ok(self.model);
                }

                if let Some(title) = msg.downcast_ref::<SetWindowTitleMsg>() {
                    execute!(writer, terminal::SetTitle(&title.0))?;
                    continue;
                }

                if msg.is::<BatchMsg>() {
                    if let Some(batch) = msg.downcast::<BatchMsg>() {
                        for cmd in batch.0 {
                            dispatch_command(cmd, &tx);
                        }
                    }
                    continue;
                }

                if let Some(cmd) = self.model.update(msg) {
                    dispatch_command(cmd, &tx);
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }

        trace!(bytes = view.len(), "render");
        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode does not translate LF into CRLF.
        let frame = view.replace('\n', "\r\n");
        writer
            .write_all(frame.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

/// Whether no more external input can arrive in custom I/O mode.
fn input_closed(forwarder: Option<&JoinHandle<()>>) -> bool {
    forwarder.is_none_or(JoinHandle::is_finished)
}

/// Run `cmd` to completion and queue whatever it yields.
fn dispatch_command(cmd: Cmd, tx: &Sender<Message>) {
    if let Some(msg) = cmd.execute() {
        let _ = tx.send(msg);
    }
}

fn translate_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            let key = from_crossterm_key(key_event.code, key_event.modifiers)?;
            if key.key_type == KeyType::CtrlC {
                Some(Message::new(InterruptMsg))
            } else {
                Some(Message::new(key))
            }
        }
        Event::Mouse(mouse_event) => from_crossterm_mouse(mouse_event).map(Message::new),
        Event::Resize(width, height) => Some(Message::new(WindowSizeMsg { width, height })),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyMsg;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_fps_is_clamped() {
        struct Noop;
        impl Model for Noop {
            fn init(&self) -> Option<Cmd> {
                None
            }
            fn update(&mut self, _msg: Message) -> Option<Cmd> {
                None
            }
            fn view(&self) -> String {
                String::new()
            }
        }

        assert_eq!(Program::new(Noop).with_fps(0).options().fps, 1);
        assert_eq!(Program::new(Noop).with_fps(500).options().fps, 120);
        assert_eq!(Program::new(Noop).options().fps, 60);
    }

    struct Sum(i64);

    impl Model for Sum {
        fn init(&self) -> Option<Cmd> {
            None
        }
        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(n) = msg.downcast::<i64>() {
                self.0 += n;
            }
            None
        }
        fn view(&self) -> String {
            format!("sum {}", self.0)
        }
    }

    #[test]
    fn test_custom_io_without_input_returns() {
        let model = Program::new(Sum(0))
            .with_custom_io()
            .run_with_writer(Vec::new())
            .unwrap();
        assert_eq!(model.0, 0);
    }

    #[test]
    fn test_closed_input_drains_then_returns() {
        let (tx, rx) = mpsc::channel();
        for n in [1_i64, 2, 3] {
            tx.send(Message::new(n)).unwrap();
        }
        drop(tx);

        let mut out = Vec::new();
        let model = Program::new(Sum(0))
            .with_custom_io()
            .with_input_receiver(rx)
            .run_with_writer(&mut out)
            .unwrap();
        assert_eq!(model.0, 6);
        assert!(String::from_utf8_lossy(&out).contains("sum 6"));
    }

    #[test]
    fn test_translate_key_press() {
        let msg = translate_event(key_event(
            KeyCode::Char('+'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ))
        .unwrap();
        assert_eq!(msg.downcast::<KeyMsg>(), Some(KeyMsg::from_char('+')));
    }

    #[test]
    fn test_translate_ignores_release() {
        let msg = translate_event(key_event(
            KeyCode::Char('+'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(msg.is_none());
    }

    #[test]
    fn test_translate_ctrl_c_interrupts() {
        let msg = translate_event(key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ))
        .unwrap();
        assert!(msg.is::<InterruptMsg>());
    }

    #[test]
    fn test_translate_resize() {
        let msg = translate_event(Event::Resize(100, 30)).unwrap();
        assert_eq!(
            msg.downcast::<WindowSizeMsg>(),
            Some(WindowSizeMsg {
                width: 100,
                height: 30
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Error::RawModeFailure {
            action: "enable",
            source: io::Error::other("not a tty"),
        };
        assert_eq!(err.to_string(), "failed to enable raw mode: not a tty");
    }
}
