//! Headless program driver for tests.
//!
//! [`ProgramSimulator`] runs the same init → update → view cycle as
//! [`Program`](crate::Program) without touching a terminal, and records every
//! rendered view.

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::message::{BatchMsg, InterruptMsg, Message, QuitMsg, SetWindowTitleMsg};
use crate::Model;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times `init()` was called.
    pub init_calls: usize,
    /// Number of times `update()` was called.
    pub update_calls: usize,
    /// Number of times `view()` was called.
    pub view_calls: usize,
    /// Commands returned from `init`/`update`.
    pub commands_returned: usize,
    /// Whether a quit or interrupt was processed.
    pub quit_requested: bool,
}

/// Drives a [`Model`] without a terminal.
///
/// ```rust
/// use counter_tea::{Cmd, Message, Model, simulator::ProgramSimulator};
///
/// struct Sum(i64);
///
/// impl Model for Sum {
///     fn init(&self) -> Option<Cmd> { None }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i64>() {
///             self.0 += n;
///         }
///         None
///     }
///     fn view(&self) -> String { format!("Sum: {}", self.0) }
/// }
///
/// let mut sim = ProgramSimulator::new(Sum(0));
/// sim.send(Message::new(5_i64));
/// sim.send(Message::new(3_i64));
/// sim.run_until_empty();
///
/// assert_eq!(sim.model().0, 8);
/// assert_eq!(sim.last_view(), Some("Sum: 8"));
/// ```
pub struct ProgramSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    window_title: Option<String>,
    initialized: bool,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a simulator for `model`.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            window_title: None,
            initialized: false,
        }
    }

    /// Call `init()` once, render the first view and queue the result of
    /// any startup command.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        if let Some(cmd) = self.model.init() {
            self.stats.commands_returned += 1;
            self.queue_command(cmd);
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    /// Queue a message.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Queue several messages in order.
    pub fn send_all<I: IntoIterator<Item = Message>>(&mut self, msgs: I) {
        self.input_queue.extend(msgs);
    }

    /// Process one queued message.
    ///
    /// Any command returned by `update` is executed immediately and its
    /// message queued behind the existing ones. Returns `false` when there
    /// was nothing to process or the program has quit.
    pub fn step(&mut self) -> bool {
        self.init();

        if self.stats.quit_requested {
            return false;
        }

        let Some(msg) = self.input_queue.pop_front() else {
            return false;
        };

        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
            return true;
        }

        if msg.is::<SetWindowTitleMsg>() {
            self.window_title = msg.downcast::<SetWindowTitleMsg>().map(|t| t.0);
            return true;
        }

        if msg.is::<BatchMsg>() {
            if let Some(batch) = msg.downcast::<BatchMsg>() {
                for cmd in batch.0 {
                    self.queue_command(cmd);
                }
            }
            return true;
        }

        self.stats.update_calls += 1;
        if let Some(cmd) = self.model.update(msg) {
            self.stats.commands_returned += 1;
            self.queue_command(cmd);
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
        true
    }

    /// Process messages until the queue is empty or quit is requested.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while self.step() {
            processed += 1;
        }
        processed
    }

    /// Current model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator and return the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Every rendered view, oldest first.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// The most recent view.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// The last window title requested by a command.
    pub fn window_title(&self) -> Option<&str> {
        self.window_title.as_deref()
    }

    /// Whether quit has been processed.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Number of queued messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }

    fn queue_command(&mut self, cmd: Cmd) {
        if let Some(msg) = cmd.execute() {
            self.input_queue.push_back(msg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyMsg, quit};

    struct Echo {
        seen: Vec<char>,
    }

    impl Model for Echo {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            let key = msg.downcast::<KeyMsg>()?;
            let c = key.rune()?;
            if c == 'q' {
                return Some(quit());
            }
            self.seen.push(c);
            None
        }

        fn view(&self) -> String {
            self.seen.iter().collect()
        }
    }

    fn keys(s: &str) -> Vec<Message> {
        s.chars().map(|c| Message::new(KeyMsg::from_char(c))).collect()
    }

    #[test]
    fn test_initial_view_is_recorded() {
        let mut sim = ProgramSimulator::new(Echo { seen: Vec::new() });
        sim.init();
        sim.init();
        assert_eq!(sim.stats().init_calls, 1);
        assert_eq!(sim.views(), [String::new()]);
    }

    #[test]
    fn test_messages_processed_in_order() {
        let mut sim = ProgramSimulator::new(Echo { seen: Vec::new() });
        sim.send_all(keys("abc"));
        assert_eq!(sim.pending_count(), 3);
        assert_eq!(sim.run_until_empty(), 3);
        assert_eq!(sim.last_view(), Some("abc"));
        assert_eq!(sim.stats().update_calls, 3);
        assert_eq!(sim.stats().view_calls, 4);
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut sim = ProgramSimulator::new(Echo { seen: Vec::new() });
        sim.send_all(keys("abq"));
        sim.run_until_empty();
        assert!(sim.is_quit());

        sim.send_all(keys("cd"));
        assert_eq!(sim.run_until_empty(), 0);
        assert_eq!(sim.model().seen, vec!['a', 'b']);
        assert_eq!(sim.pending_count(), 2);
    }

    #[test]
    fn test_window_title_is_captured() {
        let mut sim = ProgramSimulator::new(Echo { seen: Vec::new() });
        sim.send(Message::new(SetWindowTitleMsg("Echo".into())));
        sim.run_until_empty();
        assert_eq!(sim.window_title(), Some("Echo"));
        assert_eq!(sim.stats().update_calls, 0);
    }

    #[test]
    fn test_interrupt_quits() {
        let mut sim = ProgramSimulator::new(Echo { seen: Vec::new() });
        sim.send(Message::new(InterruptMsg));
        sim.send_all(keys("x"));
        sim.run_until_empty();
        assert!(sim.is_quit());
        assert!(sim.into_model().seen.is_empty());
    }
}
