//! The real event loop, fed from a channel instead of a terminal.

#![forbid(unsafe_code)]

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use counter_app::theme::Theme;
use counter_app::{Control, CounterApp};
use counter_tea::{KeyMsg, KeyType, Message, Program, QuitMsg};

fn run_session(msgs: Vec<Message>) -> (CounterApp, String) {
    let (tx, rx) = mpsc::channel();
    for msg in msgs {
        tx.send(msg).unwrap();
    }

    let program = Program::new(CounterApp::new().with_theme(Theme::plain()))
        .with_custom_io()
        .with_input_receiver(rx);

    let mut out = Vec::new();
    let app = program.run_with_writer(&mut out).unwrap();
    (app, String::from_utf8_lossy(&out).into_owned())
}

#[test]
fn keys_then_quit() {
    let (app, out) = run_session(vec![
        Message::new(KeyMsg::from_char('+')),
        Message::new(KeyMsg::from_char('+')),
        Message::new(KeyMsg::from_char('+')),
        Message::new(KeyMsg::from_char('-')),
        Message::new(QuitMsg),
    ]);

    assert_eq!(app.value(), 2);
    assert!(out.contains("React Counter App"));
    assert!(out.contains("[ Reset ]"));
}

#[test]
fn quit_key_ends_the_loop() {
    let (app, _) = run_session(vec![
        Message::new(KeyMsg::from_char('-')),
        Message::new(KeyMsg::from_char('q')),
    ]);
    assert_eq!(app.value(), -1);
}

#[test]
fn frames_use_crlf() {
    let (_, out) = run_session(vec![
        Message::new(KeyMsg::from_type(KeyType::Enter)),
        Message::new(QuitMsg),
    ]);
    assert!(out.contains("\r\n"));
}

#[test]
fn focus_survives_the_loop() {
    let (app, _) = run_session(vec![
        Message::new(KeyMsg::from_type(KeyType::Left)),
        Message::new(KeyMsg::from_type(KeyType::Left)),
        Message::new(KeyMsg::from_type(KeyType::Enter)),
        Message::new(QuitMsg),
    ]);
    assert_eq!(app.focus(), Control::Decrement);
    assert_eq!(app.value(), -1);
}

#[test]
fn closed_input_ends_the_loop() {
    let (tx, rx) = mpsc::channel();
    tx.send(Message::new(KeyMsg::from_char('+'))).unwrap();
    drop(tx);

    let (done_tx, done_rx) = mpsc::channel();
    thread::spawn(move || {
        let result = Program::new(CounterApp::new())
            .with_custom_io()
            .with_input_receiver(rx)
            .run_with_writer(Vec::new());
        let _ = done_tx.send(result.map(|app| app.value()));
    });

    let value = done_rx
        .recv_timeout(Duration::from_secs(3))
        .expect("loop returns once input is closed")
        .unwrap();
    assert_eq!(value, 1);
}
