//! Input tests - terminal key events through the queue into a session

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use blockfall::core::{GameConfig, PieceSource};
use blockfall::engine::Session;
use blockfall::input::{handle_key_event, InputQueue};
use blockfall::types::{Flow, LogicalKey, PieceKind, SessionState};

fn queue_from(events: &[KeyEvent]) -> InputQueue {
    let mut queue = InputQueue::new();
    for &event in events {
        if let Some(key) = handle_key_event(event) {
            queue.push(key);
        }
    }
    queue
}

#[test]
fn test_unbound_keys_never_reach_the_queue() {
    let queue = queue_from(&[
        KeyEvent::from(KeyCode::Char('x')),
        KeyEvent::from(KeyCode::Tab),
        KeyEvent::from(KeyCode::F(1)),
    ]);
    assert!(queue.is_empty());
}

#[test]
fn test_frame_of_keys_drives_session() {
    let mut session =
        Session::with_source(GameConfig::default(), PieceSource::cycle([PieceKind::O])).unwrap();

    let queue = queue_from(&[
        KeyEvent::from(KeyCode::Left),
        KeyEvent::from(KeyCode::Left),
        KeyEvent::from(KeyCode::Char(' ')),
        KeyEvent::from(KeyCode::Char('p')),
    ]);
    assert_eq!(
        queue.as_slice(),
        &[
            LogicalKey::MoveLeft,
            LogicalKey::MoveLeft,
            LogicalKey::HardDrop,
            LogicalKey::Pause
        ]
    );

    assert_eq!(session.step(queue.as_slice(), 16), Flow::Continue);
    assert_eq!(session.state(), SessionState::Paused);
    assert_eq!(session.engine().board().get(2, 19), Some(Some(PieceKind::O)));
}

#[test]
fn test_ctrl_c_quits() {
    let mut session = Session::new(3);
    let queue = queue_from(&[
        KeyEvent::from(KeyCode::Down),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ]);
    assert_eq!(session.step(queue.as_slice(), 16), Flow::Quit);
}
