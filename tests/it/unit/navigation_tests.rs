//! State transitions of the card presenter.

use greeting_card::PresentationState;

use crate::helpers::{presenter, take};

#[test]
fn test_starts_closed() {
    let (presenter, log) = presenter(5, 2);
    assert_eq!(presenter.state(), PresentationState::Closed);
    assert!(!presenter.can_next());
    assert!(!presenter.can_prev());
    assert!(presenter.current_card().is_none());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_navigation_ignored_while_closed() {
    let (mut presenter, log) = presenter(5, 2);
    assert!(!presenter.next());
    assert!(!presenter.prev());
    assert_eq!(presenter.state(), PresentationState::Closed);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_open_shows_first_card() {
    let (mut presenter, _log) = presenter(5, 2);
    assert!(presenter.open());
    assert_eq!(presenter.state(), PresentationState::Open(0));
    assert_eq!(presenter.current_card().map(|c| c.text.as_str()), Some("card 0"));
    assert!(presenter.can_next());
    assert!(!presenter.can_prev());
}

#[test]
fn test_open_is_a_no_op_once_open() {
    let (mut presenter, log) = presenter(5, 2);
    presenter.open();
    presenter.next();
    presenter.next();
    take(&log);

    assert!(!presenter.open());
    assert_eq!(presenter.state(), PresentationState::Open(2));
    assert!(take(&log).is_empty());
}

#[test]
fn test_next_and_prev_are_clamped_for_every_index() {
    let len = 15;
    for i in 0..len {
        let (mut presenter, _log) = presenter(len, 6);
        presenter.open();
        for _ in 0..i {
            presenter.next();
        }
        assert_eq!(presenter.state(), PresentationState::Open(i));

        let moved = presenter.next();
        assert_eq!(moved, i < len - 1);
        assert_eq!(presenter.state(), PresentationState::Open((i + 1).min(len - 1)));

        // Back to i, then step down
        if moved {
            presenter.prev();
        }
        let moved = presenter.prev();
        assert_eq!(moved, i > 0);
        assert_eq!(presenter.state(), PresentationState::Open(i.saturating_sub(1)));
    }
}

#[test]
fn test_next_at_last_card_keeps_state() {
    let (mut presenter, log) = presenter(4, 1);
    presenter.open();
    while presenter.next() {}
    assert_eq!(presenter.state(), PresentationState::Open(3));
    take(&log);

    assert!(!presenter.can_next());
    assert!(!presenter.next());
    assert_eq!(presenter.state(), PresentationState::Open(3));
    assert!(take(&log).is_empty());
}

#[test]
fn test_prev_at_first_card_keeps_state() {
    let (mut presenter, log) = presenter(4, 1);
    presenter.open();
    take(&log);

    assert!(!presenter.prev());
    assert_eq!(presenter.state(), PresentationState::Open(0));
    assert!(take(&log).is_empty());
}

#[test]
fn test_single_card_deck_has_no_navigation() {
    let (mut presenter, _log) = presenter(1, 0);
    presenter.open();
    assert!(!presenter.can_next());
    assert!(!presenter.can_prev());
    assert!(!presenter.next());
    assert_eq!(presenter.state(), PresentationState::Open(0));
}
