//! Typing effect and background track lifecycles.

use std::rc::Rc;

use greeting_card::{CardPresenter, PresentationState};

use crate::helpers::{
    EventLog, FakeEffects, HANDOFF, INITIAL, Event, card_text, deck, max_live_typing, presenter, take,
    track_events,
};

#[test]
fn test_open_starts_initial_track_then_typing() {
    let (mut presenter, log) = presenter(5, 2);
    presenter.open();

    assert_eq!(
        take(&log),
        vec![
            Event::PlayTrack { id: 1, source: INITIAL.to_string(), volume: 0.5 },
            Event::StartTyping { id: 2, text: card_text(0) },
        ]
    );
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(INITIAL));
    assert_eq!(presenter.typing().map(|t| t.text.as_str()), Some("card 0"));
}

#[test]
fn test_typing_released_before_rebinding() {
    let (mut presenter, log) = presenter(5, 4);
    presenter.open();
    take(&log);

    presenter.next();
    assert_eq!(
        take(&log),
        vec![
            Event::StopTyping { id: 2 },
            Event::StartTyping { id: 3, text: card_text(1) },
        ]
    );

    presenter.prev();
    assert_eq!(
        take(&log),
        vec![
            Event::StopTyping { id: 3 },
            Event::StartTyping { id: 4, text: card_text(0) },
        ]
    );
}

#[test]
fn test_never_two_live_typing_handles() {
    let (mut presenter, log) = presenter(8, 6);
    presenter.open();
    for _ in 0..10 {
        presenter.next();
    }
    for _ in 0..3 {
        presenter.prev();
        presenter.next();
        presenter.next();
    }
    assert_eq!(max_live_typing(&log.borrow()), 1);
    assert!(presenter.typing().is_some());
}

#[test]
fn test_handoff_replaces_initial_track() {
    let (mut presenter, log) = presenter(10, 6);
    presenter.open();
    for _ in 0..5 {
        presenter.next();
    }
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(INITIAL));
    take(&log);

    presenter.next();
    assert_eq!(presenter.state(), PresentationState::Open(6));

    let tracks = track_events(&take(&log));
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0], Event::StopTrack { id: 1 });
    assert!(matches!(&tracks[1], Event::PlayTrack { source, volume, .. } if source == HANDOFF && *volume == 0.5));
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(HANDOFF));
}

#[test]
fn test_leaving_handoff_keeps_its_track() {
    let (mut presenter, log) = presenter(10, 6);
    presenter.open();
    for _ in 0..6 {
        presenter.next();
    }
    take(&log);

    presenter.next();
    presenter.prev();
    presenter.prev();
    let events = take(&log);

    // next to 7 and prev to 5 leave audio alone; prev back onto 6 re-fires
    let tracks = track_events(&events);
    assert_eq!(tracks.len(), 2);
    assert!(matches!(tracks[0], Event::StopTrack { .. }));
    assert!(matches!(&tracks[1], Event::PlayTrack { source, .. } if source == HANDOFF));

    presenter.prev();
    assert!(track_events(&take(&log)).is_empty());
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(HANDOFF));
}

#[test]
fn test_reentering_handoff_refires() {
    let (mut presenter, log) = presenter(10, 6);
    presenter.open();
    for _ in 0..6 {
        presenter.next();
    }
    let first = presenter.track().map(|t| t.id);
    take(&log);

    presenter.prev();
    presenter.next();
    assert_eq!(presenter.state(), PresentationState::Open(6));

    let tracks = track_events(&take(&log));
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0], Event::StopTrack { id: first.unwrap() });
    let second = presenter.track().map(|t| t.id);
    assert_ne!(first, second);
}

#[test]
fn test_open_never_hands_off_even_at_index_zero() {
    let (mut presenter, log) = presenter(3, 0);
    presenter.open();
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(INITIAL));
    assert_eq!(track_events(&take(&log)).len(), 1);

    presenter.next();
    presenter.prev();
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(HANDOFF));
}

#[test]
fn test_missing_initial_track_keeps_presenter_running() {
    let log = EventLog::default();
    let effects = FakeEffects::new(&log).with_missing(INITIAL);
    let mut presenter = CardPresenter::new(deck(10, 6), effects);

    assert!(presenter.open());
    assert_eq!(presenter.state(), PresentationState::Open(0));
    assert!(presenter.track().is_none());
    assert!(presenter.typing().is_some());

    for _ in 0..6 {
        presenter.next();
    }
    assert_eq!(presenter.track().map(|t| t.source.as_str()), Some(HANDOFF));
}

#[test]
fn test_update_pumps_live_handles() {
    let (mut presenter, _log) = presenter(5, 2);
    presenter.update(0.5);
    assert!(presenter.typing().is_none());

    presenter.open();
    presenter.update(0.25);
    presenter.update(0.25);
    assert_eq!(presenter.typing().map(|t| t.elapsed), Some(0.5));
    assert_eq!(presenter.track().map(|t| t.pumps), Some(2));
}

#[test]
fn test_teardown_releases_both_handles_once() {
    let (mut presenter, log) = presenter(10, 6);
    presenter.open();
    for _ in 0..3 {
        presenter.next();
    }
    let typing = presenter.typing().map(|t| t.id).unwrap();
    let track = presenter.track().map(|t| t.id).unwrap();
    take(&log);

    drop(presenter);
    assert_eq!(
        take(&log),
        vec![Event::StopTyping { id: typing }, Event::StopTrack { id: track }]
    );
}

#[test]
fn test_teardown_without_opening() {
    let (presenter, log) = presenter(5, 2);
    drop(presenter);
    assert!(log.borrow().is_empty());
    assert_eq!(Rc::strong_count(&log), 1);
}

#[test]
fn test_independent_presenters_do_not_share_handles() {
    let (mut first, first_log) = presenter(5, 2);
    let (mut second, second_log) = presenter(5, 2);
    first.open();
    first.next();
    second.open();
    drop(first);

    assert!(second.typing().is_some());
    assert!(second.track().is_some());
    assert_eq!(max_live_typing(&first_log.borrow()), 1);
    assert_eq!(track_events(&second_log.borrow()).len(), 1);
}
