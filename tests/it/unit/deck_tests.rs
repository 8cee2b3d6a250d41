//! Built-in deck contents.

use greeting_card::constants::{HANDOFF_INDEX, PORTRAIT_INDEX};
use greeting_card::deck_data::{INITIAL_MUSIC, builtin_deck};

#[test]
fn test_builtin_deck_is_valid() {
    let deck = builtin_deck().expect("built-in deck validates");
    assert_eq!(deck.len(), 15);
    assert_eq!(deck.handoff_index(), HANDOFF_INDEX);
    assert_eq!(deck.initial_music(), INITIAL_MUSIC);
}

#[test]
fn test_only_the_handoff_card_has_music() {
    let deck = builtin_deck().unwrap();
    let with_music: Vec<usize> = deck
        .cards()
        .iter()
        .enumerate()
        .filter(|(_, card)| card.music.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(with_music, vec![HANDOFF_INDEX]);
    assert_ne!(deck.handoff_music(), INITIAL_MUSIC);
}

#[test]
fn test_portrait_card_is_last() {
    let deck = builtin_deck().unwrap();
    assert_eq!(PORTRAIT_INDEX, deck.last_index());
    assert!(deck.is_portrait(PORTRAIT_INDEX));
    assert!((0..PORTRAIT_INDEX).all(|i| !deck.is_portrait(i)));
}

#[test]
fn test_every_card_has_text_and_image() {
    let deck = builtin_deck().unwrap();
    for card in deck.cards() {
        assert!(!card.text.trim().is_empty());
        assert!(!card.image.is_empty());
    }
}
