use tracing::{debug, info};

use crate::card::{Card, Deck};
use crate::constants::MUSIC_VOLUME;
use crate::effects::Effects;
use crate::slot::ResourceSlot;
use crate::state::PresentationState;

/// How the presenter arrived at the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Opened,
    Navigated,
}

// Sole owner of the typing effect and the background track
pub struct CardPresenter<E: Effects> {
    deck: Deck,
    state: PresentationState,
    effects: E,
    typing: ResourceSlot<E::Typing>,
    track: ResourceSlot<E::Track>,
}

impl<E: Effects> CardPresenter<E> {
    pub fn new(deck: Deck, effects: E) -> Self {
        Self {
            deck,
            state: PresentationState::Closed,
            effects,
            typing: ResourceSlot::new("typing"),
            track: ResourceSlot::new("track"),
        }
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.state.index().and_then(|index| self.deck.card(index))
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn typing(&self) -> Option<&E::Typing> {
        self.typing.get()
    }

    pub fn track(&self) -> Option<&E::Track> {
        self.track.get()
    }

    pub fn can_next(&self) -> bool {
        matches!(self.state, PresentationState::Open(i) if i < self.deck.last_index())
    }

    pub fn can_prev(&self) -> bool {
        matches!(self.state, PresentationState::Open(i) if i > 0)
    }

    /// Opens the envelope. Does nothing once the envelope is already open.
    pub fn open(&mut self) -> bool {
        if self.state.is_open() {
            debug!("envelope already open");
            return false;
        }
        self.state = PresentationState::Open(0);
        info!("envelope opened");

        let source = self.deck.initial_music();
        let effects = &mut self.effects;
        self.track.rebind(source, || effects.play_track(source, MUSIC_VOLUME));

        self.after_transition(Entry::Opened);
        true
    }

    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        if let PresentationState::Open(i) = self.state {
            self.state = PresentationState::Open(i + 1);
        }
        self.after_transition(Entry::Navigated);
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        if let PresentationState::Open(i) = self.state {
            self.state = PresentationState::Open(i - 1);
        }
        self.after_transition(Entry::Navigated);
        true
    }

    /// Per-frame pump for the live handles.
    pub fn update(&mut self, dt: f32) {
        if let Some(typing) = self.typing.get_mut() {
            self.effects.tick_typing(typing, dt);
        }
        if let Some(track) = self.track.get_mut() {
            self.effects.tick_track(track);
        }
    }

    fn after_transition(&mut self, entry: Entry) {
        let PresentationState::Open(index) = self.state else {
            return;
        };
        let Some(card) = self.deck.card(index) else {
            return;
        };
        debug!(index, ?entry, "showing card");

        let effects = &mut self.effects;
        let text = card.text.as_str();
        self.typing.rebind(text, || effects.start_typing(text));

        if entry == Entry::Navigated && index == self.deck.handoff_index() {
            let source = self.deck.handoff_music();
            info!(index, source, "switching background track");
            self.track.rebind(source, || effects.play_track(source, MUSIC_VOLUME));
        }
    }
}

impl<E: Effects> Drop for CardPresenter<E> {
    fn drop(&mut self) {
        self.typing.release();
        self.track.release();
        debug!("presenter torn down");
    }
}
