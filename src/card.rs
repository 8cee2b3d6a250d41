use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub text: String,
    pub image: String,
    pub music: Option<String>,
}

impl Card {
    pub fn new(text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: image.into(),
            music: None,
        }
    }

    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = Some(music.into());
        self
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,

    #[error("handoff index {index} is outside a deck of {len} cards")]
    HandoffOutOfRange { index: usize, len: usize },

    #[error("handoff card {index} has no music track")]
    HandoffWithoutMusic { index: usize },

    #[error("portrait index {index} is outside a deck of {len} cards")]
    PortraitOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    initial_music: String,
    handoff_index: usize,
    portrait_index: Option<usize>,
}

impl Deck {
    pub fn new(
        cards: Vec<Card>,
        initial_music: impl Into<String>,
        handoff_index: usize,
    ) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let Some(handoff) = cards.get(handoff_index) else {
            return Err(DeckError::HandoffOutOfRange {
                index: handoff_index,
                len: cards.len(),
            });
        };
        if handoff.music.is_none() {
            return Err(DeckError::HandoffWithoutMusic { index: handoff_index });
        }

        Ok(Self {
            cards,
            initial_music: initial_music.into(),
            handoff_index,
            portrait_index: None,
        })
    }

    pub fn with_portrait(mut self, index: usize) -> Result<Self, DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::PortraitOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        self.portrait_index = Some(index);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: `new` rejects empty decks.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn initial_music(&self) -> &str {
        &self.initial_music
    }

    pub fn handoff_index(&self) -> usize {
        self.handoff_index
    }

    pub fn handoff_music(&self) -> &str {
        // Checked in `new`
        self.cards[self.handoff_index].music.as_deref().unwrap_or(&self.initial_music)
    }

    pub fn is_portrait(&self, index: usize) -> bool {
        self.portrait_index == Some(index)
    }
}
