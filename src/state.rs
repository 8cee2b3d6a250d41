#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PresentationState {
    #[default]
    Closed,      // Envelope still sealed
    Open(usize), // Envelope opened, showing the card at this index
}

impl PresentationState {
    pub fn is_open(self) -> bool {
        matches!(self, PresentationState::Open(_))
    }

    pub fn index(self) -> Option<usize> {
        match self {
            PresentationState::Closed => None,
            PresentationState::Open(index) => Some(index),
        }
    }
}
