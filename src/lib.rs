pub mod app;
pub mod audio;
pub mod card;
pub mod cli;
pub mod constants;
pub mod deck_data;
pub mod effects;
pub mod logging;
pub mod presenter;
pub mod scene;
pub mod slot;
pub mod state;
pub mod texture_loader;
pub mod tween;
pub mod typewriter;

pub use card::{Card, Deck, DeckError};
pub use effects::Effects;
pub use presenter::CardPresenter;
pub use state::PresentationState;
