use std::fmt::Display;

// Handles release themselves in Drop
pub trait Effects {
    type Typing;
    type Track;
    type Error: Display;

    fn start_typing(&mut self, text: &str) -> Result<Self::Typing, Self::Error>;
    fn play_track(&mut self, source: &str, volume: f32) -> Result<Self::Track, Self::Error>;

    fn tick_typing(&mut self, _typing: &mut Self::Typing, _dt: f32) {}
    fn tick_track(&mut self, _track: &mut Self::Track) {}
}
