pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 800;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MUSIC_VOLUME: f32 = 0.5;            // Volume for every background track
pub const TYPE_SPEED_MS: f32 = 50.0;          // Milliseconds per typed character
pub const CURSOR_CHAR: char = '|';            // Typewriter cursor glyph
pub const CURSOR_BLINK_PERIOD: f32 = 0.7;     // Cursor blink cycle (seconds)

pub const HANDOFF_INDEX: usize = 6;           // Card that switches the background track
pub const PORTRAIT_INDEX: usize = 14;         // Card drawn with the framed portrait layout

pub const ENVELOPE_EXIT_DURATION: f32 = 1.4;  // Envelope spin-and-shrink (seconds)
pub const ENVELOPE_EXIT_TURNS: f32 = 720.0;   // Envelope rotation while leaving (degrees)
pub const CONTENT_ENTER_DURATION: f32 = 0.8;  // Card area scale-in (seconds)
pub const CONTENT_ENTER_DELAY: f32 = 0.5;     // Delay before the card area appears (seconds)
pub const CARD_FADE_DURATION: f32 = 0.4;      // Per-card fade-in (seconds)
pub const CARD_FADE_START_SCALE: f32 = 0.9;   // Per-card fade-in starting scale
pub const ENVELOPE_BOUNCE_PERIOD: f32 = 1.0;  // Envelope glyph bounce cycle (seconds)
