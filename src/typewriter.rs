use crate::constants::{CURSOR_BLINK_PERIOD, CURSOR_CHAR};

#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    seconds_per_char: f32,
    elapsed: f32,
    revealed_chars: usize,
    revealed_bytes: usize,
    total_chars: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, ms_per_char: f32) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Self {
            text,
            seconds_per_char: (ms_per_char / 1000.0).max(f32::EPSILON),
            elapsed: 0.0,
            revealed_chars: 0,
            revealed_bytes: 0,
            total_chars,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        let target = ((self.elapsed / self.seconds_per_char) as usize).min(self.total_chars);
        if target != self.revealed_chars {
            self.revealed_chars = target;
            self.revealed_bytes = self
                .text
                .char_indices()
                .nth(target)
                .map_or(self.text.len(), |(offset, _)| offset);
        }
    }

    pub fn visible_text(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_chars >= self.total_chars
    }

    pub fn cursor_visible(&self) -> bool {
        (self.elapsed % CURSOR_BLINK_PERIOD) < CURSOR_BLINK_PERIOD * 0.5
    }

    /// Revealed text followed by the cursor glyph while it is lit.
    pub fn rendered(&self) -> String {
        let mut out = String::with_capacity(self.revealed_bytes + CURSOR_CHAR.len_utf8());
        out.push_str(self.visible_text());
        if self.cursor_visible() {
            out.push(CURSOR_CHAR);
        }
        out
    }
}
