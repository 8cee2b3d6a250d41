use std::path::PathBuf;

use anyhow::anyhow;
use raylib::prelude::*;
use tracing::debug;

use crate::constants::TYPE_SPEED_MS;
use crate::effects::Effects;
use crate::typewriter::Typewriter;

// raylib music streams loop by default
pub struct LoopingTrack<'aud> {
    music: Music<'aud>,
    source: String,
}

impl Drop for LoopingTrack<'_> {
    fn drop(&mut self) {
        // Music's own Drop unloads the stream
        self.music.stop_stream();
        debug!(source = %self.source, "track stopped");
    }
}

pub struct RaylibEffects<'aud> {
    audio: &'aud RaylibAudio,
    assets: PathBuf,
}

impl<'aud> RaylibEffects<'aud> {
    pub fn new(audio: &'aud RaylibAudio, assets: impl Into<PathBuf>) -> Self {
        Self { audio, assets: assets.into() }
    }
}

impl<'aud> Effects for RaylibEffects<'aud> {
    type Typing = Typewriter;
    type Track = LoopingTrack<'aud>;
    type Error = anyhow::Error;

    fn start_typing(&mut self, text: &str) -> anyhow::Result<Typewriter> {
        Ok(Typewriter::new(text, TYPE_SPEED_MS))
    }

    fn play_track(&mut self, source: &str, volume: f32) -> anyhow::Result<LoopingTrack<'aud>> {
        let path = self.assets.join(source);
        let mut music = self
            .audio
            .new_music(&path.to_string_lossy())
            .map_err(|e| anyhow!("failed to load track {}: {}", path.display(), e))?;
        music.set_volume(volume);
        music.play_stream();

        Ok(LoopingTrack { music, source: source.to_string() })
    }

    fn tick_typing(&mut self, typing: &mut Typewriter, dt: f32) {
        typing.advance(dt);
    }

    fn tick_track(&mut self, track: &mut LoopingTrack<'aud>) {
        track.music.update_stream();
    }
}
