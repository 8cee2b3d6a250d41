use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::card::Deck;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("failed to upload {path} to the GPU: {message}")]
    Upload { path: PathBuf, message: String },
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, AssetError> {
    let file_bytes = fs::read(image_path).map_err(|source| AssetError::Io {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG containers
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes).map_err(|e| {
        AssetError::Decode {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(path = %image_path.display(), orientation, "decoded image");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Upload {
            path: image_path.to_path_buf(),
            message: e.to_string(),
        })
}

fn read_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            debug!(path = %image_path.display(), error = %e, "no EXIF data");
            1
        }
    }
}

/// GPU textures for the background and every card, indexed like the deck.
///
/// Images that fail to load are logged and left as `None`.
pub struct CardTextures {
    pub background: Option<Texture2D>,
    pub cards: Vec<Option<Texture2D>>,
}

impl CardTextures {
    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &Path,
        background: &str,
        deck: &Deck,
    ) -> Self {
        let mut load = |relative: &str| {
            let path = assets.join(relative);
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(error = %e, "image unavailable");
                    None
                }
            }
        };

        let background = load(background);
        let cards = deck.cards().iter().map(|card| load(&card.image)).collect();
        Self { background, cards }
    }

    pub fn card(&self, index: usize) -> Option<&Texture2D> {
        self.cards.get(index).and_then(Option::as_ref)
    }
}
