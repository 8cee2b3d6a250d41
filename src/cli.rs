use std::path::PathBuf;

use clap::Parser;

use crate::constants::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Parser, Debug, Clone)]
#[command(name = "greeting-card")]
#[command(about = "Animated greeting card: open the envelope and flip through the cards")]
pub struct Args {
    /// Directory holding card images, bg.jpg and the music folder
    #[arg(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}
