//! Sprite textures with procedural fallbacks.
//!
//! Each sprite is looked up on disk first. When the file is missing or raylib
//! can't decode it, a small generated image is uploaded instead so the game
//! still runs without its asset folder.
use std::fmt;
use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;

use crate::config::AssetConfig;

/// Edge length of one source frame in the sprite sheets.
pub const FRAME_SIZE: i32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Tile,
}

impl fmt::Display for SpriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpriteKind::Player => write!(f, "player"),
            SpriteKind::Tile => write!(f, "tile"),
        }
    }
}

#[derive(Debug)]
pub enum AssetError {
    Upload { kind: SpriteKind, reason: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Upload { kind, reason } => {
                write!(f, "could not upload {} texture: {}", kind, reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

pub struct TextureManager {
    player: Texture2D,
    tileset: Texture2D,
}

impl TextureManager {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &AssetConfig,
    ) -> Result<Self, AssetError> {
        let player = load_or_fallback(rl, thread, SpriteKind::Player, &assets.player_texture)?;
        let tileset = load_or_fallback(rl, thread, SpriteKind::Tile, &assets.tileset_texture)?;
        Ok(Self { player, tileset })
    }

    pub fn get(&self, kind: SpriteKind) -> &Texture2D {
        match kind {
            SpriteKind::Player => &self.player,
            SpriteKind::Tile => &self.tileset,
        }
    }
}

fn load_or_fallback(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    kind: SpriteKind,
    path: &str,
) -> Result<Texture2D, AssetError> {
    if Path::new(path).exists() {
        match rl.load_texture(thread, path) {
            Ok(tex) => {
                info!("Loaded {} texture from {}", kind, path);
                return Ok(tex);
            }
            Err(e) => warn!("Failed to load {} texture {}: {}", kind, path, e),
        }
    } else {
        warn!("{} texture {} not found, using fallback", kind, path);
    }

    let pixels = fallback_pixels(kind);
    let mut img = Image::gen_image_color(FRAME_SIZE, FRAME_SIZE, Color::new(0, 0, 0, 0));
    for y in 0..FRAME_SIZE {
        for x in 0..FRAME_SIZE {
            img.draw_pixel(x, y, pixels[(y * FRAME_SIZE + x) as usize]);
        }
    }
    rl.load_texture_from_image(thread, &img)
        .map_err(|e| AssetError::Upload { kind, reason: e.to_string() })
}

/// Row-major RGBA pixels for one fallback frame.
pub fn fallback_pixels(kind: SpriteKind) -> Vec<Color> {
    let n = FRAME_SIZE as u32;
    match kind {
        SpriteKind::Tile => make_checker(n, n, Color::new(120, 84, 52, 255)),
        SpriteKind::Player => make_hero(n, n),
    }
}

fn make_checker(w: u32, h: u32, base: Color) -> Vec<Color> {
    let mut px = vec![base; (w * h) as usize];
    let cell = 4u32;
    for y in 0..h {
        for x in 0..w {
            if ((x / cell) + (y / cell)) % 2 == 0 {
                let i = (y * w + x) as usize;
                px[i] = mix(px[i], Color::WHITE, 40);
            }
        }
    }
    px
}

/// Body with a single eye on the right; drawing with a negative source width
/// puts it on the left.
fn make_hero(w: u32, h: u32) -> Vec<Color> {
    let clear = Color::new(0, 0, 0, 0);
    let body = Color::new(230, 120, 40, 255);
    let eye = Color::new(20, 20, 30, 255);
    let mut px = vec![clear; (w * h) as usize];
    for y in h / 4..h {
        for x in w / 4..w - w / 4 {
            px[(y * w + x) as usize] = body;
        }
    }
    let (ex, ey) = (w - w / 4 - 3, h / 4 + 2);
    px[(ey * w + ex) as usize] = eye;
    px[(ey * w + ex + 1) as usize] = eye;
    px
}

#[inline]
fn mix(a: Color, b: Color, t: u8) -> Color {
    let ta = t as u16;
    let na = 255u16 - ta;
    let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
    Color::new(mixc(a.r, b.r), mixc(a.g, b.g), mixc(a.b, b.b), mixc(a.a, b.a))
}
