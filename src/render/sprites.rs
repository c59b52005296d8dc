//! Sprite drawing helpers.
//!
//! Exposes:
//! - `draw_tiles`: tileset frame picked by tile kind, stretched over the tile rect
//! - `draw_player`: first idle frame, mirrored by facing direction
use raylib::prelude::*;

use crate::core::level::Tile;
use crate::core::player::{Direction, Player};
use crate::render::textures::FRAME_SIZE;

pub const BACKGROUND: Color = Color::SKYBLUE;
const TINT: Color = Color::RAYWHITE;

/// Source rect of the first frame; a negative width flips it horizontally.
pub fn frame_source(dir: Direction) -> Rectangle {
    let size = FRAME_SIZE as f32;
    Rectangle::new(0.0, 0.0, size * dir.sign(), size)
}

/// Kind 1 is the first frame of the tileset; higher kinds step right one
/// frame each.
pub fn tile_source(kind: u8) -> Rectangle {
    let size = FRAME_SIZE as f32;
    let column = kind.saturating_sub(1) as f32;
    Rectangle::new(column * size, 0.0, size, size)
}

pub fn draw_tiles<D: RaylibDraw>(d: &mut D, tiles: &[Tile], texture: &Texture2D) {
    for tile in tiles {
        let src = tile_source(tile.kind);
        d.draw_texture_pro(texture, src, tile.rect, Vector2::new(0.0, 0.0), 0.0, TINT);
    }
}

pub fn draw_player<D: RaylibDraw>(d: &mut D, player: &Player, texture: &Texture2D) {
    d.draw_texture_pro(
        texture,
        frame_source(player.dir),
        player.rect,
        Vector2::new(0.0, 0.0),
        0.0,
        TINT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_width_follows_direction() {
        let left = frame_source(Direction::Left);
        let right = frame_source(Direction::Right);
        assert_eq!((left.width, left.height), (-16.0, 16.0));
        assert_eq!((right.width, right.height), (16.0, 16.0));
        assert_eq!((right.x, right.y), (0.0, 0.0));
    }

    #[test]
    fn tile_kind_selects_tileset_column() {
        let first = tile_source(1);
        assert_eq!((first.x, first.y, first.width, first.height), (0.0, 0.0, 16.0, 16.0));
        assert_eq!(tile_source(3).x, 32.0);
        assert_eq!(tile_source(0).x, 0.0);
    }
}
