//! Movement, gravity and axis-separated tile collision.
//!
//! Vertical motion is integrated and resolved first, then horizontal. Each
//! pass pushes the player's hitbox out of any tile it overlaps along that
//! axis only.
use raylib::prelude::*;

use crate::config::PhysicsConfig;
use crate::core::input::InputState;
use crate::core::level::Tile;
use crate::core::player::{Direction, HITBOX_OFFSET_X, HITBOX_OFFSET_Y, Player};

/// Which side of the hitbox touched a tile during the vertical pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    pub floor: bool,
    pub ceiling: bool,
}

/// Strict AABB test: rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}

/// Snappy start/stop: horizontal speed is reset every frame.
pub fn move_player(player: &mut Player, input: &InputState, cfg: &PhysicsConfig) {
    player.vel.x = 0.0;
    if input.right {
        player.vel.x = cfg.run_speed;
        player.dir = Direction::Right;
    }
    if input.left {
        player.vel.x = -cfg.run_speed;
        player.dir = Direction::Left;
    }
    if input.jump {
        player.vel.y = -cfg.jump_velocity;
    }
}

pub fn apply_gravity(player: &mut Player, cfg: &PhysicsConfig) {
    player.vel.y = (player.vel.y + cfg.gravity).min(cfg.max_fall_speed);
}

#[inline]
pub fn apply_vel_x(player: &mut Player, dt: f32) {
    player.rect.x += player.vel.x * dt;
}

#[inline]
pub fn apply_vel_y(player: &mut Player, dt: f32) {
    player.rect.y += player.vel.y * dt;
}

/// The hitbox is taken once, before the pass; every tile is tested against
/// that starting position.
pub fn resolve_collisions_y(player: &mut Player, tiles: &[Tile]) -> VerticalContact {
    let mut contact = VerticalContact::default();
    let hitbox = player.hitbox();
    for tile in tiles {
        let t = &tile.rect;
        if !overlaps(&hitbox, t) {
            continue;
        }
        if hitbox.y > t.y {
            // hitbox is below the tile's top: push down out of its underside
            player.rect.y = t.y + t.height - HITBOX_OFFSET_Y;
            contact.ceiling = true;
        } else {
            player.rect.y = t.y - player.rect.height;
            contact.floor = true;
        }
    }
    contact
}

/// Returns true when a wall was hit. Like the vertical pass, uses the
/// hitbox from before the pass.
pub fn resolve_collisions_x(player: &mut Player, tiles: &[Tile]) -> bool {
    let mut hit = false;
    let hitbox = player.hitbox();
    for tile in tiles {
        let t = &tile.rect;
        if !overlaps(&hitbox, t) {
            continue;
        }
        if hitbox.x > t.x {
            player.rect.x = t.x + t.width - HITBOX_OFFSET_X;
        } else {
            player.rect.x = t.x - player.rect.width + HITBOX_OFFSET_X;
        }
        hit = true;
    }
    hit
}

/// Keeps the sprite from falling past the bottom of the play area.
/// Returns true when the position was corrected.
pub fn clamp_to_floor(player: &mut Player, floor: f32) -> bool {
    let limit = floor - player.rect.height;
    if player.rect.y > limit {
        player.rect.y = limit;
        return true;
    }
    false
}
