//! Player data and hitbox.
use raylib::prelude::*;

pub const PLAYER_SIZE: f32 = 32.0;
pub const HITBOX_OFFSET_X: f32 = 8.0;
pub const HITBOX_OFFSET_Y: f32 = 8.0;
pub const HITBOX_WIDTH: f32 = 16.0;
pub const HITBOX_HEIGHT: f32 = 24.0;

/// Facing direction. The discriminant multiplied into the sprite's source
/// width mirrors it horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left = -1,
    Right = 1,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        self as i32 as f32
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rectangle, // drawn area
    pub vel: Vector2,    // px/s
    pub dir: Direction,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rectangle::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            vel: Vector2::new(0.0, 0.0),
            dir: Direction::Right,
        }
    }

    /// Collision box, narrower and shorter than the drawn sprite.
    pub fn hitbox(&self) -> Rectangle {
        Rectangle::new(
            self.rect.x + HITBOX_OFFSET_X,
            self.rect.y + HITBOX_OFFSET_Y,
            HITBOX_WIDTH,
            HITBOX_HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_faces_right_at_rest() {
        let p = Player::new(10.0, -200.0);
        assert_eq!(p.dir, Direction::Right);
        assert_eq!((p.vel.x, p.vel.y), (0.0, 0.0));
        assert_eq!((p.rect.width, p.rect.height), (32.0, 32.0));
    }

    #[test]
    fn hitbox_is_inset_from_sprite() {
        let p = Player::new(10.0, 20.0);
        let hb = p.hitbox();
        assert_eq!((hb.x, hb.y, hb.width, hb.height), (18.0, 28.0, 16.0, 24.0));
    }

    #[test]
    fn direction_sign_mirrors() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }
}
