//! Per-frame simulation: input, gravity, then vertical and horizontal
//! collision passes, then the play-area floor.
use crate::config::PhysicsConfig;
use crate::core::input::InputState;
use crate::core::level::Tile;
use crate::core::physics::{
    apply_gravity, apply_vel_x, apply_vel_y, clamp_to_floor, move_player, resolve_collisions_x,
    resolve_collisions_y,
};
use crate::core::player::Player;

/// What happened during one [`World::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub jumped: bool,
    pub landed: bool,
    pub hit_ceiling: bool,
    pub hit_wall: bool,
}

pub struct World {
    pub player: Player,
    tiles: Vec<Tile>,
    physics: PhysicsConfig,
    grounded: bool,
}

impl World {
    pub fn new(tiles: Vec<Tile>, physics: PhysicsConfig, player: Player) -> Self {
        Self { player, tiles, physics, grounded: false }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Advances one frame. `floor` is the bottom of the play area in pixels.
    pub fn step(&mut self, input: InputState, dt: f32, floor: f32) -> StepEvents {
        let dt = dt.clamp(0.0, self.physics.max_frame_time);
        let mut events = StepEvents { jumped: input.jump, ..Default::default() };

        move_player(&mut self.player, &input, &self.physics);
        apply_gravity(&mut self.player, &self.physics);

        apply_vel_y(&mut self.player, dt);
        let contact = resolve_collisions_y(&mut self.player, &self.tiles);
        apply_vel_x(&mut self.player, dt);
        events.hit_wall = resolve_collisions_x(&mut self.player, &self.tiles);

        let on_floor = clamp_to_floor(&mut self.player, floor);
        let grounded = contact.floor || on_floor;

        events.hit_ceiling = contact.ceiling;
        events.landed = grounded && !self.grounded;
        self.grounded = grounded;

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;

    const DT: f32 = 1.0 / 60.0;
    const FLOOR: f32 = 400.0;

    fn builtin_world() -> World {
        World::new(
            Level::builtin().tiles(32.0),
            PhysicsConfig::default(),
            Player::new(10.0, -200.0),
        )
    }

    fn run(world: &mut World, input: InputState, frames: usize) -> Vec<StepEvents> {
        (0..frames).map(|_| world.step(input, DT, FLOOR)).collect()
    }

    #[test]
    fn player_falls_onto_builtin_ground() {
        let mut world = builtin_world();
        let events = run(&mut world, InputState::default(), 120);

        assert_eq!(world.player.rect.y, 96.0);
        assert_eq!(world.player.rect.x, 10.0);
        assert!(world.is_grounded());
        assert_eq!(events.iter().filter(|e| e.landed).count(), 1);
        assert!(!events[0].landed);
    }

    #[test]
    fn raised_tile_blocks_walking_right() {
        let mut world = builtin_world();
        run(&mut world, InputState::default(), 120);

        let right = InputState { right: true, ..Default::default() };
        let events = run(&mut world, right, 120);

        assert_eq!(world.player.rect.x, 40.0);
        assert_eq!(world.player.rect.y, 96.0);
        assert!(events.iter().any(|e| e.hit_wall));
    }

    #[test]
    fn walking_left_faces_left() {
        let mut world = builtin_world();
        run(&mut world, InputState::default(), 120);
        run(&mut world, InputState { left: true, ..Default::default() }, 2);
        assert_eq!(world.player.dir, crate::core::player::Direction::Left);
        assert!(world.player.rect.x < 10.0);
    }

    #[test]
    fn jump_leaves_the_ground() {
        let mut world = builtin_world();
        run(&mut world, InputState::default(), 120);

        let ev = world.step(InputState { jump: true, ..Default::default() }, DT, FLOOR);
        assert!(ev.jumped);
        assert_eq!(world.player.vel.y, -268.0);
        assert!(world.player.rect.y < 96.0);
        assert!(!world.is_grounded());

        let events = run(&mut world, InputState::default(), 120);
        assert_eq!(world.player.rect.y, 96.0);
        assert_eq!(events.iter().filter(|e| e.landed).count(), 1);
    }

    #[test]
    fn long_frame_while_standing_keeps_player_on_ground() {
        let mut world = builtin_world();
        run(&mut world, InputState::default(), 120);
        assert_eq!(world.player.vel.y, 600.0);

        world.step(InputState::default(), 0.05, FLOOR);
        assert_eq!(world.player.rect.y, 96.0);
        assert!(world.is_grounded());

        run(&mut world, InputState::default(), 60);
        assert_eq!(world.player.rect.y, 96.0);
    }

    #[test]
    fn empty_world_rests_on_play_area_floor() {
        let mut world = World::new(Vec::new(), PhysicsConfig::default(), Player::new(0.0, 0.0));
        run(&mut world, InputState::default(), 200);
        assert_eq!(world.player.rect.y, 368.0);
        assert!(world.is_grounded());
    }

    #[test]
    fn frame_time_is_clamped() {
        let mut world = World::new(Vec::new(), PhysicsConfig::default(), Player::new(0.0, 0.0));
        world.step(InputState { right: true, ..Default::default() }, 1.0, FLOOR);
        assert!((world.player.rect.x - 5.0).abs() < 1e-4);

        let x = world.player.rect.x;
        world.step(InputState { right: true, ..Default::default() }, -1.0, FLOOR);
        assert_eq!(world.player.rect.x, x);
    }
}
