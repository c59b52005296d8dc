// main.rs
mod audio;
mod config;
mod core;
mod render;

use std::env;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::audio::AudioManager;
use crate::config::{DEFAULT_CONFIG_PATH, GameConfig};
use crate::core::input::InputState;
use crate::core::level::{Level, load_level};
use crate::core::player::Player;
use crate::core::world::{StepEvents, World};
use crate::render::sprites::{BACKGROUND, draw_player, draw_tiles};
use crate::render::textures::{SpriteKind, TextureManager};

fn log_events(events: &StepEvents, was_grounded: bool, world: &World) {
    let (x, y) = (world.player.rect.x, world.player.rect.y);
    if events.jumped {
        let from = if was_grounded { "ground" } else { "air" };
        debug!("jump from {} at ({:.1}, {:.1})", from, x, y);
    }
    if events.landed {
        debug!("landed at ({:.1}, {:.1})", x, y);
    }
    if events.hit_ceiling {
        debug!("bumped ceiling at ({:.1}, {:.1})", x, y);
    }
    if events.hit_wall {
        log::trace!("pressing against wall at ({:.1}, {:.1})", x, y);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Tile platformer starting...");

    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("reading config {}", config_path))?;

    let level = match &config.level.path {
        Some(path) => load_level(path).with_context(|| format!("loading level {}", path))?,
        None => Level::builtin(),
    };
    info!(
        "Level {}x{} with {} solid tiles",
        level.width,
        level.height,
        level.solid_count()
    );

    let (mut window, raylib_thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .build();
    window.set_target_fps(config.window.target_fps);

    let texman = TextureManager::new(&mut window, &raylib_thread, &config.assets)
        .context("preparing textures")?;

    let mut audio = AudioManager::new();
    match audio.as_mut() {
        Some(a) => a.load_jump(&[config.assets.jump_sound.as_str()]),
        None => warn!("Running without sound"),
    }

    let player = Player::new(config.level.spawn_x, config.level.spawn_y);
    let mut world = World::new(level.tiles(config.level.tile_size), config.physics.clone(), player);

    while !window.window_should_close() {
        // ---- update ----
        let input = InputState::poll(&window);
        let dt = window.get_frame_time();
        let floor = window.get_screen_height() as f32;
        let was_grounded = world.is_grounded();
        let events = world.step(input, dt, floor);
        log_events(&events, was_grounded, &world);

        if events.jumped {
            if let Some(a) = audio.as_ref() {
                a.play_jump();
            }
        }

        // ---- draw ----
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(BACKGROUND);
        draw_tiles(&mut d, world.tiles(), texman.get(SpriteKind::Tile));
        draw_player(&mut d, &world.player, texman.get(SpriteKind::Player));
    }

    info!("Window closed, shutting down");
    Ok(())
}
