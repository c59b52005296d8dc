//! Game settings loaded from an optional RON file.
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::core::player::HITBOX_HEIGHT;

pub const DEFAULT_CONFIG_PATH: &str = "platformer.ron";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(ron::error::SpannedError),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub assets: AssetConfig,
    pub level: LevelConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            title: "awesome window".to_string(),
            target_fps: 60,
        }
    }
}

/// Movement tuning. Gravity is added once per frame, not scaled by dt.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub run_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub max_frame_time: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            run_speed: 150.0,
            jump_velocity: 300.0,
            gravity: 32.0,
            max_fall_speed: 600.0,
            max_frame_time: 1.0 / 30.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub player_texture: String,
    pub tileset_texture: String,
    pub jump_sound: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            player_texture: "assets/heros/herochar_idle_anim_strip_4.png".to_string(),
            tileset_texture: "assets/tiles/tileset.png".to_string(),
            jump_sound: "assets/sounds/jump.wav".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Text level file; the built-in level is used when unset.
    pub path: Option<String>,
    pub tile_size: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            path: None,
            tile_size: 32.0,
            spawn_x: 10.0,
            spawn_y: -200.0,
        }
    }
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Like [`GameConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.level.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tile_size must be positive, got {}",
                self.level.tile_size
            )));
        }
        let p = &self.physics;
        if p.max_fall_speed < 0.0 || p.max_frame_time <= 0.0 {
            return Err(ConfigError::Invalid(
                "max_fall_speed must be >= 0 and max_frame_time > 0".to_string(),
            ));
        }
        // one frame of travel must stay shorter than the hitbox, or a resting
        // player sinks past the tile top and gets pushed out underneath
        let max_step = p.max_fall_speed.max(p.jump_velocity.abs()) * p.max_frame_time;
        if max_step >= HITBOX_HEIGHT {
            return Err(ConfigError::Invalid(format!(
                "one frame moves up to {:.1}px, must be under the {}px hitbox; \
                 lower max_frame_time or max_fall_speed",
                max_step, HITBOX_HEIGHT
            )));
        }
        Ok(())
    }
}
