// Configuration types, with defaults matching the classic game feel.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    /// Reject configurations the game cannot run with. Called once at
    /// startup, before any terminal state changes.
    pub fn validate(&self) -> Result<()> {
        self.physics.validate()?;
        self.display.validate()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    pub flap: String,
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            flap: "Space".to_string(),
            quit: "Q".to_string(),
        }
    }
}

/// Simulation parameters in virtual world units. Velocities and speeds are
/// per frame at the target frame rate, matching the fixed-timestep update.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Virtual world dimensions (rendering scales these to the terminal)
    pub world_width: f32,
    pub world_height: f32,

    // Downward acceleration per frame
    pub gravity: f32,

    // Velocity set by a flap; negative is up
    pub flap_strength: f32,

    // Pipe geometry and motion
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub pipe_speed: f32,
    pub min_pipe_height: f32,

    // Frames between pipe spawns
    pub pipe_spawn_interval: u64,

    // Ground band at the bottom of the world
    pub ground_height: f32,

    // Bird bounding box and fixed horizontal position
    pub bird_width: f32,
    pub bird_height: f32,
    pub bird_start_x: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_width: 600.0,
            world_height: 600.0,
            gravity: 0.6,
            flap_strength: -8.0,
            pipe_gap: 150.0,
            pipe_width: 60.0,
            pipe_speed: 6.0,
            min_pipe_height: 100.0,
            pipe_spawn_interval: 100,
            ground_height: 100.0,
            bird_width: 30.0,
            bird_height: 30.0,
            bird_start_x: 100.0,
        }
    }
}

impl PhysicsConfig {
    /// Largest allowed top-segment height: the gap and the ground must both
    /// still fit below it.
    pub fn max_pipe_height(&self) -> f32 {
        self.world_height - self.pipe_gap - self.ground_height
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.world_width > 0.0 && self.world_height > 0.0,
            "world dimensions must be positive"
        );
        ensure!(self.gravity > 0.0, "gravity must be positive");
        ensure!(
            self.flap_strength < 0.0,
            "flap_strength must be negative (upward)"
        );
        ensure!(
            self.pipe_width > 0.0 && self.pipe_gap > 0.0 && self.pipe_speed > 0.0,
            "pipe dimensions and speed must be positive"
        );
        ensure!(
            self.pipe_spawn_interval > 0,
            "pipe_spawn_interval must be at least 1 frame"
        );
        ensure!(
            self.bird_width > 0.0 && self.bird_height > 0.0,
            "bird dimensions must be positive"
        );
        ensure!(
            self.ground_height >= 0.0 && self.ground_height < self.world_height,
            "ground_height must fit inside the world"
        );
        // Pipe height range must be non-degenerate or spawning has no
        // valid value to draw.
        ensure!(
            self.max_pipe_height() >= self.min_pipe_height,
            "pipe height range is empty: world_height ({}) - pipe_gap ({}) - ground_height ({}) \
             must be at least min_pipe_height ({})",
            self.world_height,
            self.pipe_gap,
            self.ground_height,
            self.min_pipe_height
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // How long the final score stays on screen after a collision
    pub game_over_pause_ms: u64,

    // Entity colors (RGB values 0-255)
    pub bird_color: [u8; 3],
    pub pipe_color: [u8; 3],
    pub ground_color: [u8; 3],
    pub score_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            game_over_pause_ms: 2000,
            bird_color: [245, 200, 66],   // Yellow
            pipe_color: [100, 170, 40],   // Green
            ground_color: [185, 160, 90], // Dirt
            score_color: [255, 255, 255], // White
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_fps > 0 && self.target_fps <= 1000,
            "target_fps must be between 1 and 1000"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioConfig {
    // Sound effects on/off; when off the audio device is never opened
    pub enabled: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
