//! Configuration of the shooter environment.
use crate::env::DATA_PER_PLAYER;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Axis-aligned rectangle of valid positions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bounds {
    pub xmin: f32,
    pub xmax: f32,
    pub ymin: f32,
    pub ymax: f32,
}

impl Bounds {
    /// Clamps a coordinate pair into the rectangle.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.max(self.xmin).min(self.xmax),
            y.max(self.ymin).min(self.ymax),
        )
    }

    /// True if a circle of `radius` at `(x, y)` lies fully inside.
    pub fn contains(&self, x: f32, y: f32, radius: f32) -> bool {
        x - radius >= self.xmin
            && x + radius <= self.xmax
            && y - radius >= self.ymin
            && y + radius <= self.ymax
    }
}

/// Configuration of [`ShooterEnv`](crate::ShooterEnv).
///
/// Distances are in pixels, angles in radians, speeds in pixels per tick
/// except [`bullet_power`](Self::bullet_power), which is in pixels per
/// second.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct ShooterEnvConfig {
    /// Number of players in the arena.
    pub num_players: usize,

    /// Width of the screen the arena sits in.
    pub screen_width: f32,

    /// Height of the screen the arena sits in.
    pub screen_height: f32,

    /// Gap between the screen edge and the walls.
    pub wall_offset: f32,

    /// Thickness of the walls.
    pub wall_width: f32,

    /// Radius of a player.
    pub player_radius: f32,

    /// Movement and rotation speed of a player, pixels and degrees per
    /// tick.
    pub player_speed: f32,

    /// Radius of a bullet.
    pub bullet_radius: f32,

    /// Muzzle velocity of a bullet, pixels per second.
    pub bullet_power: f32,

    /// Ticks a player must wait between shots.
    pub shoot_cooldown: i32,

    /// Simulation ticks per second.
    pub fps: u32,
}

impl Default for ShooterEnvConfig {
    fn default() -> Self {
        Self {
            num_players: 2,
            screen_width: 1000.0,
            screen_height: 800.0,
            wall_offset: 100.0,
            wall_width: 20.0,
            player_radius: 50.0,
            player_speed: 3.0,
            bullet_radius: 10.0,
            bullet_power: 1000.0,
            shoot_cooldown: 10,
            fps: 25,
        }
    }
}

impl ShooterEnvConfig {
    /// Sets the number of players.
    pub fn num_players(mut self, v: usize) -> Self {
        self.num_players = v;
        self
    }

    /// Sets the player radius.
    pub fn player_radius(mut self, v: f32) -> Self {
        self.player_radius = v;
        self
    }

    /// Sets the player speed.
    pub fn player_speed(mut self, v: f32) -> Self {
        self.player_speed = v;
        self
    }

    /// Sets the muzzle velocity.
    pub fn bullet_power(mut self, v: f32) -> Self {
        self.bullet_power = v;
        self
    }

    /// Sets the shot cooldown in ticks.
    pub fn shoot_cooldown(mut self, v: i32) -> Self {
        self.shoot_cooldown = v;
        self
    }

    /// Sets the tick rate.
    pub fn fps(mut self, v: u32) -> Self {
        self.fps = v;
        self
    }

    /// Dimensionality of the observation vector.
    pub fn state_dim(&self) -> usize {
        self.num_players * DATA_PER_PLAYER
    }

    /// The walled arena interior.
    pub(crate) fn arena(&self) -> Bounds {
        let inset = self.wall_offset + self.wall_width;
        Bounds {
            xmin: inset,
            xmax: self.screen_width - inset,
            ymin: inset,
            ymax: self.screen_height - inset,
        }
    }

    /// Valid player center positions: the arena shrunk by the player
    /// radius.
    pub(crate) fn player_bounds(&self) -> Bounds {
        let arena = self.arena();
        Bounds {
            xmin: arena.xmin + self.player_radius,
            xmax: arena.xmax - self.player_radius,
            ymin: arena.ymin + self.player_radius,
            ymax: arena.ymax - self.player_radius,
        }
    }

    /// Constructs [`ShooterEnvConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
