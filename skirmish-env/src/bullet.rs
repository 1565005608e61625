//! A bullet in flight.
use crate::{config::ShooterEnvConfig, player::Player, Vec2};

/// A bullet travelling in a straight line at constant speed.
#[derive(Debug)]
pub(crate) struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub radius: f32,
    pub owner: usize,
}

impl Bullet {
    /// Spawns a bullet at the muzzle of the given player.
    pub fn fired_by(player: &Player, config: &ShooterEnvConfig) -> Self {
        Self {
            pos: player.pos + Vec2::new(player.radius(), 0.0).rotated(player.angle),
            vel: Vec2::new(config.bullet_power, 0.0).rotated(player.angle),
            angle: player.angle,
            radius: config.bullet_radius,
            owner: player.index(),
        }
    }

    /// Advances the bullet by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.pos = self.pos + self.vel * dt;
    }
}
