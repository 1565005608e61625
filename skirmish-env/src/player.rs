//! A player in the arena.
use crate::{
    bullet::Bullet,
    config::{Bounds, ShooterEnvConfig},
    env::Action,
    Vec2,
};
use std::f32::consts::PI;

/// A circular player that moves, rotates and shoots.
#[derive(Debug)]
pub(crate) struct Player {
    pub pos: Vec2,
    pub angle: f32,
    pub last_action: Option<Action>,
    score: f32,
    old_score: f32,
    shot_bullets: u32,
    hit_bullets: u32,
    shoot_cooldown: i32,
    index: usize,
    radius: f32,
    speed: f32,
    bounds: Bounds,
}

impl Player {
    pub fn new(index: usize, config: &ShooterEnvConfig) -> Self {
        Self {
            pos: Vec2::default(),
            angle: 0.0,
            last_action: None,
            score: 0.0,
            old_score: 0.0,
            shot_bullets: 0,
            hit_bullets: 0,
            shoot_cooldown: 0,
            index,
            radius: config.player_radius,
            speed: config.player_speed,
            bounds: config.player_bounds(),
        }
    }

    /// Places the player for a new episode and wipes its tallies.
    pub fn respawn(&mut self, pos: Vec2, angle: f32) {
        self.pos = pos;
        self.angle = angle;
        self.last_action = None;
        self.score = 0.0;
        self.old_score = 0.0;
        self.shot_bullets = 0;
        self.hit_bullets = 0;
        self.shoot_cooldown = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    /// Score change since the player's own last action.
    pub fn reward(&self) -> f32 {
        self.score - self.old_score
    }

    /// Percentage of fired bullets that landed.
    pub fn accuracy(&self) -> f32 {
        if self.shot_bullets == 0 {
            return 0.0;
        }
        self.hit_bullets as f32 / self.shot_bullets as f32 * 100.0
    }

    /// Called when a bullet of this player lands.
    pub fn hit(&mut self) {
        self.score += 1.0;
        self.hit_bullets += 1;
    }

    /// Called when this player is struck by a bullet.
    pub fn hurt(&mut self) {
        self.score -= 1.0;
    }

    /// Applies one action, returning a bullet when one is fired.
    ///
    /// Snapshots the score first so that [`reward`](Self::reward) covers
    /// exactly the interval since this action.
    pub fn apply(&mut self, action: Action, config: &ShooterEnvConfig) -> Option<Bullet> {
        self.old_score = self.score;
        self.last_action = Some(action);
        self.shoot_cooldown -= 1;
        match action {
            Action::Forward => {
                self.advance(1.0);
                None
            }
            Action::Backward => {
                self.advance(-1.0);
                None
            }
            Action::RotateLeft => {
                self.angle += self.speed * PI / 180.0;
                None
            }
            Action::RotateRight => {
                self.angle -= self.speed * PI / 180.0;
                None
            }
            Action::Shoot => self.shoot(config),
        }
    }

    /// Moves along the facing, clamped to the arena.
    fn advance(&mut self, sign: f32) {
        let (x, y) = self.bounds.clamp(
            self.pos.x + sign * self.angle.cos() * self.speed,
            self.pos.y + sign * self.angle.sin() * self.speed,
        );
        self.pos = Vec2::new(x, y);
    }

    fn shoot(&mut self, config: &ShooterEnvConfig) -> Option<Bullet> {
        if self.shoot_cooldown > 0 {
            return None;
        }
        self.shot_bullets += 1;
        self.shoot_cooldown = config.shoot_cooldown;
        Some(Bullet::fired_by(self, config))
    }
}
