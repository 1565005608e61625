//! The shooter arena as an [`Env`].
use crate::{bullet::Bullet, config::ShooterEnvConfig, line::Line, player::Player, Vec2};
use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use skirmish_core::Env;
use std::f32::consts::PI;

/// Observation features per player.
///
/// For player `p` against its opponent `o` they are, in order: whether
/// `o` sits on `p`'s shooting line and in front, whether rotating left
/// aligns better than rotating right, the alignment score towards `o`,
/// and whether any bullet is heading for `p`.
pub const DATA_PER_PLAYER: usize = 4;

/// Discrete actions of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move along the facing.
    Forward,

    /// Move against the facing.
    Backward,

    /// Rotate counterclockwise.
    RotateLeft,

    /// Rotate clockwise.
    RotateRight,

    /// Fire a bullet, subject to the cooldown.
    Shoot,
}

impl Action {
    /// Size of the action set.
    pub const COUNT: usize = 5;

    /// Maps an action index to an action.
    pub fn from_index(ix: usize) -> Option<Action> {
        match ix {
            0 => Some(Action::Forward),
            1 => Some(Action::Backward),
            2 => Some(Action::RotateLeft),
            3 => Some(Action::RotateRight),
            4 => Some(Action::Shoot),
            _ => None,
        }
    }

    /// The index of the action.
    pub fn index(self) -> usize {
        match self {
            Action::Forward => 0,
            Action::Backward => 1,
            Action::RotateLeft => 2,
            Action::RotateRight => 3,
            Action::Shoot => 4,
        }
    }
}

/// Walled 2D arena of circular players shooting at each other.
///
/// Hitting an opponent scores a point for the shooter and costs the
/// victim one. Players are ghosts to each other and to their own
/// bullets; only opposing bullets connect.
pub struct ShooterEnv {
    config: ShooterEnvConfig,
    players: Vec<Player>,
    bullets: Vec<Bullet>,
    rng: StdRng,
    seed: u64,
}

impl ShooterEnv {
    fn observation(&self) -> Vec<f32> {
        let mut data = vec![0.0; self.config.state_dim()];
        for (pi, player) in self.players.iter().enumerate() {
            let i = pi * DATA_PER_PLAYER;
            for (oi, other) in self.players.iter().enumerate() {
                if oi == pi {
                    continue;
                }
                let line = Line::new(player.pos, player.angle, other.pos);
                if line.destination_in_front() && line.distance_score(other.radius()) > 0.0 {
                    data[i] = 1.0;
                }
                let go_left = line.angle_score(10.0) > line.angle_score(-10.0);
                data[i + 1] = if go_left { 1.0 } else { 0.0 };
                data[i + 2] = line.angle_score(0.0);
            }
            for bullet in &self.bullets {
                let line = Line::new(bullet.pos, bullet.angle, player.pos);
                if line.destination_in_front() && line.distance_from_line() <= player.radius() {
                    data[i + 3] = 1.0;
                }
            }
        }
        data
    }

    /// Center position of a player.
    pub fn player_position(&self, ix: usize) -> Vec2 {
        self.players[ix].pos
    }

    /// Facing angle of a player in radians.
    pub fn player_angle(&self, ix: usize) -> f32 {
        self.players[ix].angle
    }

    /// Hit percentage of a player's fired bullets.
    pub fn player_accuracy(&self, ix: usize) -> f32 {
        self.players[ix].accuracy()
    }

    /// The last action applied to a player, if any this episode.
    pub fn player_last_action(&self, ix: usize) -> Option<Action> {
        self.players[ix].last_action
    }

    /// Number of bullets in flight.
    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }

    /// Places a player explicitly, for scripted scenarios.
    pub fn set_player_pose(&mut self, ix: usize, x: f32, y: f32, angle: f32) {
        self.players[ix].pos = Vec2::new(x, y);
        self.players[ix].angle = angle;
    }
}

impl Env for ShooterEnv {
    type Config = ShooterEnvConfig;

    fn build(config: &ShooterEnvConfig, seed: u64) -> Result<Self> {
        if config.num_players < 2 {
            bail!("at least two players are required, got {}", config.num_players);
        }
        let bounds = config.player_bounds();
        if bounds.xmin > bounds.xmax || bounds.ymin > bounds.ymax {
            bail!("players of radius {} do not fit the arena", config.player_radius);
        }
        let players = (0..config.num_players)
            .map(|i| Player::new(i, config))
            .collect();
        Ok(Self {
            config: config.clone(),
            players,
            bullets: vec![],
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Vec<f32>> {
        self.rng = StdRng::seed_from_u64(self.seed.wrapping_add(ix as u64));
        let bounds = self.config.player_bounds();
        for player in self.players.iter_mut() {
            let pos = Vec2::new(
                self.rng.gen_range(bounds.xmin..=bounds.xmax),
                self.rng.gen_range(bounds.ymin..=bounds.ymax),
            );
            let angle = self.rng.gen_range(0.0..2.0 * PI);
            player.respawn(pos, angle);
        }
        self.bullets.clear();
        Ok(self.observation())
    }

    fn num_agents(&self) -> usize {
        self.players.len()
    }

    fn state_dim(&self) -> usize {
        self.config.state_dim()
    }

    fn num_actions(&self) -> usize {
        Action::COUNT
    }

    fn state(&self) -> Vec<f32> {
        self.observation()
    }

    fn apply_action(&mut self, agent_ix: usize, action: usize) -> Result<()> {
        if agent_ix >= self.players.len() {
            bail!("no player with index {}", agent_ix);
        }
        let action = match Action::from_index(action) {
            Some(a) => a,
            None => bail!("invalid action index {}", action),
        };
        if let Some(bullet) = self.players[agent_ix].apply(action, &self.config) {
            self.bullets.push(bullet);
        }
        Ok(())
    }

    fn advance(&mut self) {
        let dt = 1.0 / self.config.fps as f32;
        for bullet in self.bullets.iter_mut() {
            bullet.step(dt);
        }
        let arena = self.config.arena();
        let mut i = 0;
        while i < self.bullets.len() {
            let bullet = &self.bullets[i];
            if !arena.contains(bullet.pos.x, bullet.pos.y, bullet.radius) {
                self.bullets.remove(i);
                continue;
            }
            let victim = self.players.iter().position(|p| {
                p.index() != bullet.owner
                    && bullet.pos.distance(p.pos) < bullet.radius + p.radius()
            });
            match victim {
                Some(v) => {
                    let owner = bullet.owner;
                    self.players[owner].hit();
                    self.players[v].hurt();
                    self.bullets.remove(i);
                }
                None => i += 1,
            }
        }
    }

    fn score_delta(&self, agent_ix: usize) -> f32 {
        self.players[agent_ix].reward()
    }

    fn score(&self, agent_ix: usize) -> f32 {
        self.players[agent_ix].score()
    }
}
