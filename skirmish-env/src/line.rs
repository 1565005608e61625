//! Sight-line geometry between an oriented origin and a target point.
use crate::Vec2;
use std::f32::consts::PI;

pub(crate) fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

/// A ray from an oriented body towards a destination point.
///
/// The origin carries a facing angle in radians; scores measure how well
/// that facing, optionally rotated, lines up with the destination. All
/// scores are rounded to two decimals to keep the observation vector
/// coarse.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    origin_pos: Vec2,
    origin_angle: f32,
    dest_pos: Vec2,
}

impl Line {
    /// Constructs a line from an oriented origin to a destination.
    pub fn new(origin_pos: Vec2, origin_angle: f32, dest_pos: Vec2) -> Self {
        Self {
            origin_pos,
            origin_angle,
            dest_pos,
        }
    }

    /// True if the destination lies in the half-plane the origin faces.
    pub fn destination_in_front(&self) -> bool {
        let ab = self.dest_pos - self.origin_pos;
        let dir = Vec2::new(self.origin_angle.cos(), self.origin_angle.sin());
        ab.dot(dir) > 0.0
    }

    /// Angle in radians between the origin's facing rotated by `degrees`
    /// and the direction towards the destination.
    ///
    /// Coincident points and cosines at or beyond the unit interval
    /// collapse to pi, the worst alignment.
    pub fn rotated_angle(&self, degrees: f32) -> f32 {
        let angle = degrees / 180.0 * PI;
        let a = self.dest_pos - self.origin_pos;
        let b = Vec2::new(
            (self.origin_angle + angle).cos(),
            (self.origin_angle + angle).sin(),
        );
        let norm = a.length();
        if norm == 0.0 {
            return PI;
        }
        let c = a.dot(b) / norm;
        if !(c > -1.0 && c < 1.0) {
            return PI;
        }
        c.acos()
    }

    /// Alignment score in `[0, 1]`: 1 is facing the destination exactly.
    pub fn angle_score(&self, degrees: f32) -> f32 {
        round2((PI - self.rotated_angle(degrees)) / PI)
    }

    /// Distance of the destination from the infinite line through the
    /// origin along its facing.
    pub fn distance_from_line(&self) -> f32 {
        self.distance_from_rotated_line(0.0)
    }

    /// Distance of the destination from the facing line rotated by
    /// `degrees`.
    pub fn distance_from_rotated_line(&self, degrees: f32) -> f32 {
        let angle = degrees / 180.0 * PI;
        let a = (self.origin_angle + angle).tan();
        let b = -1.0f32;
        let c = self.origin_pos.y - a * self.origin_pos.x;
        (a * self.dest_pos.x + b * self.dest_pos.y + c).abs() / (a * a + b * b).sqrt()
    }

    /// Proximity score in `[0, 1]`: 1 when the destination sits on the
    /// facing line, 0 once it is `min_distance` or further away.
    pub fn distance_score(&self, min_distance: f32) -> f32 {
        round2(self.distance_rotated_score(0.0, min_distance))
    }

    /// [`distance_score`](Self::distance_score) against the facing line
    /// rotated by `degrees`, unrounded.
    pub fn distance_rotated_score(&self, degrees: f32, min_distance: f32) -> f32 {
        let d = self.distance_from_rotated_line(degrees);
        if d < min_distance {
            (min_distance - d) / min_distance
        } else {
            0.0
        }
    }
}
