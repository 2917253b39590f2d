//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the ground plane. The render layer maps `z` onto its
/// depth axis; the simulation has no vertical state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

/// 2D velocity / direction on the ground plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub z: f64,
}

/// Simulation time tracking. Advanced by the externally supplied frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Distance from the world origin.
    pub fn distance_from_origin(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Unit direction toward another position (zero if coincident).
    pub fn direction_to(&self, other: &Position) -> Velocity {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        let dist = (dx * dx + dz * dz).sqrt();
        if dist > 0.0 {
            Velocity {
                x: dx / dist,
                z: dz / dist,
            }
        } else {
            Velocity::default()
        }
    }

    /// Point at `radius` from this position along `angle` (radians).
    pub fn on_ring(&self, angle: f64, radius: f64) -> Position {
        Position {
            x: self.x + angle.cos() * radius,
            z: self.z + angle.sin() * radius,
        }
    }
}

impl Velocity {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Magnitude.
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
