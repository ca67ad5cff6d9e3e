use crate::constants::TIME_STEP;

/// Committed vertical state at one step index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub time: f64,     // s
    pub velocity: f64, // m/s
    pub altitude: f64, // m
}

impl Kinematics {
    pub fn new(initial_altitude: f64) -> Self {
        Kinematics {
            time: 0.0,
            velocity: 0.0,
            altitude: initial_altitude,
        }
    }

    /// Semi-implicit Euler: velocity first, then altitude from the new velocity.
    pub fn advance(&self, acceleration: f64) -> Kinematics {
        let velocity = self.velocity + acceleration * TIME_STEP;
        Kinematics {
            time: next_time(self.time),
            velocity,
            altitude: self.altitude + velocity * TIME_STEP,
        }
    }
}

/// Adds one step and rounds to a tenth of a second so the clock never drifts.
pub fn next_time(time: f64) -> f64 {
    ((time + TIME_STEP) * 10.0 + 0.5).floor() / 10.0
}
