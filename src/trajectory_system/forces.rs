use crate::constants::{EARTH_RADIUS, STANDARD_GRAVITY};
use crate::control::environment::AtmosphereModel;

use super::aerodynamics::Aerodynamics;

/// Scalar force magnitudes acting along the vertical ascent line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForceModel {
    pub atmosphere: AtmosphereModel,
    pub aerodynamics: Aerodynamics,
}

impl ForceModel {
    pub fn new(atmosphere: AtmosphereModel, aerodynamics: Aerodynamics) -> Self {
        ForceModel {
            atmosphere,
            aerodynamics,
        }
    }

    /// Weight in newtons, g = g0 * (R / (R + h))².
    pub fn gravity_force(&self, altitude: f64, total_mass: f64) -> f64 {
        total_mass * Self::gravity_at_altitude(altitude)
    }

    pub fn drag_force(&self, altitude: f64, velocity: f64) -> f64 {
        self.aerodynamics
            .calculate_drag(altitude, velocity, &self.atmosphere)
    }

    pub fn gravity_at_altitude(altitude: f64) -> f64 {
        STANDARD_GRAVITY * (EARTH_RADIUS / (EARTH_RADIUS + altitude)).powi(2)
    }

    /// Net upward acceleration: thrust minus weight minus drag, over mass.
    pub fn net_acceleration(
        &self,
        thrust: f64,
        altitude: f64,
        velocity: f64,
        total_mass: f64,
    ) -> f64 {
        (thrust - self.gravity_force(altitude, total_mass) - self.drag_force(altitude, velocity))
            / total_mass
    }
}
