use crate::constants::{DRAG_COEFFICIENT, REFERENCE_AREA};
use crate::control::environment::AtmosphereModel;

#[derive(Debug, Clone, Copy)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub reference_area: f64, // m²
}

impl Default for Aerodynamics {
    fn default() -> Self {
        Aerodynamics::new(DRAG_COEFFICIENT, REFERENCE_AREA)
    }
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, reference_area: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            reference_area,
        }
    }

    /// Drag magnitude in newtons. The caller subtracts it from the net force,
    /// so it always acts against the direction of thrust.
    pub fn calculate_drag(
        &self,
        altitude: f64,
        velocity: f64,
        atmosphere: &AtmosphereModel,
    ) -> f64 {
        self.calculate_dynamic_pressure(atmosphere.air_density_at(altitude), velocity)
            * self.drag_coefficient
            * self.reference_area
    }

    fn calculate_dynamic_pressure(&self, air_density: f64, velocity: f64) -> f64 {
        0.5 * air_density * velocity * velocity
    }
}
