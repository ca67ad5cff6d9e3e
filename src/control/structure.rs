use super::rocket::RocketConfiguration;

/// The parts of a configuration that stay fixed for a whole run.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub booster_count: u32,
    pub srb_count: u32,
    pub common_stage_mass: f64, // kg
    pub booster_dry_mass: f64,  // kg, per engine
    pub srb_dry_mass: f64,      // kg, per engine
    pub payload_mass: f64,      // kg
}

impl Structure {
    pub fn from_configuration(configuration: &RocketConfiguration) -> Self {
        Structure {
            booster_count: configuration.booster_count,
            srb_count: configuration.srb_count,
            common_stage_mass: configuration.common_stage_mass,
            booster_dry_mass: configuration.booster_dry_mass,
            srb_dry_mass: configuration.srb_dry_mass,
            payload_mass: configuration.payload_mass,
        }
    }

    /// `srb_attached` is 1.0 before separation and 0.0 after.
    pub fn get_total_mass(&self, booster_fuel: f64, srb_fuel: f64, srb_attached: f64) -> f64 {
        self.common_stage_mass
            + self.booster_count as f64 * (self.booster_dry_mass + booster_fuel)
            + srb_attached * self.srb_count as f64 * (self.srb_dry_mass + srb_fuel)
            + self.payload_mass
    }

    /// Total thrust in kN from per-engine thrust values.
    pub fn get_total_thrust(&self, booster_thrust: f64, srb_thrust: f64, srb_attached: f64) -> f64 {
        self.booster_count as f64 * booster_thrust
            + self.srb_count as f64 * srb_attached * srb_thrust
    }
}
