use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// Launch setup as edited by the user. The simulation engine only ever reads
/// a copy of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketConfiguration {
    pub booster_count: u32,     // Atlas liquid boosters
    pub srb_count: u32,         // solid rocket boosters
    pub booster_thrust: f64,    // kN, per engine
    pub srb_thrust: f64,        // kN, per engine
    pub common_stage_mass: f64, // kg, Centaur core
    pub booster_dry_mass: f64,  // kg, per engine
    pub srb_dry_mass: f64,      // kg, per engine
    pub booster_fuel_mass: f64, // kg, per engine
    pub srb_fuel_mass: f64,     // kg, per engine
    pub payload_mass: f64,      // kg
    pub initial_altitude: f64,  // m
}

impl Default for RocketConfiguration {
    // Atlas V 500 series data sheet values
    fn default() -> Self {
        RocketConfiguration {
            booster_count: 1,
            srb_count: 3,
            booster_thrust: 3_827.0,
            srb_thrust: 1_688.4,
            common_stage_mass: 20_570.0,
            booster_dry_mass: 23_863.0,
            srb_dry_mass: 4_069.0,
            booster_fuel_mass: 284_089.0,
            srb_fuel_mass: 42_630.0,
            payload_mass: 0.0,
            initial_altitude: 0.0,
        }
    }
}

impl RocketConfiguration {
    pub const BOOSTER_COUNT_RANGE: (u32, u32) = (1, 3);
    pub const SRB_COUNT_RANGE: (u32, u32) = (0, 5);
    pub const BOOSTER_FUEL_RANGE: (f64, f64) = (100_000.0, 1_000_000.0);
    pub const BOOSTER_THRUST_RANGE: (f64, f64) = (1_000.0, 100_000.0);
    pub const LAUNCH_ALTITUDE_RANGE: (f64, f64) = (0.0, 8_000.0);

    /// Range checks applied by whoever edits or loads a configuration.
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_range(
            "booster_count",
            self.booster_count as f64,
            Self::BOOSTER_COUNT_RANGE.0 as f64,
            Self::BOOSTER_COUNT_RANGE.1 as f64,
        )?;
        check_range(
            "srb_count",
            self.srb_count as f64,
            Self::SRB_COUNT_RANGE.0 as f64,
            Self::SRB_COUNT_RANGE.1 as f64,
        )?;
        check_range(
            "booster_fuel_mass",
            self.booster_fuel_mass,
            Self::BOOSTER_FUEL_RANGE.0,
            Self::BOOSTER_FUEL_RANGE.1,
        )?;
        check_range(
            "booster_thrust",
            self.booster_thrust,
            Self::BOOSTER_THRUST_RANGE.0,
            Self::BOOSTER_THRUST_RANGE.1,
        )?;
        check_range(
            "initial_altitude",
            self.initial_altitude,
            Self::LAUNCH_ALTITUDE_RANGE.0,
            Self::LAUNCH_ALTITUDE_RANGE.1,
        )?;

        let non_negative = [
            ("srb_thrust", self.srb_thrust),
            ("common_stage_mass", self.common_stage_mass),
            ("booster_dry_mass", self.booster_dry_mass),
            ("srb_dry_mass", self.srb_dry_mass),
            ("srb_fuel_mass", self.srb_fuel_mass),
            ("payload_mass", self.payload_mass),
        ];
        for (name, value) in non_negative {
            check_range(name, value, 0.0, f64::MAX)?;
        }
        Ok(())
    }

    pub fn liftoff_mass(&self) -> f64 {
        self.common_stage_mass
            + self.booster_count as f64 * (self.booster_dry_mass + self.booster_fuel_mass)
            + self.total_srb_mass()
            + self.payload_mass
    }

    /// Combined thrust of every engine at ignition, kN.
    pub fn liftoff_thrust(&self) -> f64 {
        self.booster_count as f64 * self.booster_thrust + self.srb_count as f64 * self.srb_thrust
    }

    /// Mass without liquid fuel and without the solid boosters.
    pub fn core_dry_mass(&self) -> f64 {
        self.common_stage_mass + self.booster_count as f64 * self.booster_dry_mass
    }

    pub fn total_srb_mass(&self) -> f64 {
        self.srb_count as f64 * (self.srb_dry_mass + self.srb_fuel_mass)
    }

    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot {
            srb_count: self.srb_count,
            booster_count: self.booster_count,
            booster_fuel_mass: self.booster_fuel_mass,
            booster_thrust: self.booster_thrust,
        }
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), SimulationError> {
    if value.is_nan() || value < min || value > max {
        return Err(SimulationError::InvalidParameter {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// The four user-editable parameters kept between sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSnapshot {
    pub srb_count: u32,
    pub booster_count: u32,
    pub booster_fuel_mass: f64,
    pub booster_thrust: f64,
}

impl ParameterSnapshot {
    pub fn apply_to(&self, configuration: &RocketConfiguration) -> RocketConfiguration {
        RocketConfiguration {
            srb_count: self.srb_count,
            booster_count: self.booster_count,
            booster_fuel_mass: self.booster_fuel_mass,
            booster_thrust: self.booster_thrust,
            ..configuration.clone()
        }
    }
}
