use crate::constants::{
    CELSIUS_TO_KELVIN, GAS_CONSTANT_KPA, LOWER_STRATOSPHERE_CEILING, TROPOSPHERE_CEILING,
};

/// Piecewise atmosphere fitted to the NASA Glenn "Earth Atmosphere Model".
///
/// Each layer owns its upper bound: 11 000 m is still troposphere and 25 000 m
/// is still lower stratosphere. Altitudes below sea level read sea-level values.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtmosphereModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericConditions {
    pub temperature: f64, // °C
    pub pressure: f64,    // kPa
    pub air_density: f64, // kg/m³
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmosphereLayer {
    Troposphere,
    LowerStratosphere,
    UpperStratosphere,
}

impl AtmosphereLayer {
    pub fn at(altitude: f64) -> Self {
        if altitude <= TROPOSPHERE_CEILING {
            AtmosphereLayer::Troposphere
        } else if altitude <= LOWER_STRATOSPHERE_CEILING {
            AtmosphereLayer::LowerStratosphere
        } else {
            AtmosphereLayer::UpperStratosphere
        }
    }
}

impl AtmosphereModel {
    pub fn new() -> Self {
        AtmosphereModel
    }

    pub fn temperature_at(&self, altitude: f64) -> f64 {
        let h = clamp_altitude(altitude);
        match AtmosphereLayer::at(h) {
            AtmosphereLayer::Troposphere => 15.04 - 0.00649 * h,
            AtmosphereLayer::LowerStratosphere => -56.46,
            AtmosphereLayer::UpperStratosphere => -131.21 + 0.0029 * h,
        }
    }

    pub fn pressure_at(&self, altitude: f64) -> f64 {
        let h = clamp_altitude(altitude);
        let temperature = self.temperature_at(h);
        match AtmosphereLayer::at(h) {
            AtmosphereLayer::Troposphere => {
                101.29 * ((temperature + CELSIUS_TO_KELVIN) / 288.08).powf(5.256)
            }
            AtmosphereLayer::LowerStratosphere => 22.65 * (1.73 - 0.000157 * h).exp(),
            AtmosphereLayer::UpperStratosphere => {
                2.488 * ((temperature + CELSIUS_TO_KELVIN) / 216.6).powf(-11.388)
            }
        }
    }

    pub fn air_density_at(&self, altitude: f64) -> f64 {
        self.pressure_at(altitude)
            / (GAS_CONSTANT_KPA * (self.temperature_at(altitude) + CELSIUS_TO_KELVIN))
    }

    pub fn conditions_at(&self, altitude: f64) -> AtmosphericConditions {
        AtmosphericConditions {
            temperature: self.temperature_at(altitude),
            pressure: self.pressure_at(altitude),
            air_density: self.air_density_at(altitude),
        }
    }
}

fn clamp_altitude(altitude: f64) -> f64 {
    altitude.max(0.0)
}
