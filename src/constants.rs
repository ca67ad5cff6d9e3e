// Physical Constants
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const EARTH_RADIUS: f64 = 6.371e6; // meters

// Vehicle Constants
pub const DRAG_COEFFICIENT: f64 = 0.5; // assumed, not measurable without a wind tunnel
pub const REFERENCE_AREA: f64 = 22.9; // m², frontal area of the stack

// Atmosphere Model
pub const TROPOSPHERE_CEILING: f64 = 11_000.0; // m
pub const LOWER_STRATOSPHERE_CEILING: f64 = 25_000.0; // m
pub const GAS_CONSTANT_KPA: f64 = 0.2869; // kJ/(kg·K), pressure in kPa gives kg/m³
pub const CELSIUS_TO_KELVIN: f64 = 273.0;

// Propulsion Constants
pub const BOOSTER_SPECIFIC_IMPULSE: f64 = 337.8; // s, vacuum, full thrust
pub const SRB_SPECIFIC_IMPULSE: f64 = 279.3; // s, vacuum, full thrust
pub const FUEL_FLOW_SCALE: f64 = 100.0; // kN -> N times the 0.1 s step

// Simulation Parameters
pub const TIME_STEP: f64 = 0.1; // s
pub const DEFAULT_STEPS: usize = 2500; // 250 s of flight
pub const SRB_SEPARATION_STEP: usize = 1150; // t = 115.0 s
