use crate::constants::{
    BOOSTER_SPECIFIC_IMPULSE, FUEL_FLOW_SCALE, SRB_SPECIFIC_IMPULSE, STANDARD_GRAVITY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineClass {
    AtlasBooster,
    SolidRocketBooster,
}

impl EngineClass {
    pub fn specific_impulse(&self) -> f64 {
        match self {
            EngineClass::AtlasBooster => BOOSTER_SPECIFIC_IMPULSE,
            EngineClass::SolidRocketBooster => SRB_SPECIFIC_IMPULSE,
        }
    }
}

/// Fuel left after one 0.1 s step at `thrust` kN. Never negative: a tank that
/// cannot cover a full step is emptied.
pub fn consume_fuel(current_fuel_mass: f64, thrust: f64, specific_impulse: f64) -> f64 {
    let consumption = FUEL_FLOW_SCALE * thrust / (specific_impulse * STANDARD_GRAVITY);

    if current_fuel_mass < consumption {
        0.0
    } else {
        current_fuel_mass - consumption
    }
}

/// Per-engine working state for one engine class during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionSystem {
    pub engine_class: EngineClass,
    pub fuel_mass: f64,      // kg, per engine
    pub current_thrust: f64, // kN, per engine
}

impl PropulsionSystem {
    pub fn new(engine_class: EngineClass, fuel_mass: f64, thrust: f64) -> Self {
        PropulsionSystem {
            engine_class,
            fuel_mass,
            current_thrust: thrust,
        }
    }

    pub fn burn(&mut self) {
        if !self.is_out_of_fuel() {
            self.fuel_mass = consume_fuel(
                self.fuel_mass,
                self.current_thrust,
                self.engine_class.specific_impulse(),
            );
        }
    }

    /// Zeroes thrust once the tank is empty. Returns true on the step the
    /// engine actually shuts down.
    pub fn apply_cutoff(&mut self) -> bool {
        if !self.is_out_of_fuel() {
            return false;
        }
        let was_firing = self.current_thrust != 0.0;
        self.current_thrust = 0.0;
        was_firing
    }

    pub fn get_thrust(&self) -> f64 {
        self.current_thrust
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel_mass <= 0.0
    }
}
