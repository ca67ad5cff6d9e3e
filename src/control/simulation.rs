use tracing::{debug, info};

use crate::constants::DEFAULT_STEPS;
use crate::telemetry_system::telemetry::SimulationTrace;
use crate::trajectory_system::forces::ForceModel;
use crate::trajectory_system::kinematics::Kinematics;

use super::launch_stages::SrbStaging;
use super::propulsion::{EngineClass, PropulsionSystem};
use super::rocket::RocketConfiguration;
use super::structure::Structure;

/// Fuel, thrust and staging state owned by a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingState {
    pub booster: PropulsionSystem,
    pub srb: PropulsionSystem,
    pub staging: SrbStaging,
}

impl WorkingState {
    pub fn from_configuration(configuration: &RocketConfiguration) -> Self {
        WorkingState {
            booster: PropulsionSystem::new(
                EngineClass::AtlasBooster,
                configuration.booster_fuel_mass,
                configuration.booster_thrust,
            ),
            srb: PropulsionSystem::new(
                EngineClass::SolidRocketBooster,
                configuration.srb_fuel_mass,
                configuration.srb_thrust,
            ),
            staging: SrbStaging::new(),
        }
    }

    pub fn total_mass(&self, structure: &Structure) -> f64 {
        structure.get_total_mass(
            self.booster.fuel_mass,
            self.srb.fuel_mass,
            self.staging.attached_factor(),
        )
    }

    /// Total thrust in kN.
    pub fn total_thrust(&self, structure: &Structure) -> f64 {
        structure.get_total_thrust(
            self.booster.get_thrust(),
            self.srb.get_thrust(),
            self.staging.attached_factor(),
        )
    }

    pub fn srb_detached(&self) -> bool {
        self.staging.is_detached()
    }
}

/// Steps at which the discrete propulsion events happened, if they did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropulsionEvents {
    pub srb_separation_step: Option<usize>,
    pub booster_burnout_step: Option<usize>,
    pub srb_burnout_step: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SimulationRun {
    pub trace: SimulationTrace,
    pub events: PropulsionEvents,
    pub final_state: WorkingState,
}

pub struct SimulationEngine {
    structure: Structure,
    forces: ForceModel,
    state: WorkingState,
    steps: usize,
    step: usize,
    current: Kinematics,
    time: Vec<f64>,
    acceleration: Vec<f64>,
    velocity: Vec<f64>,
    altitude: Vec<f64>,
    last_total_mass: Option<f64>,
    events: PropulsionEvents,
}

impl SimulationEngine {
    pub fn new(configuration: &RocketConfiguration) -> Self {
        Self::with_steps(configuration, DEFAULT_STEPS)
    }

    pub fn with_steps(configuration: &RocketConfiguration, steps: usize) -> Self {
        let current = Kinematics::new(configuration.initial_altitude);
        let samples = steps + 1;

        let mut time = Vec::with_capacity(samples);
        let mut velocity = Vec::with_capacity(samples);
        let mut altitude = Vec::with_capacity(samples);
        time.push(current.time);
        velocity.push(current.velocity);
        altitude.push(current.altitude);

        SimulationEngine {
            structure: Structure::from_configuration(configuration),
            forces: ForceModel::default(),
            state: WorkingState::from_configuration(configuration),
            steps,
            step: 0,
            current,
            time,
            acceleration: Vec::with_capacity(samples),
            velocity,
            altitude,
            last_total_mass: None,
            events: PropulsionEvents::default(),
        }
    }

    /// Runs every step and closes the trace.
    pub fn run(mut self) -> SimulationRun {
        info!(
            "Starting simulation: {} steps, liftoff mass {:.1} kg",
            self.steps,
            self.state.total_mass(&self.structure)
        );
        while self.step() {}
        self.finish()
    }

    /// Advances one step. Returns false once the horizon has been reached.
    ///
    /// The acceleration computed here closes out the previous index: it uses
    /// the previous altitude and velocity with this step's mass and thrust,
    /// and is stored at `step - 1`.
    pub fn step(&mut self) -> bool {
        if self.step >= self.steps {
            return false;
        }
        let index = self.step + 1;

        let total_mass = self.state.total_mass(&self.structure);
        let thrust = 1000.0 * self.state.total_thrust(&self.structure); // kN -> N
        let acceleration = self.forces.net_acceleration(
            thrust,
            self.current.altitude,
            self.current.velocity,
            total_mass,
        );
        self.acceleration.push(acceleration);

        self.current = self.current.advance(acceleration);
        self.time.push(self.current.time);
        self.velocity.push(self.current.velocity);
        self.altitude.push(self.current.altitude);

        if self.state.staging.update(index) {
            debug!(
                "SRB separation at t={:.1}s, altitude {:.1} m",
                self.current.time, self.current.altitude
            );
            self.events.srb_separation_step = Some(index);
        }

        self.state.booster.burn();
        if !self.state.srb_detached() {
            self.state.srb.burn();
        }

        if self.state.booster.apply_cutoff() {
            debug!("Atlas booster burnout at t={:.1}s", self.current.time);
            self.events.booster_burnout_step = Some(index);
        }
        if self.state.srb.apply_cutoff() {
            debug!("SRB burnout at t={:.1}s", self.current.time);
            self.events.srb_burnout_step = Some(index);
        }

        self.last_total_mass = Some(total_mass);
        self.step = index;
        true
    }

    /// Writes the final acceleration and hands over the trace. Any steps not
    /// taken yet are skipped, the trace ends at the current step.
    pub fn finish(mut self) -> SimulationRun {
        let total_mass = self
            .last_total_mass
            .unwrap_or_else(|| self.state.total_mass(&self.structure));
        let thrust = 1000.0 * self.state.total_thrust(&self.structure);
        let reference = self.step.saturating_sub(1);
        let acceleration = self.forces.net_acceleration(
            thrust,
            self.altitude[reference],
            self.velocity[reference],
            total_mass,
        );
        self.acceleration.push(acceleration);

        let trace = SimulationTrace::new(self.time, self.acceleration, self.velocity, self.altitude);
        info!(
            "Simulation complete. t={:.1}s, altitude {:.1} m, velocity {:.1} m/s",
            self.current.time, self.current.altitude, self.current.velocity
        );

        SimulationRun {
            trace,
            events: self.events,
            final_state: self.state,
        }
    }

    pub fn working_state(&self) -> &WorkingState {
        &self.state
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn current_kinematics(&self) -> Kinematics {
        self.current
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Runs the default 250 s horizon on a copy of `configuration`.
pub fn run_simulation(configuration: &RocketConfiguration) -> SimulationRun {
    SimulationEngine::new(configuration).run()
}
