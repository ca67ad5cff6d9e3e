pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;

pub use constants::*;
pub use control::environment::{AtmosphereModel, AtmosphericConditions};
pub use control::launch_stages::SrbStaging;
pub use control::propulsion::{consume_fuel, EngineClass, PropulsionSystem};
pub use control::rocket::{ParameterSnapshot, RocketConfiguration};
pub use control::simulation::{
    run_simulation, PropulsionEvents, SimulationEngine, SimulationRun, WorkingState,
};
pub use control::structure::Structure;

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;
pub use trajectory_system::forces::ForceModel;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{
    FlightSummary, SeriesBounds, SimulationTrace, TableStride, TraceSample, TraceSeries,
};
