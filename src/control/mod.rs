pub mod environment;
pub mod launch_stages;
pub mod propulsion;
pub mod rocket;
pub mod simulation;
pub mod structure;
