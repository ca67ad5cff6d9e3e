use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::control::rocket::RocketConfiguration;
use crate::errors::SimulationError;

/// Reads a YAML launch configuration. Fields left out of the file keep their
/// Atlas V defaults; the result is range checked.
pub fn load_configuration<P: AsRef<Path>>(path: P) -> Result<RocketConfiguration, SimulationError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let configuration = configuration_from_reader(BufReader::new(file))?;
    info!("Loaded launch configuration from {}", path.display());
    Ok(configuration)
}

pub fn configuration_from_reader<R: Read>(reader: R) -> Result<RocketConfiguration, SimulationError> {
    let configuration: RocketConfiguration = serde_yaml::from_reader(reader)?;
    if let Err(e) = configuration.validate() {
        warn!("Rejected launch configuration. {}", e);
        return Err(e);
    }
    Ok(configuration)
}
