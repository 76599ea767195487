//! Scenario files.
//!
//! A scenario lists the bodies of a system in YAML. Positions are written in
//! AU and velocities in m/s:
//!
//! ```yaml
//! trail_length: 500       # optional
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     position_au: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!   - name: Earth
//!     mass: 5.972e24
//!     position_au: [1.0, 0.0, 0.0]
//!     velocity: [0.0, -29783.0, 0.0]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::sim::initial_parameters::InitialState;
use crate::sim::units::{Float, AU};
use crate::sim::vector::vec3;

/// Initial state of a single body.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: Option<String>,
    pub mass: Float,
    pub position_au: [Float; 3],
    #[serde(default)]
    pub velocity: [Float; 3],
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub trail_length: Option<usize>,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<ScenarioConfig> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig> {
        let file = File::open(path.as_ref())?;
        let scenario: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded scenario {} with {} bodies",
            path.as_ref().display(),
            scenario.bodies.len()
        );
        Ok(scenario)
    }

    /// Converts to SI units. Physical validation happens when the system is built.
    pub fn into_initial_state(self) -> InitialState {
        let mut state = InitialState {
            names: Vec::with_capacity(self.bodies.len()),
            masses: Vec::with_capacity(self.bodies.len()),
            positions: Vec::with_capacity(self.bodies.len()),
            velocities: Vec::with_capacity(self.bodies.len()),
        };
        for (index, body) in self.bodies.into_iter().enumerate() {
            let [x, y, z] = body.position_au;
            let [v_x, v_y, v_z] = body.velocity;
            state
                .names
                .push(body.name.unwrap_or_else(|| format!("Body {}", index)));
            state.masses.push(body.mass);
            state.positions.push(vec3(AU * x, AU * y, AU * z));
            state.velocities.push(vec3(v_x, v_y, v_z));
        }
        state
    }
}
