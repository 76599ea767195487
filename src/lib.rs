//! Newtonian gravity for a handful of point masses.
//!
//! [`StellarSystem`] owns the bodies and their trails and is advanced one
//! fixed step at a time; whoever draws the system reads positions and trail
//! snapshots back after each step.

pub mod config;
pub mod error;
pub mod sim;

pub use config::{BodyConfig, ScenarioConfig};
pub use error::{Error, Result};
pub use sim::body::{Body, BodySet};
pub use sim::forces::{ForceModel, NewtonianGravity};
pub use sim::initial_parameters::{InitialState, RandomSystemParameters};
pub use sim::system::StellarSystem;
pub use sim::trail::TrailBuffer;
pub use sim::units::{Float, AU, G, SECONDS_PER_DAY, TRAIL_LENGTH};
pub use sim::vector::{vec3, Vec3};
