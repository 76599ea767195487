pub mod body;
pub mod diagnostics;
pub mod forces;
pub mod initial_parameters;
pub mod integrator;
pub mod system;
pub mod trail;
pub mod units;
pub mod vector;
