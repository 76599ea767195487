use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::sim::body::BodySet;
use crate::sim::forces::NewtonianGravity;
use crate::sim::initial_parameters::InitialState;
use crate::sim::integrator;
use crate::sim::trail::TrailBuffer;
use crate::sim::units::{dt_from_scale, Float, TRAIL_LENGTH};
use crate::sim::vector::Vec3;

/// The one handle a renderer or speed control needs: every step goes
/// force computation, integration, trail recording, in that order.
#[derive(Clone, Debug)]
pub struct StellarSystem {
    names: Vec<String>,
    bodies: BodySet,
    trails: TrailBuffer,
    force_model: NewtonianGravity,
    steps_taken: u64,
    elapsed_time: Float,
}

impl StellarSystem {
    pub fn new(initial: InitialState) -> Result<StellarSystem> {
        Self::with_trail_length(initial, TRAIL_LENGTH)
    }

    pub fn with_trail_length(initial: InitialState, trail_length: usize) -> Result<StellarSystem> {
        if trail_length == 0 {
            return Err(Error::InvalidConfiguration(
                "trail length must be at least one".to_string(),
            ));
        }
        let InitialState {
            mut names,
            masses,
            positions,
            velocities,
        } = initial;
        let bodies = BodySet::new(masses, positions, velocities)?;
        names.resize_with(bodies.len(), String::new);
        for (index, name) in names.iter_mut().enumerate() {
            if name.is_empty() {
                *name = format!("Body {}", index);
            }
        }
        let trails = TrailBuffer::with_capacity(bodies.len(), trail_length);
        debug!(
            "Created stellar system with {} bodies, trail length {}",
            bodies.len(),
            trail_length
        );
        Ok(StellarSystem {
            names,
            bodies,
            trails,
            force_model: NewtonianGravity,
            steps_taken: 0,
            elapsed_time: 0.,
        })
    }

    /// Advance by `dt_scale` days. On failure nothing changes, trails included.
    pub fn step(&mut self, dt_scale: Float) -> Result<()> {
        if !dt_scale.is_finite() {
            return Err(Error::InvalidTimeStep(dt_scale));
        }
        let dt = dt_from_scale(dt_scale);
        if let Err(e) = integrator::advance(&mut self.bodies, &self.force_model, dt) {
            warn!("Step {} aborted: {}", self.steps_taken + 1, e);
            return Err(e);
        }
        self.trails.append(&self.bodies.positions());
        self.steps_taken += 1;
        self.elapsed_time += dt;
        trace!("Step {} done, t = {} s", self.steps_taken, self.elapsed_time);
        Ok(())
    }

    /// Run `frames` steps, stopping at the first failure.
    pub fn step_many(&mut self, dt_scale: Float, frames: usize) -> Result<()> {
        for _ in 0..frames {
            self.step(dt_scale)?;
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.bodies.reset_to_initial();
        self.trails.clear();
        self.steps_taken = 0;
        self.elapsed_time = 0.;
        debug!("Reset stellar system to its initial state");
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn masses(&self) -> Vec<Float> {
        self.bodies.masses()
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.bodies.positions()
    }

    pub fn velocities(&self) -> Vec<Vec3> {
        self.bodies.velocities()
    }

    pub fn trail(&self, index: usize) -> Vec<Vec3> {
        self.trails.snapshot(index)
    }

    pub fn trails(&self) -> &TrailBuffer {
        &self.trails
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated seconds since construction or the last reset.
    pub fn elapsed_time(&self) -> Float {
        self.elapsed_time
    }
}
