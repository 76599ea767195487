use log::debug;

use crate::error::{Error, Result};
use crate::sim::units::{Float, G};
use crate::sim::vector::{self, Vec3};

#[derive(Clone, Debug)]
pub struct Body {
    pub(crate) index: usize,
    pub(crate) position: Vec3,
    pub(crate) velocity: Vec3,
    pub(crate) mass: Float,
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Body {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn mass(&self) -> Float {
        self.mass
    }

    pub(crate) fn momentum(&self) -> Vec3 {
        vector::scale(&self.velocity, self.mass)
    }

    pub(crate) fn kinetic_energy(&self) -> Float {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// Pairwise potential energy, `None` if the bodies are coincident or too close.
    pub(crate) fn potential_energy_with(&self, other: &Self) -> Option<Float> {
        let distance = vector::distance(&self.position, &other.position);
        if distance == 0. {
            return None;
        }
        let energy = -G * self.mass * other.mass / distance;
        energy.is_finite().then_some(energy)
    }
}

/// Owns the state of every body. Masses never change after construction and
/// only the integrator writes positions and velocities.
#[derive(Clone, Debug)]
pub struct BodySet {
    bodies: Vec<Body>,
    initial: Vec<Body>,
}

impl BodySet {
    pub fn new(masses: Vec<Float>, positions: Vec<Vec3>, velocities: Vec<Vec3>) -> Result<BodySet> {
        if masses.len() != positions.len() || masses.len() != velocities.len() {
            return Err(Error::InvalidConfiguration(format!(
                "got {} masses, {} positions and {} velocities",
                masses.len(),
                positions.len(),
                velocities.len()
            )));
        }
        if masses.is_empty() {
            return Err(Error::InvalidConfiguration(
                "a system needs at least one body".to_string(),
            ));
        }
        for (index, mass) in masses.iter().enumerate() {
            if !mass.is_finite() || *mass <= 0. {
                return Err(Error::InvalidConfiguration(format!(
                    "mass of body {} must be positive and finite, got {}",
                    index, mass
                )));
            }
        }
        for (index, (position, velocity)) in positions.iter().zip(velocities.iter()).enumerate() {
            if !vector::is_finite(position) || !vector::is_finite(velocity) {
                return Err(Error::InvalidConfiguration(format!(
                    "state of body {} must be finite",
                    index
                )));
            }
        }

        let bodies = masses
            .into_iter()
            .zip(positions)
            .zip(velocities)
            .enumerate()
            .map(|(index, ((mass, position), velocity))| Body {
                index,
                position,
                velocity,
                mass,
            })
            .collect::<Vec<Body>>();
        debug!("Initialised body set with {} bodies", bodies.len());
        Ok(BodySet {
            initial: bodies.clone(),
            bodies,
        })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.bodies.iter().map(|body| body.position).collect()
    }

    pub fn velocities(&self) -> Vec<Vec3> {
        self.bodies.iter().map(|body| body.velocity).collect()
    }

    pub fn masses(&self) -> Vec<Float> {
        self.bodies.iter().map(|body| body.mass).collect()
    }

    pub(crate) fn apply_deltas(&mut self, delta_velocity: &[Vec3], delta_position: &[Vec3]) {
        debug_assert_eq!(delta_velocity.len(), self.bodies.len());
        debug_assert_eq!(delta_position.len(), self.bodies.len());
        for ((body, dv), dx) in self
            .bodies
            .iter_mut()
            .zip(delta_velocity.iter())
            .zip(delta_position.iter())
        {
            body.velocity += dv;
            body.position += dx;
        }
    }

    pub fn reset_to_initial(&mut self) {
        self.bodies.clone_from(&self.initial);
    }
}
