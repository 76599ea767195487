//! Conserved quantities of a body set, for sanity checks on the integration.

use crate::error::{Error, Result};
use crate::sim::body::BodySet;
use crate::sim::units::Float;
use crate::sim::vector::{self, Vec3};

pub fn total_momentum(bodies: &BodySet) -> Vec3 {
    bodies
        .bodies()
        .iter()
        .fold(vector::zero(), |sum, body| sum + body.momentum())
}

pub fn total_kinetic_energy(bodies: &BodySet) -> Float {
    bodies.bodies().iter().map(|body| body.kinetic_energy()).sum()
}

pub fn total_potential_energy(bodies: &BodySet) -> Result<Float> {
    let bodies = bodies.bodies();
    let mut energy = 0.;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            energy += bodies[i]
                .potential_energy_with(&bodies[j])
                .ok_or(Error::DegenerateConfiguration {
                    first: i,
                    second: j,
                })?;
        }
    }
    Ok(energy)
}

pub fn total_energy(bodies: &BodySet) -> Result<Float> {
    Ok(total_kinetic_energy(bodies) + total_potential_energy(bodies)?)
}

pub fn center_of_mass(bodies: &BodySet) -> Vec3 {
    let total_mass = bodies.masses().iter().sum::<Float>();
    let weighted = bodies
        .bodies()
        .iter()
        .fold(vector::zero(), |sum, body| {
            sum + vector::scale(&body.position(), body.mass())
        });
    vector::scale(&weighted, 1. / total_mass)
}
