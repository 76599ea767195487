//! Gravitational acceleration field.
//!
//! The integrator talks to a [`ForceModel`]; [`NewtonianGravity`] is the
//! direct pairwise sum over all bodies.

use crate::error::{Error, Result};
use crate::sim::units::{Float, G};
use crate::sim::vector::{self, Vec3};

/// Source of per-body accelerations for a frozen snapshot of positions.
pub trait ForceModel {
    /// Returns one acceleration per body, in body order.
    fn compute(&self, positions: &[Vec3], masses: &[Float]) -> Result<Vec<Vec3>>;
}

/// Direct O(N^2) Newtonian gravity without softening.
///
/// Coincident bodies, and pairs so close that their attraction is not
/// representable, are reported as [`Error::DegenerateConfiguration`]
/// instead of yielding infinite or NaN accelerations.
#[derive(Clone, Copy, Debug, Default)]
pub struct NewtonianGravity;

impl NewtonianGravity {
    /// Acceleration that `accelerating` imposes on a body sitting at `accelerated`.
    /// `None` when the bodies coincide or are so close the result is not finite.
    fn get_acceleration(
        accelerated: &Vec3,
        accelerating: &Vec3,
        accelerating_mass: Float,
    ) -> Option<Vec3> {
        let r = vector::sub(accelerating, accelerated);
        let distance = vector::norm(&r);
        if distance == 0. {
            return None;
        }
        let r_unit = vector::scale(&r, 1. / distance);
        let acceleration = vector::scale(&r_unit, G * accelerating_mass / distance / distance);
        vector::is_finite(&acceleration).then_some(acceleration)
    }
}

impl ForceModel for NewtonianGravity {
    fn compute(&self, positions: &[Vec3], masses: &[Float]) -> Result<Vec<Vec3>> {
        debug_assert_eq!(positions.len(), masses.len());
        let mut accelerations = vec![vector::zero(); positions.len()];
        for i in 0..positions.len() {
            for j in 0..positions.len() {
                if i == j {
                    continue;
                }
                let acceleration = Self::get_acceleration(&positions[i], &positions[j], masses[j])
                    .ok_or(Error::DegenerateConfiguration {
                        first: i.min(j),
                        second: i.max(j),
                    })?;
                accelerations[i] += acceleration;
            }
            if !vector::is_finite(&accelerations[i]) {
                return Err(Error::NonFiniteState { index: i });
            }
        }
        Ok(accelerations)
    }
}
