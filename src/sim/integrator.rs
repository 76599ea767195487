//! Fixed-step semi-implicit Euler integration.
//!
//! The position update uses the velocity that was just updated in the same
//! step, not the velocity from the start of the step.

use crate::error::{Error, Result};
use crate::sim::body::BodySet;
use crate::sim::forces::ForceModel;
use crate::sim::units::Float;
use crate::sim::vector::{self, Vec3};

/// Advance `bodies` by `dt` seconds. Either the whole step is applied or none of it.
pub fn advance<F: ForceModel + ?Sized>(
    bodies: &mut BodySet,
    force_model: &F,
    dt: Float,
) -> Result<()> {
    if !dt.is_finite() {
        return Err(Error::InvalidTimeStep(dt));
    }
    if dt == 0. {
        return Ok(());
    }

    let accelerations = force_model.compute(&bodies.positions(), &bodies.masses())?;
    let delta_velocity = accelerations
        .iter()
        .map(|a| vector::scale(a, dt))
        .collect::<Vec<Vec3>>();
    let new_velocities = bodies
        .velocities()
        .iter()
        .zip(delta_velocity.iter())
        .map(|(v, dv)| vector::add(v, dv))
        .collect::<Vec<Vec3>>();
    let delta_position = new_velocities
        .iter()
        .map(|v| vector::scale(v, dt))
        .collect::<Vec<Vec3>>();

    let positions = bodies.positions();
    for index in 0..positions.len() {
        let new_position = vector::add(&positions[index], &delta_position[index]);
        if !vector::is_finite(&new_velocities[index]) || !vector::is_finite(&new_position) {
            return Err(Error::NonFiniteState { index });
        }
    }
    bodies.apply_deltas(&delta_velocity, &delta_position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::forces::NewtonianGravity;
    use crate::sim::units::G;
    use crate::sim::vector::vec3;
    use approx::assert_relative_eq;

    struct ConstantField(Vec3);

    impl ForceModel for ConstantField {
        fn compute(&self, positions: &[Vec3], _masses: &[Float]) -> Result<Vec<Vec3>> {
            Ok(vec![self.0; positions.len()])
        }
    }

    fn single_body() -> BodySet {
        BodySet::new(vec![1.], vec![vec3(0., 0., 0.)], vec![vec3(1., 0., 0.)]).unwrap()
    }

    #[test]
    fn position_uses_updated_velocity() {
        let mut bodies = single_body();
        advance(&mut bodies, &ConstantField(vec3(0., 2., 0.)), 3.).unwrap();
        // v = (1, 0, 0) + (0, 2, 0) * 3 = (1, 6, 0); x = v * 3
        assert_eq!(bodies.velocities()[0], vec3(1., 6., 0.));
        assert_eq!(bodies.positions()[0], vec3(3., 18., 0.));
    }

    #[test]
    fn zero_time_step_is_a_no_op() {
        let mut bodies = single_body();
        advance(&mut bodies, &ConstantField(vec3(5., 5., 5.)), 0.).unwrap();
        assert_eq!(bodies.positions()[0], vec3(0., 0., 0.));
        assert_eq!(bodies.velocities()[0], vec3(1., 0., 0.));
    }

    #[test]
    fn negative_time_step_runs_backwards() {
        let mut bodies = single_body();
        advance(&mut bodies, &ConstantField(vector::zero()), -2.).unwrap();
        assert_eq!(bodies.positions()[0], vec3(-2., 0., 0.));
    }

    #[test]
    fn non_finite_time_step_is_rejected() {
        let mut bodies = single_body();
        for dt in [Float::NAN, Float::INFINITY, Float::NEG_INFINITY] {
            let result = advance(&mut bodies, &NewtonianGravity, dt);
            assert!(matches!(result, Err(Error::InvalidTimeStep(_))));
        }
        assert_eq!(bodies.positions()[0], vec3(0., 0., 0.));
    }

    #[test]
    fn overflowing_step_leaves_state_untouched() {
        let mut bodies = single_body();
        let huge = ConstantField(vec3(Float::MAX / 2., 0., 0.));
        let result = advance(&mut bodies, &huge, 10.);
        assert!(matches!(result, Err(Error::NonFiniteState { index: 0 })));
        assert_eq!(bodies.positions()[0], vec3(0., 0., 0.));
        assert_eq!(bodies.velocities()[0], vec3(1., 0., 0.));

        // Finite velocity, but the position update overflows.
        let drift = ConstantField(vector::zero());
        advance(&mut bodies, &drift, Float::MAX).unwrap();
        assert_eq!(bodies.positions()[0], vec3(Float::MAX, 0., 0.));
        let result = advance(&mut bodies, &drift, Float::MAX);
        assert!(matches!(result, Err(Error::NonFiniteState { index: 0 })));
        assert_eq!(bodies.positions()[0], vec3(Float::MAX, 0., 0.));
        assert_eq!(bodies.velocities()[0], vec3(1., 0., 0.));
    }

    #[test]
    fn degenerate_step_leaves_state_untouched() {
        let mut bodies = BodySet::new(
            vec![1., 1.],
            vec![vec3(1., 1., 1.), vec3(1., 1., 1.)],
            vec![vec3(0., 1., 0.), vec3(0., -1., 0.)],
        )
        .unwrap();
        let result = advance(&mut bodies, &NewtonianGravity, 10.);
        assert!(matches!(
            result,
            Err(Error::DegenerateConfiguration { first: 0, second: 1 })
        ));
        assert_eq!(bodies.positions(), vec![vec3(1., 1., 1.), vec3(1., 1., 1.)]);
        assert_eq!(bodies.velocities(), vec![vec3(0., 1., 0.), vec3(0., -1., 0.)]);
    }

    #[test]
    fn symmetric_bodies_fall_towards_each_other() {
        let mut bodies = BodySet::new(
            vec![1e10, 1e10],
            vec![vec3(1., 0., 0.), vec3(-1., 0., 0.)],
            vec![vector::zero(), vector::zero()],
        )
        .unwrap();
        advance(&mut bodies, &NewtonianGravity, 1.).unwrap();

        let expected_speed = G * 1e10 / 4.;
        assert_relative_eq!(bodies.velocities()[0].x, -expected_speed, max_relative = 1e-12);
        assert_relative_eq!(bodies.velocities()[1].x, expected_speed, max_relative = 1e-12);
        assert!(bodies.positions()[0].x < 1.);
        assert!(bodies.positions()[1].x > -1.);
    }
}
