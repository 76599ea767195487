use log::debug;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::sim::units::{Float, AU};
use crate::sim::vector::{self, vec3, Vec3};

/// Masses, positions and velocities a system starts from, in SI units.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialState {
    pub names: Vec<String>,
    pub masses: Vec<Float>,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
}

impl InitialState {
    /// The Sun and the planets out to Jupiter, all lined up on the x axis.
    pub fn inner_solar_system() -> InitialState {
        //(name, mass in kg, x in AU, v_y in m/s)
        const BODIES: [(&str, Float, Float, Float); 6] = [
            ("Sun", 1.989e30, 0., 0.),
            ("Mercury", 3.301e23, -0.387, 47_870.),
            ("Venus", 4.867e24, 0.723, -35_020.),
            ("Earth", 5.972e24, 1., -29_783.),
            ("Mars", 6.39e23, 1.524, -24_130.),
            ("Jupiter", 1.898e27, 5.204, -13_070.),
        ];
        InitialState {
            names: BODIES.iter().map(|b| b.0.to_string()).collect(),
            masses: BODIES.iter().map(|b| b.1).collect(),
            positions: BODIES.iter().map(|b| vec3(AU * b.2, 0., 0.)).collect(),
            velocities: BODIES.iter().map(|b| vec3(0., b.3, 0.)).collect(),
        }
    }

    pub fn body_count(&self) -> usize {
        self.masses.len()
    }
}

impl Default for InitialState {
    fn default() -> Self {
        Self::inner_solar_system()
    }
}

/// A central star surrounded by randomly scattered bodies.
#[derive(Clone, Debug)]
pub struct RandomSystemParameters {
    pub body_count: usize,
    /// Total mass in kg, shared between the star and the other bodies.
    pub total_mass: Float,
    pub stellar_mass_fraction: Float,
    /// Standard deviation of each position component, in AU.
    pub position_variance: Float,
    /// Standard deviation of each velocity component, in m/s.
    pub velocity_variance: Float,
    /// Fixed seed for reproducible systems; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for RandomSystemParameters {
    fn default() -> Self {
        Self {
            body_count: 5,
            total_mass: 2e30,
            stellar_mass_fraction: 0.999,
            position_variance: 3.,
            velocity_variance: 10_000.,
            seed: None,
        }
    }
}

impl RandomSystemParameters {
    fn random_vector(distribution: &Normal<Float>, rng: &mut StdRng) -> Vec3 {
        vec3(
            distribution.sample(rng),
            distribution.sample(rng),
            distribution.sample(rng),
        )
    }

    fn normal(variance: Float) -> Result<Normal<Float>> {
        if variance < 0. {
            return Err(Error::InvalidConfiguration(format!(
                "variance must not be negative, got {}",
                variance
            )));
        }
        Normal::new(0., variance).map_err(|e| {
            Error::InvalidConfiguration(format!("bad variance {}: {}", variance, e))
        })
    }

    pub fn generate(&self) -> Result<InitialState> {
        if !(self.stellar_mass_fraction > 0. && self.stellar_mass_fraction < 1.) {
            return Err(Error::InvalidConfiguration(format!(
                "stellar mass fraction must lie strictly between 0 and 1, got {}",
                self.stellar_mass_fraction
            )));
        }
        let position_distribution = Self::normal(self.position_variance * AU)?;
        let velocity_distribution = Self::normal(self.velocity_variance)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut state = InitialState {
            names: vec!["Star".to_string()],
            masses: vec![self.total_mass * self.stellar_mass_fraction],
            positions: vec![vector::zero()],
            velocities: vec![vector::zero()],
        };
        let mass = if self.body_count > 0 {
            self.total_mass * (1. - self.stellar_mass_fraction) / self.body_count as Float
        } else {
            0.
        };
        for i in 0..self.body_count {
            state.names.push(format!("Body {}", i + 1));
            state.masses.push(mass);
            state
                .positions
                .push(Self::random_vector(&position_distribution, &mut rng));
            state
                .velocities
                .push(Self::random_vector(&velocity_distribution, &mut rng));
        }
        debug!(
            "Generated random system with {} bodies around a star of {:e} kg",
            self.body_count, state.masses[0]
        );
        Ok(state)
    }
}
