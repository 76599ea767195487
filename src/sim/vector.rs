//! Three dimensional vector arithmetic.
//!
//! `Vec3` is a `nalgebra` column vector; the free functions here are the
//! small vocabulary the rest of the engine is written in.

use nalgebra::Vector3;

use super::units::Float;

pub type Vec3 = Vector3<Float>;

pub fn vec3(x: Float, y: Float, z: Float) -> Vec3 {
    Vec3::new(x, y, z)
}

pub fn zero() -> Vec3 {
    Vec3::zeros()
}

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

pub fn scale(a: &Vec3, factor: Float) -> Vec3 {
    a * factor
}

/// Euclidean norm. Zero for the zero vector; callers dividing by it must check.
pub fn norm(a: &Vec3) -> Float {
    a.norm()
}

pub fn distance(a: &Vec3, b: &Vec3) -> Float {
    norm(&sub(a, b))
}

pub fn is_finite(a: &Vec3) -> bool {
    a.iter().all(|x| x.is_finite())
}
