pub type Float = f64;

//Measuring masses in kg, distances in m, time in s.
pub const G: Float = 6.67430e-11;
//Astronomical unit
pub const AU: Float = 149.6e6 * 1000.;
pub const SECONDS_PER_DAY: Float = 86_400.;

//Number of past positions kept per body.
pub const TRAIL_LENGTH: usize = 500;

//One unit of speed scale advances the simulation by one day.
pub const DT_SCALE_MIN: Float = 0.1;
pub const DT_SCALE_MAX: Float = 25.0;
pub const DT_SCALE_DEFAULT: Float = 1.0;

pub fn dt_from_scale(dt_scale: Float) -> Float {
    dt_scale * SECONDS_PER_DAY
}

pub fn meters_to_au(meters: Float) -> Float {
    meters / AU
}
