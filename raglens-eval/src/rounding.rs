//! Fixed-decimal rounding used by every reported score.

/// Round an `f32` to `places` decimal places.
#[must_use]
pub fn round_f32(value: f32, places: i32) -> f32 {
    let factor = 10_f32.powi(places);
    (value * factor).round() / factor
}

/// Round an `f64` to `places` decimal places.
#[must_use]
pub fn round_f64(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}
