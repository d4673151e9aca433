//! Easing curves used by the transition timelines
//!
//! Inputs are clamped to `[0, 1]`, outputs map 0 to 0 and 1 to 1.

/// Quadratic ease-in: slow start, fast finish
pub fn quad_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out: fast start, slow finish
pub fn quad_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out: slow at both ends
pub fn quad_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Cubic ease-out, used by the picker wheel slide
pub fn cubic_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    1.0 - u * u * u
}
