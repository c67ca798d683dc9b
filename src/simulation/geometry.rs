//! Geometric helpers for distance calculations and wall handling.

use ndarray::Array1;

/// Calculates the Euclidean distance between two points.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    (a - b).mapv(|x| x.powi(2)).sum().sqrt()
}

/// Reflects a position back into the tank bounds, flipping the velocity
/// sign on each violated axis.
///
/// Applied per axis so a corner hit bounces on both. The position is clamped
/// so an entity never renders outside the glass.
///
/// # Arguments
///
/// * `pos` - Mutable position vector to reflect
/// * `velocity` - Mutable velocity vector; violated components are negated
/// * `width` - Tank width
/// * `height` - Tank height
pub fn reflect_into_bounds(
    pos: &mut Array1<f32>,
    velocity: &mut Array1<f32>,
    width: f32,
    height: f32,
) {
    if pos[0] < 0.0 || pos[0] > width {
        velocity[0] = -velocity[0];
        pos[0] = pos[0].clamp(0.0, width);
    }
    if pos[1] < 0.0 || pos[1] > height {
        velocity[1] = -velocity[1];
        pos[1] = pos[1].clamp(0.0, height);
    }
}

/// Checks whether a point lies within the tank bounds.
pub fn in_bounds(pos: &Array1<f32>, width: f32, height: f32) -> bool {
    pos[0] >= 0.0 && pos[0] <= width && pos[1] >= 0.0 && pos[1] <= height
}
