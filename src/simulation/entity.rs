//! Trait for entities that live in the tank.
//!
//! This trait provides a common interface for everything the tank owns and
//! advances each tick. Entities do not own pixel data; they carry a sprite
//! key resolved by the renderer against externally loaded assets.

use ndarray::Array1;

/// Trait for tank entities with a position, a sprite key, and per-tick motion.
///
/// Any type that implements this trait:
/// - Has a position in 2D space
/// - References a renderable sprite by key
/// - Can be advanced with a time delta
pub trait Entity {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Returns the sprite key used by the renderer to look up the image.
    fn sprite(&self) -> &str;

    /// Advances the entity's position based on the time delta.
    ///
    /// Wall handling is applied by the tank afterwards, so an update may
    /// momentarily leave the bounds.
    ///
    /// # Arguments
    ///
    /// * `dt` - Time delta since the last update in seconds.
    fn update(&mut self, dt: f32);
}
