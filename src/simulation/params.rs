use serde::{Deserialize, Serialize};

/// Simulation parameters that control tank behavior.
///
/// Fixed at tank construction; there is no ambient global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// Tank width in world units.
    pub tank_width: f32,
    /// Tank height in world units.
    pub tank_height: f32,
    /// Scale applied once to the user-entered speed at admission.
    pub speed_scale: f32,
    /// Minimum accepted cruising speed (user input, pre-scale).
    pub min_speed: f32,
    /// Maximum accepted cruising speed (user input, pre-scale).
    pub max_speed: f32,
    /// Distance below which a fish is considered to have reached food.
    pub eat_radius: f32,
    /// Number of ticks a fish stays in the Eating state.
    pub eating_ticks: u32,
    /// Minimum ticks between wander heading changes.
    pub wander_ticks_min: u32,
    /// Maximum ticks between wander heading changes.
    pub wander_ticks_max: u32,
    /// Food item cap; the oldest item is evicted when exceeded. A cap of
    /// zero disables feeding: drops are accepted but never spawn.
    pub max_food: usize,
    /// Margin kept between a spawned fish and the tank walls.
    pub spawn_margin: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            tank_width: 900.0,
            tank_height: 600.0,
            speed_scale: 0.5,
            min_speed: 1.0,
            max_speed: 5.0,
            eat_radius: 28.0,
            eating_ticks: 45,
            wander_ticks_min: 60,
            wander_ticks_max: 180,
            max_food: 32,
            spawn_margin: 50.0,
        }
    }
}

impl Params {
    /// Loads parameters from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let params = serde_json::from_str(&json)?;
        Ok(params)
    }

    /// Saves parameters to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
