//! Food items dropped into the tank by the user.
//!
//! Food does not move. It sits where it was dropped until the first fish
//! reaches it, at which point the tank removes it from the world.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// The recognized set of food icons, selected by number key in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    /// Floating flake, the default drop.
    Flake,
    /// Sinking pellet.
    Pellet,
    /// Bloodworm treat.
    Bloodworm,
    /// Brine shrimp treat.
    Shrimp,
}

impl FoodKind {
    /// All recognized kinds, in selector order.
    pub const ALL: [FoodKind; 4] = [
        FoodKind::Flake,
        FoodKind::Pellet,
        FoodKind::Bloodworm,
        FoodKind::Shrimp,
    ];

    /// Maps a selector index (number key) to a kind.
    ///
    /// # Returns
    ///
    /// `None` for indices outside the recognized set.
    pub fn from_index(index: usize) -> Option<FoodKind> {
        FoodKind::ALL.get(index).copied()
    }

    /// Sprite key for the renderer's asset lookup.
    pub fn sprite(self) -> &'static str {
        match self {
            FoodKind::Flake => "food/flake",
            FoodKind::Pellet => "food/pellet",
            FoodKind::Bloodworm => "food/bloodworm",
            FoodKind::Shrimp => "food/shrimp",
        }
    }

    /// Display label for the frontend selector.
    pub fn label(self) -> &'static str {
        match self {
            FoodKind::Flake => "Flake",
            FoodKind::Pellet => "Pellet",
            FoodKind::Bloodworm => "Bloodworm",
            FoodKind::Shrimp => "Shrimp",
        }
    }
}

/// A food item waiting to be eaten.
///
/// The `remaining` flag guards the consumption pathway: it flips exactly once,
/// and the tank removes the item from its list at the same moment, so the
/// food list only ever holds remaining food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Unique id, monotonically increasing in creation order.
    pub id: usize,
    /// Drop position; food does not move.
    pub pos: Array1<f32>,
    /// Which icon was dropped.
    pub kind: FoodKind,
    /// `true` until the food is consumed.
    pub remaining: bool,
}

impl Food {
    /// Creates a new food item at the drop position.
    pub fn new(id: usize, pos: Array1<f32>, kind: FoodKind) -> Self {
        Self {
            id,
            pos,
            kind,
            remaining: true,
        }
    }

    /// Marks this food as consumed. Called only through the tank's
    /// consumption pathway.
    pub fn mark_consumed(&mut self) {
        self.remaining = false;
    }
}

impl Entity for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn sprite(&self) -> &str {
        self.kind.sprite()
    }

    fn update(&mut self, _dt: f32) {
        // food stays where it was dropped
    }
}
