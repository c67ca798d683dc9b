//! Fish entity, steering state machine, and admission inputs.
//!
//! A fish wanders until food exists, seeks the nearest piece, and eats on
//! contact. Steering only reads the food list; consumption goes through the
//! tank so at most one fish wins a contested piece.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::food::Food;
use super::geometry;
use super::params::Params;
use super::spatial::FoodIndex;

/// Verdict produced by the external drawing classifier.
///
/// The tank treats this strictly as an admission gate: a failed verdict means
/// no fish is created and the caller re-prompts the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierVerdict {
    /// Whether the drawing was accepted as a fish.
    pub is_fish: bool,
    /// Model confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Steering state of a fish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FishState {
    /// Idle swimming with randomized heading changes.
    Wandering,
    /// Chasing a food item by id.
    ///
    /// The id is a weak reference: if the food was eaten by a rival the
    /// lookup fails and the fish retargets.
    Seeking {
        /// Id of the pursued food item.
        target: usize,
    },
    /// Holding still over a just-eaten piece for a fixed number of ticks.
    Eating {
        /// Ticks remaining before the fish resumes wandering.
        ticks_left: u32,
    },
}

/// A user-created fish swimming in the tank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fish {
    /// Unique id, monotonically increasing in creation order.
    pub id: usize,
    /// User-supplied name; uniqueness is not required.
    pub name: String,
    /// Sprite key produced by the external drawing pipeline.
    pub sprite: String,
    /// Cruising speed, scaled once at admission and immutable afterwards.
    pub speed: f32,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Current velocity; magnitude equals `speed` while moving.
    pub velocity: Array1<f32>,
    /// Current steering state.
    pub state: FishState,
    /// Ticks until the next wander heading change.
    redirect_in: u32,
}

impl Fish {
    /// Creates a new fish at the given position with a random heading.
    ///
    /// The first wander interval already follows the tank's configured
    /// redirect range.
    pub fn new(
        id: usize,
        name: String,
        sprite: String,
        speed: f32,
        pos: Array1<f32>,
        params: &Params,
    ) -> Self {
        let mut fish = Self {
            id,
            name,
            sprite,
            speed,
            pos,
            velocity: Array1::zeros(2),
            state: FishState::Wandering,
            redirect_in: 0,
        };
        fish.pick_wander_heading(params.wander_ticks_min, params.wander_ticks_max);
        fish
    }

    /// Runs one steering step against the current food list.
    ///
    /// Reads food state but never mutates it; reaching a target is reported
    /// as a bite intent that the tank arbitrates.
    ///
    /// # Returns
    ///
    /// `Some(food_id)` when the fish is within eat radius of its target.
    pub fn steer(&mut self, foods: &[Food], index: &FoodIndex, params: &Params) -> Option<usize> {
        if let FishState::Eating { ticks_left } = self.state {
            if ticks_left > 1 {
                self.state = FishState::Eating {
                    ticks_left: ticks_left - 1,
                };
            } else {
                self.state = FishState::Wandering;
                self.pick_wander_heading(params.wander_ticks_min, params.wander_ticks_max);
            }
            return None;
        }

        match self.acquire_target(foods, index) {
            Some(target) => {
                let Some(food) = foods.iter().find(|f| f.id == target) else {
                    // index and list come from the same snapshot, so a miss
                    // means the tank holds no food at all
                    self.state = FishState::Wandering;
                    return None;
                };
                let food_pos = &food.pos;
                let dist = geometry::distance(&self.pos, food_pos);

                if dist <= params.eat_radius {
                    // within reach; the tank decides who actually eats
                    return Some(target);
                }

                // steer straight at the target at cruising speed
                self.velocity = (food_pos - &self.pos) * (self.speed / dist.max(f32::EPSILON));
                self.state = FishState::Seeking { target };
            }
            None => {
                self.state = FishState::Wandering;
                if self.redirect_in == 0 {
                    self.pick_wander_heading(params.wander_ticks_min, params.wander_ticks_max);
                } else {
                    self.redirect_in -= 1;
                }
            }
        }

        None
    }

    /// Starts the Eating state after the tank granted this fish's bite.
    pub fn start_eating(&mut self, eating_ticks: u32) {
        self.state = FishState::Eating {
            ticks_left: eating_ticks.max(1),
        };
    }

    /// Drops the current target after a lost bite; the fish retargets or
    /// wanders on its next steering step.
    pub fn clear_target(&mut self) {
        self.state = FishState::Wandering;
    }

    /// Whether the fish is currently in the Eating state.
    pub fn is_eating(&self) -> bool {
        matches!(self.state, FishState::Eating { .. })
    }

    /// Whether the fish is facing left, for sprite mirroring.
    pub fn facing_left(&self) -> bool {
        self.velocity[0] < 0.0
    }

    /// Resolves the food item to chase this tick.
    ///
    /// Keeps the current target while it is still in the list; a stale id
    /// (eaten by a rival) retargets the nearest remaining food. Nearest is
    /// by Euclidean distance with ties broken by creation order.
    fn acquire_target(&self, foods: &[Food], index: &FoodIndex) -> Option<usize> {
        if let FishState::Seeking { target } = self.state {
            if foods.iter().any(|f| f.id == target) {
                return Some(target);
            }
        }
        index.nearest_food(&self.pos)
    }

    fn pick_wander_heading(&mut self, ticks_min: u32, ticks_max: u32) {
        let mut rng = rand::rng();
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        self.velocity = Array1::from_vec(vec![
            angle.cos() * self.speed,
            angle.sin() * self.speed,
        ]);
        self.redirect_in = rng.random_range(ticks_min..=ticks_max.max(ticks_min));
    }
}

impl Entity for Fish {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn sprite(&self) -> &str {
        &self.sprite
    }

    fn update(&mut self, dt: f32) {
        // an eating fish holds still over its meal
        if self.is_eating() {
            return;
        }
        self.pos += &(&self.velocity * dt);
    }
}
