//! The tank world: entity collections and the per-tick update loop.
//!
//! The tank owns all fish and food and is the sole mutator of the food list.
//! Fish never consume food directly; their steering steps emit bite intents
//! that the tank resolves in creation order, so a contested piece is eaten by
//! exactly one fish. External inputs are queued and applied only at tick
//! boundaries.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use serde::Serialize;
use std::fmt;

use super::entity::Entity;
use super::event_log::{EventColor, EventLog};
use super::events::{self, EventQueue, TankCommand, TankEvent};
use super::fish::{ClassifierVerdict, Fish, FishState};
use super::food::{Food, FoodKind};
use super::geometry;
use super::params::Params;
use super::spatial::FoodIndex;

/// Validation errors raised at the tank boundary.
///
/// All of these reject the attempted action before any entity is created;
/// the caller is responsible for re-prompting the user. Nothing inside the
/// tick loop ever produces an error.
#[derive(Debug, Clone, PartialEq)]
pub enum TankError {
    /// The requested cruising speed is non-positive or outside the range.
    InvalidSpeed {
        /// The rejected speed value.
        speed: f32,
    },
    /// The fish name was empty or all whitespace.
    EmptyName,
    /// The requested drop position lies outside the tank.
    OutOfBounds {
        /// Requested x coordinate.
        x: f32,
        /// Requested y coordinate.
        y: f32,
    },
    /// The classifier did not accept the drawing as a fish.
    NotAFish {
        /// Classifier confidence for the rejected drawing.
        confidence: f32,
    },
    /// The food selector index does not name a recognized kind.
    UnknownFoodKind {
        /// The rejected selector index.
        index: usize,
    },
}

impl fmt::Display for TankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TankError::InvalidSpeed { speed } => {
                write!(f, "speed {speed} is outside the accepted range")
            }
            TankError::EmptyName => write!(f, "fish name must not be empty"),
            TankError::OutOfBounds { x, y } => {
                write!(f, "({x}, {y}) is outside the tank")
            }
            TankError::NotAFish { confidence } => write!(
                f,
                "drawing rejected by the classifier ({:.0}% fish-like)",
                confidence * 100.0
            ),
            TankError::UnknownFoodKind { index } => {
                write!(f, "no food kind at selector index {index}")
            }
        }
    }
}

impl std::error::Error for TankError {}

/// Per-fish entry in a frame snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FishView {
    /// Sprite key for asset lookup.
    pub sprite: String,
    /// Fish name, for labels.
    pub name: String,
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Steering state, for eating animations.
    pub state: FishState,
    /// Whether the sprite should be mirrored.
    pub facing_left: bool,
}

/// Per-food entry in a frame snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FoodView {
    /// Sprite key for asset lookup.
    pub sprite: &'static str,
    /// Food kind.
    pub kind: FoodKind,
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
}

/// Read-only state handed to the renderer each frame.
#[derive(Debug, Clone, Serialize)]
pub struct TankSnapshot {
    /// Simulation time in seconds.
    pub time: f32,
    /// All fish, in render (= creation) order.
    pub fish: Vec<FishView>,
    /// All active food items.
    pub food: Vec<FoodView>,
}

/// The tank world containing all simulation state.
pub struct Tank {
    /// All fish, insertion order = creation order. Render order and the
    /// tie-break order for contested food both follow this order.
    pub fish: Vec<Fish>,
    /// Active food items; shrinks as pieces are eaten.
    pub food: Vec<Food>,
    /// Construction-time configuration.
    pub params: Params,
    /// Total simulation time elapsed.
    pub time: f32,
    /// Number of completed ticks.
    pub ticks: u64,
    /// Recent events for the frontend panel.
    pub event_log: EventLog,
    pending: Vec<TankCommand>,
    next_fish_id: usize,
    next_food_id: usize,
}

impl Tank {
    /// Creates an empty tank with the given configuration.
    pub fn new(params: Params) -> Self {
        Self {
            fish: Vec::new(),
            food: Vec::new(),
            params,
            time: 0.0,
            ticks: 0,
            event_log: EventLog::default(),
            pending: Vec::new(),
            next_fish_id: 0,
            next_food_id: 0,
        }
    }

    /// Admits a new fish through the drawing/classifier boundary.
    ///
    /// Validates immediately but spawns at the next tick boundary. The
    /// entered speed is scaled once by `Params::speed_scale` and immutable
    /// afterwards.
    ///
    /// # Returns
    ///
    /// The id reserved for the fish, or the boundary error that rejected it.
    pub fn admit_fish(
        &mut self,
        name: &str,
        sprite: &str,
        speed: f32,
        verdict: &ClassifierVerdict,
    ) -> Result<usize, TankError> {
        if !verdict.is_fish {
            return Err(TankError::NotAFish {
                confidence: verdict.confidence,
            });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(TankError::EmptyName);
        }
        if speed <= 0.0 || speed < self.params.min_speed || speed > self.params.max_speed {
            return Err(TankError::InvalidSpeed { speed });
        }

        let id = self.next_fish_id;
        self.next_fish_id += 1;
        self.pending.push(TankCommand::AddFish {
            id,
            name: name.to_string(),
            sprite: sprite.to_string(),
            speed: speed * self.params.speed_scale,
        });
        Ok(id)
    }

    /// Drops food at a position with a number-key selected kind.
    ///
    /// Validates immediately but spawns at the next tick boundary.
    ///
    /// # Returns
    ///
    /// The id reserved for the food item, or the boundary error.
    pub fn drop_food(&mut self, x: f32, y: f32, kind_index: usize) -> Result<usize, TankError> {
        let kind = FoodKind::from_index(kind_index)
            .ok_or(TankError::UnknownFoodKind { index: kind_index })?;
        let pos = Array1::from_vec(vec![x, y]);
        if !geometry::in_bounds(&pos, self.params.tank_width, self.params.tank_height) {
            return Err(TankError::OutOfBounds { x, y });
        }

        let id = self.next_food_id;
        self.next_food_id += 1;
        self.pending.push(TankCommand::DropFood { id, pos, kind });
        Ok(id)
    }

    /// Looks up an active food item by id.
    ///
    /// This is the weak-reference lookup behind a fish's seek target: a
    /// stale id simply returns `None`.
    pub fn food_by_id(&self, id: usize) -> Option<&Food> {
        self.food.iter().find(|f| f.id == id)
    }

    /// Consumes a food item; the single mutation pathway for the food list.
    ///
    /// The first successful call removes the item (not merely flags it), so
    /// the food list never holds a consumed entry. Any later call for the
    /// same id is a graceful no-op.
    ///
    /// # Returns
    ///
    /// `true` if this call consumed the food, `false` if it was already gone.
    pub fn consume_food(&mut self, food_id: usize) -> bool {
        match self.food.iter().position(|f| f.id == food_id && f.remaining) {
            Some(idx) => {
                self.food[idx].mark_consumed();
                self.food.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// 1. Applies queued input commands.
    /// 2. Runs every fish's steering step in creation order, collecting bite
    ///    intents. Steering reads the food list but never mutates it.
    /// 3. Resolves bites in queue order through [`Tank::consume_food`]; only
    ///    the first claimant per food item starts eating.
    /// 4. Moves all fish and reflects them off the walls.
    pub fn tick(&mut self, dt: f32) {
        self.ticks += 1;
        self.time += dt;

        self.apply_commands();

        let index = FoodIndex::build(&self.food).expect("failed to build food index");

        let mut queue = EventQueue::new();
        for fish in &mut self.fish {
            if let Some(food_id) = fish.steer(&self.food, &index, &self.params) {
                queue.push(TankEvent::FoodBitten {
                    fish_id: fish.id,
                    food_id,
                });
            }
        }

        events::apply_events(self, queue);

        let (width, height) = (self.params.tank_width, self.params.tank_height);
        for fish in &mut self.fish {
            fish.update(dt);
            geometry::reflect_into_bounds(&mut fish.pos, &mut fish.velocity, width, height);
        }
    }

    /// Produces the read-only state handed to the renderer.
    pub fn snapshot(&self) -> TankSnapshot {
        TankSnapshot {
            time: self.time,
            fish: self
                .fish
                .iter()
                .map(|fish| FishView {
                    sprite: fish.sprite.clone(),
                    name: fish.name.clone(),
                    x: fish.pos[0],
                    y: fish.pos[1],
                    state: fish.state,
                    facing_left: fish.facing_left(),
                })
                .collect(),
            food: self
                .food
                .iter()
                .map(|food| FoodView {
                    sprite: food.kind.sprite(),
                    kind: food.kind,
                    x: food.pos[0],
                    y: food.pos[1],
                })
                .collect(),
        }
    }

    /// Applies queued commands at the tick boundary.
    fn apply_commands(&mut self) {
        let commands: Vec<TankCommand> = self.pending.drain(..).collect();
        for command in commands {
            match command {
                TankCommand::AddFish {
                    id,
                    name,
                    sprite,
                    speed,
                } => {
                    self.event_log.log(
                        self.time,
                        format!("{} joined the tank", name),
                        EventColor::Admission,
                    );
                    let pos = self.random_spawn_pos();
                    let fish = Fish::new(id, name, sprite, speed, pos, &self.params);
                    self.fish.push(fish);
                }
                TankCommand::DropFood { id, pos, kind } => {
                    if self.params.max_food == 0 {
                        // a zero cap disables feeding entirely
                        self.event_log.log(
                            self.time,
                            format!("{} dissolved (feeding disabled)", kind.label()),
                            EventColor::Capacity,
                        );
                        continue;
                    }
                    if self.food.len() >= self.params.max_food {
                        // fixed capacity policy: evict the oldest piece
                        let evicted = self.food.remove(0);
                        self.event_log.log(
                            self.time,
                            format!("old {} sank away (tank at capacity)", evicted.kind.label()),
                            EventColor::Capacity,
                        );
                    }
                    self.event_log.log(
                        self.time,
                        format!("{} dropped", kind.label()),
                        EventColor::Feeding,
                    );
                    self.food.push(Food::new(id, pos, kind));
                }
            }
        }
    }

    fn random_spawn_pos(&self) -> Array1<f32> {
        let margin = self
            .params
            .spawn_margin
            .min(self.params.tank_width / 2.0)
            .min(self.params.tank_height / 2.0);
        let span = Array1::from_vec(vec![
            self.params.tank_width - 2.0 * margin,
            self.params.tank_height - 2.0 * margin,
        ]);
        Array1::random(2, Uniform::new(0., 1.)) * span + margin
    }
}
