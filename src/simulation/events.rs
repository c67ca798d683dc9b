//! Queued input commands and tick-internal simulation events.
//!
//! External inputs (admissions, feedings) are queued as commands and applied
//! only at tick boundaries, so a frame never observes a half-updated tank.
//! Within a tick, steering collects bite intents into an event queue that is
//! applied serially in fish creation order; the queue is how contested food
//! resolves to exactly one eater.

use ndarray::Array1;

use super::event_log::EventColor;
use super::fish::FishState;
use super::food::FoodKind;
use super::tank::Tank;

/// External input applied at the next tick boundary.
///
/// Ids are assigned when the command is accepted at the boundary, so callers
/// can refer to the entity before it exists in the world.
#[derive(Debug, Clone)]
pub enum TankCommand {
    /// Admit a new fish. Validation already happened at the boundary.
    AddFish {
        /// Reserved fish id.
        id: usize,
        /// User-supplied name.
        name: String,
        /// Sprite key from the drawing pipeline.
        sprite: String,
        /// Cruising speed, already scaled.
        speed: f32,
    },
    /// Drop a food item.
    DropFood {
        /// Reserved food id.
        id: usize,
        /// Drop position.
        pos: Array1<f32>,
        /// Selected food kind.
        kind: FoodKind,
    },
}

/// Events that modify tank state during a tick.
///
/// Collected during the steering pass and applied serially so contested food
/// is consumed exactly once.
#[derive(Debug, Clone)]
pub enum TankEvent {
    /// A fish came within eat radius of its target and wants to eat it.
    FoodBitten {
        /// Id of the biting fish.
        fish_id: usize,
        /// Id of the targeted food item.
        food_id: usize,
    },
}

/// Queue for collecting simulation events during the steering pass.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<TankEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: TankEvent) {
        self.events.push(event);
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, TankEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the tank.
///
/// Bites are queued in fish creation order, so the earliest-created fish wins
/// a contested food item. Later claimants observe the food already removed
/// and fall back to wandering; they retarget on their next steering step.
pub fn apply_events(tank: &mut Tank, mut queue: EventQueue) {
    let eating_ticks = tank.params.eating_ticks;

    for event in queue.drain() {
        match event {
            TankEvent::FoodBitten { fish_id, food_id } => {
                let kind = tank.food.iter().find(|f| f.id == food_id).map(|f| f.kind);

                if tank.consume_food(food_id) {
                    if let Some(fish) = tank.fish.iter_mut().find(|f| f.id == fish_id) {
                        fish.start_eating(eating_ticks);
                        let label = kind.map_or("food", FoodKind::label);
                        tank.event_log.log(
                            tank.time,
                            format!("{} ate a {}", fish.name, label),
                            EventColor::Meal,
                        );
                    }
                } else if let Some(fish) = tank.fish.iter_mut().find(|f| f.id == fish_id) {
                    // lost the race; recover silently
                    if fish.state != FishState::Wandering {
                        fish.clear_target();
                        tank.event_log.log(
                            tank.time,
                            format!("{} lost the race for a bite", fish.name),
                            EventColor::Contention,
                        );
                    }
                }
            }
        }
    }
}
