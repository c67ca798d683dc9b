#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use aquarium::simulation::fish::{ClassifierVerdict, Fish, FishState};
use aquarium::simulation::food::{Food, FoodKind};
use aquarium::simulation::params::Params;
use aquarium::simulation::tank::{Tank, TankError};
use ndarray::Array1;

fn create_test_params() -> Params {
    Params {
        tank_width: 100.0,
        tank_height: 100.0,
        speed_scale: 1.0,
        min_speed: 1.0,
        max_speed: 5.0,
        eat_radius: 1.0,
        eating_ticks: 30,
        wander_ticks_min: 10,
        wander_ticks_max: 20,
        max_food: 4,
        spawn_margin: 10.0,
    }
}

fn approved() -> ClassifierVerdict {
    ClassifierVerdict {
        is_fish: true,
        confidence: 0.9,
    }
}

fn put_fish(tank: &mut Tank, id: usize, name: &str, speed: f32, x: f32, y: f32) {
    let fish = Fish::new(
        id,
        name.to_string(),
        "fish/test".to_string(),
        speed,
        Array1::from_vec(vec![x, y]),
        &tank.params,
    );
    tank.fish.push(fish);
}

fn put_food(tank: &mut Tank, id: usize, x: f32, y: f32) {
    tank.food
        .push(Food::new(id, Array1::from_vec(vec![x, y]), FoodKind::Flake));
}

#[test]
fn test_tank_creation() {
    let tank = Tank::new(create_test_params());

    assert!(tank.fish.is_empty());
    assert!(tank.food.is_empty());
    assert_eq!(tank.time, 0.0);
    assert_eq!(tank.ticks, 0);
}

#[test]
fn test_admission_rejects_bad_input() {
    let mut tank = Tank::new(create_test_params());

    assert_eq!(
        tank.admit_fish("Nemo", "fish/a", 0.0, &approved()),
        Err(TankError::InvalidSpeed { speed: 0.0 })
    );
    assert_eq!(
        tank.admit_fish("Nemo", "fish/a", -2.0, &approved()),
        Err(TankError::InvalidSpeed { speed: -2.0 })
    );
    assert_eq!(
        tank.admit_fish("Nemo", "fish/a", 9.0, &approved()),
        Err(TankError::InvalidSpeed { speed: 9.0 })
    );
    assert_eq!(
        tank.admit_fish("   ", "fish/a", 2.0, &approved()),
        Err(TankError::EmptyName)
    );

    let rejected = ClassifierVerdict {
        is_fish: false,
        confidence: 0.1,
    };
    assert_eq!(
        tank.admit_fish("Nemo", "fish/a", 2.0, &rejected),
        Err(TankError::NotAFish { confidence: 0.1 })
    );

    tank.tick(0.05);
    assert!(tank.fish.is_empty(), "rejected admissions must create nothing");
}

#[test]
fn test_admission_applies_at_tick_boundary() {
    let mut tank = Tank::new(create_test_params());

    let id = tank
        .admit_fish("Nemo", "fish/a", 3.0, &approved())
        .expect("valid admission");

    // queued, not yet in the world
    assert!(tank.fish.is_empty());

    tank.tick(0.05);

    assert_eq!(tank.fish.len(), 1);
    let fish = &tank.fish[0];
    assert_eq!(fish.id, id);
    assert_eq!(fish.name, "Nemo");
    assert_eq!(fish.speed, 3.0);
    assert!(fish.pos[0] >= 0.0 && fish.pos[0] <= 100.0);
    assert!(fish.pos[1] >= 0.0 && fish.pos[1] <= 100.0);
}

#[test]
fn test_admission_scales_speed_once() {
    let mut params = create_test_params();
    params.speed_scale = 0.5;
    let mut tank = Tank::new(params);

    tank.admit_fish("Dory", "fish/b", 4.0, &approved())
        .expect("valid admission");
    tank.tick(0.05);

    assert_eq!(tank.fish[0].speed, 2.0);
}

#[test]
fn test_drop_food_rejects_unknown_kind() {
    let mut tank = Tank::new(create_test_params());

    assert_eq!(
        tank.drop_food(10.0, 10.0, 9),
        Err(TankError::UnknownFoodKind { index: 9 })
    );

    tank.tick(0.05);
    assert!(tank.food.is_empty(), "food list must be unchanged");
}

#[test]
fn test_drop_food_rejects_out_of_bounds() {
    let mut tank = Tank::new(create_test_params());

    assert_eq!(
        tank.drop_food(500.0, 10.0, 0),
        Err(TankError::OutOfBounds { x: 500.0, y: 10.0 })
    );
    assert_eq!(
        tank.drop_food(10.0, -1.0, 0),
        Err(TankError::OutOfBounds { x: 10.0, y: -1.0 })
    );
}

#[test]
fn test_food_applies_at_tick_boundary() {
    let mut tank = Tank::new(create_test_params());

    tank.drop_food(10.0, 20.0, 1).expect("valid drop");
    assert!(tank.food.is_empty());

    tank.tick(0.05);

    assert_eq!(tank.food.len(), 1);
    assert_eq!(tank.food[0].kind, FoodKind::Pellet);
    assert!(tank.food[0].remaining);
}

#[test]
fn test_food_cap_evicts_oldest() {
    let mut tank = Tank::new(create_test_params());

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(
            tank.drop_food(10.0 + i as f32, 10.0, 0)
                .expect("valid drop"),
        );
    }
    tank.tick(0.05);

    assert_eq!(tank.food.len(), 4);
    assert!(
        tank.food_by_id(ids[0]).is_none(),
        "the oldest food is evicted at the cap"
    );
    assert!(tank.food_by_id(ids[4]).is_some());
}

#[test]
fn test_zero_food_cap_disables_feeding() {
    let mut params = create_test_params();
    params.max_food = 0;
    let mut tank = Tank::new(params);

    tank.drop_food(10.0, 10.0, 0).expect("the drop itself is accepted");
    tank.tick(0.05);

    assert!(tank.food.is_empty(), "a zero cap never spawns food");
}

#[test]
fn test_fish_reaches_food_and_eats() {
    let mut tank = Tank::new(create_test_params());
    put_fish(&mut tank, 0, "Nemo", 2.0, 0.0, 0.0);
    tank.drop_food(10.0, 0.0, 0).expect("valid drop");

    for _ in 0..10 {
        tank.tick(1.0);
    }

    assert!(tank.fish[0].is_eating(), "fish should have reached the food");
    assert!(tank.food.is_empty(), "eaten food is removed from the world");
}

#[test]
fn test_contested_food_goes_to_earliest_fish() {
    let mut params = create_test_params();
    params.eat_radius = 12.0;
    let mut tank = Tank::new(params);

    // equidistant fish, creation order A then B, food dropped after both
    put_fish(&mut tank, 0, "A", 2.0, 10.0, 20.0);
    put_fish(&mut tank, 1, "B", 2.0, 30.0, 20.0);
    tank.drop_food(20.0, 20.0, 0).expect("valid drop");

    tank.tick(0.05);
    tank.tick(0.05);

    assert!(tank.fish[0].is_eating(), "fish A wins the contested food");
    assert!(
        !tank.fish[1].is_eating(),
        "fish B reverts instead of eating"
    );
    assert!(tank.food.is_empty());
}

#[test]
fn test_consume_food_is_idempotent() {
    let mut tank = Tank::new(create_test_params());
    put_food(&mut tank, 7, 50.0, 50.0);

    assert!(tank.consume_food(7));
    assert!(!tank.consume_food(7), "second consume observes it gone");
    assert!(!tank.consume_food(42), "unknown ids are a graceful no-op");
    assert!(tank.food.is_empty());
}

#[test]
fn test_food_list_never_holds_consumed_entries() {
    let mut params = create_test_params();
    params.eat_radius = 8.0;
    let mut tank = Tank::new(params);

    put_fish(&mut tank, 0, "Nemo", 3.0, 50.0, 50.0);
    for i in 0..3 {
        tank.drop_food(40.0 + i as f32 * 10.0, 50.0, 0)
            .expect("valid drop");
    }

    for _ in 0..200 {
        tank.tick(0.5);
        assert!(tank.food.iter().all(|f| f.remaining));
    }
}

#[test]
fn test_positions_stay_in_bounds() {
    let mut tank = Tank::new(create_test_params());
    put_fish(&mut tank, 0, "A", 5.0, 1.0, 1.0);
    put_fish(&mut tank, 1, "B", 5.0, 99.0, 99.0);
    put_fish(&mut tank, 2, "C", 5.0, 50.0, 50.0);

    for _ in 0..500 {
        tank.tick(1.0);
        for fish in &tank.fish {
            assert!(fish.pos[0] >= 0.0 && fish.pos[0] <= 100.0);
            assert!(fish.pos[1] >= 0.0 && fish.pos[1] <= 100.0);
        }
    }
}

#[test]
fn test_every_fish_in_exactly_one_state() {
    let mut tank = Tank::new(create_test_params());
    put_fish(&mut tank, 0, "A", 2.0, 10.0, 10.0);
    put_fish(&mut tank, 1, "B", 3.0, 90.0, 90.0);
    tank.drop_food(50.0, 50.0, 2).expect("valid drop");

    for _ in 0..100 {
        tank.tick(0.5);
        for fish in &tank.fish {
            // the match is the check: every state is one of the three
            match fish.state {
                FishState::Wandering
                | FishState::Seeking { .. }
                | FishState::Eating { .. } => {}
            }
        }
    }
}

#[test]
fn test_snapshot_reflects_world() {
    let mut tank = Tank::new(create_test_params());
    put_fish(&mut tank, 0, "Nemo", 2.0, 30.0, 40.0);
    put_food(&mut tank, 0, 60.0, 20.0);

    let snapshot = tank.snapshot();

    assert_eq!(snapshot.fish.len(), 1);
    assert_eq!(snapshot.fish[0].name, "Nemo");
    assert_eq!(snapshot.fish[0].x, 30.0);
    assert_eq!(snapshot.fish[0].y, 40.0);
    assert_eq!(snapshot.food.len(), 1);
    assert_eq!(snapshot.food[0].sprite, "food/flake");

    // the snapshot is plain data for the renderer boundary
    serde_json::to_string(&snapshot).expect("snapshot serializes");
}

#[test]
fn test_params_file_round_trip() {
    let params = create_test_params();
    let path = std::env::temp_dir().join("aquarium_params_test.json");
    let path = path.to_str().expect("utf-8 temp path");

    params.save_to_file(path).expect("save params");
    let loaded = Params::load_from_file(path).expect("load params");

    assert_eq!(loaded.tank_width, params.tank_width);
    assert_eq!(loaded.eating_ticks, params.eating_ticks);
    assert_eq!(loaded.max_food, params.max_food);

    let _ = std::fs::remove_file(path);
}
