#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use aquarium::simulation::entity::Entity;
use aquarium::simulation::fish::Fish;
use aquarium::simulation::food::{Food, FoodKind};
use aquarium::simulation::geometry;
use aquarium::simulation::params::Params;
use ndarray::Array1;

fn fish_named(id: usize, name: &str, sprite: &str, speed: f32, x: f32, y: f32) -> Fish {
    Fish::new(
        id,
        name.to_string(),
        sprite.to_string(),
        speed,
        Array1::from_vec(vec![x, y]),
        &Params::default(),
    )
}

#[test]
fn test_food_entity_stays_put() {
    let mut food = Food::new(0, Array1::from_vec(vec![10.0, 20.0]), FoodKind::Shrimp);

    assert_eq!(food.pos()[0], 10.0);
    assert_eq!(food.pos()[1], 20.0);
    assert_eq!(food.sprite(), "food/shrimp");

    food.update(1.0);
    assert_eq!(food.pos()[0], 10.0);
    assert_eq!(food.pos()[1], 20.0);

    food.pos_mut()[0] = 15.0;
    assert_eq!(food.pos()[0], 15.0);
}

#[test]
fn test_fish_entity_moves_by_velocity() {
    let mut fish = fish_named(0, "Nemo", "fish/clownfish", 5.0, 10.0, 20.0);
    fish.velocity = Array1::from_vec(vec![3.0, 4.0]);

    fish.update(0.5);

    assert!((fish.pos()[0] - 11.5).abs() < 0.001);
    assert!((fish.pos()[1] - 22.0).abs() < 0.001);
    assert_eq!(fish.sprite(), "fish/clownfish");
}

#[test]
fn test_eating_fish_holds_still() {
    let mut fish = fish_named(0, "Nemo", "fish/clownfish", 5.0, 10.0, 20.0);
    fish.velocity = Array1::from_vec(vec![3.0, 4.0]);
    fish.start_eating(5);

    fish.update(1.0);

    assert_eq!(fish.pos()[0], 10.0);
    assert_eq!(fish.pos()[1], 20.0);
}

#[test]
fn test_entity_trait_polymorphism() {
    let food = Food::new(0, Array1::from_vec(vec![5.0, 5.0]), FoodKind::Flake);
    let fish = fish_named(1, "Dory", "fish/tang", 2.0, 10.0, 10.0);

    fn get_distance(a: &dyn Entity, b: &dyn Entity) -> f32 {
        geometry::distance(a.pos(), b.pos())
    }

    let distance = get_distance(&food, &fish);
    assert!((distance - 7.071).abs() < 0.1);
}

#[test]
fn test_reflect_into_bounds_bounces_both_axes() {
    let mut pos = Array1::from_vec(vec![120.0, -5.0]);
    let mut velocity = Array1::from_vec(vec![2.0, -3.0]);

    geometry::reflect_into_bounds(&mut pos, &mut velocity, 100.0, 100.0);

    assert_eq!(pos[0], 100.0);
    assert_eq!(pos[1], 0.0);
    assert_eq!(velocity[0], -2.0);
    assert_eq!(velocity[1], 3.0);
}

#[test]
fn test_reflect_leaves_inside_positions_alone() {
    let mut pos = Array1::from_vec(vec![50.0, 60.0]);
    let mut velocity = Array1::from_vec(vec![2.0, -3.0]);

    geometry::reflect_into_bounds(&mut pos, &mut velocity, 100.0, 100.0);

    assert_eq!(pos[0], 50.0);
    assert_eq!(pos[1], 60.0);
    assert_eq!(velocity[0], 2.0);
    assert_eq!(velocity[1], -3.0);
}

#[test]
fn test_food_kind_selector_indices() {
    assert_eq!(FoodKind::from_index(0), Some(FoodKind::Flake));
    assert_eq!(FoodKind::from_index(3), Some(FoodKind::Shrimp));
    assert_eq!(FoodKind::from_index(4), None);
    assert_eq!(FoodKind::from_index(9), None);
    assert_eq!(FoodKind::ALL.len(), 4);
}
