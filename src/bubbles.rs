// Decorative bubbles rising from the tank floor.
//
// Purely cosmetic; the simulation never sees them. Drawn under the food and
// fish layers.

use macroquad::prelude::*;
use ::rand::Rng;

/// Frames between spawn bursts.
const SPAWN_INTERVAL: u32 = 12;
/// Rise speed range in pixels per frame.
const SPEED_RANGE: (f32, f32) = (0.6, 1.6);
/// Horizontal drift range in pixels per frame.
const DRIFT_RANGE: (f32, f32) = (-0.4, 0.4);
/// Bubble radius range in pixels.
const RADIUS_RANGE: (f32, f32) = (3.0, 8.0);

struct Bubble {
    x: f32,
    y: f32,
    radius: f32,
    speed: f32,
    drift: f32,
}

impl Bubble {
    fn new(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y,
            radius: rng.random_range(RADIUS_RANGE.0..=RADIUS_RANGE.1),
            speed: rng.random_range(SPEED_RANGE.0..=SPEED_RANGE.1),
            drift: rng.random_range(DRIFT_RANGE.0..=DRIFT_RANGE.1),
        }
    }

    /// Moves the bubble up one frame; returns whether it is still on screen.
    fn rise(&mut self, width: f32) -> bool {
        self.y -= self.speed;
        self.x += self.drift;
        self.y + self.radius > 0.0 && self.x > -50.0 && self.x < width + 50.0
    }
}

/// The set of live bubbles plus the spawn timer.
pub struct BubbleField {
    bubbles: Vec<Bubble>,
    spawn_timer: u32,
}

impl Default for BubbleField {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleField {
    pub fn new() -> Self {
        Self {
            bubbles: Vec::new(),
            spawn_timer: 0,
        }
    }

    /// Advances every bubble one frame, spawning a small burst from the
    /// floor every [`SPAWN_INTERVAL`] frames and culling risen ones.
    pub fn update(&mut self, width: f32, height: f32) {
        self.spawn_timer += 1;
        if self.spawn_timer >= SPAWN_INTERVAL && width > 40.0 {
            self.spawn_timer = 0;
            let mut rng = ::rand::rng();
            for _ in 0..rng.random_range(1..=3) {
                let x = rng.random_range(20.0..width - 20.0);
                self.bubbles.push(Bubble::new(x, height - 10.0, &mut rng));
            }
        }
        self.bubbles.retain_mut(|bubble| bubble.rise(width));
    }

    pub fn draw(&self) {
        for bubble in &self.bubbles {
            draw_circle_lines(
                bubble.x,
                bubble.y,
                bubble.radius,
                1.0,
                Color::from_rgba(230, 240, 255, 255),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_spawns_on_the_timer() {
        let mut field = BubbleField::new();

        for _ in 0..SPAWN_INTERVAL - 1 {
            field.update(800.0, 600.0);
        }
        assert!(field.bubbles.is_empty());

        field.update(800.0, 600.0);
        assert!((1..=3).contains(&field.bubbles.len()));
        // fresh bubbles rise one frame within the spawning update
        for bubble in &field.bubbles {
            assert!(bubble.x > 19.0 && bubble.x < 781.0);
            assert!(bubble.y > 588.0 && bubble.y < 590.0);
        }
    }

    #[test]
    fn test_bubbles_rise_and_drift() {
        let mut bubble = Bubble {
            x: 100.0,
            y: 300.0,
            radius: 4.0,
            speed: 1.0,
            drift: 0.3,
        };

        assert!(bubble.rise(800.0));
        assert_eq!(bubble.y, 299.0);
        assert!((bubble.x - 100.3).abs() < 0.001);
    }

    #[test]
    fn test_risen_bubbles_are_culled() {
        let mut field = BubbleField::new();
        field.bubbles.push(Bubble {
            x: 100.0,
            y: 3.0,
            radius: 4.0,
            speed: 1.6,
            drift: 0.0,
        });

        // five frames take y + radius past the top edge
        for _ in 0..5 {
            field.update(800.0, 600.0);
        }
        assert!(
            field.bubbles.is_empty(),
            "a bubble past the top edge is culled"
        );
    }
}
