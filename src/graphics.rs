use aquarium::simulation::fish::FishState;
use aquarium::simulation::food::FoodKind;
use aquarium::simulation::params::Params;
use aquarium::simulation::tank::TankSnapshot;
use macroquad::prelude::*;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for (f32, f32) {
    type Output = (f32, f32);
    fn to_screen(&self, params: &Params) -> (f32, f32) {
        let scale_x = screen_width() / params.tank_width;
        let scale_y = screen_height() / params.tank_height;
        (self.0 * scale_x, self.1 * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.tank_width;
        let scale_y = screen_height() / params.tank_height;
        self * scale_x.min(scale_y)
    }
}

/// Maps a screen position (e.g. the mouse cursor) back to tank coordinates.
pub fn to_world(x: f32, y: f32, params: &Params) -> (f32, f32) {
    (
        x * params.tank_width / screen_width(),
        y * params.tank_height / screen_height(),
    )
}

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Flake => Color::from_rgba(235, 190, 60, 255),
        FoodKind::Pellet => Color::from_rgba(140, 95, 45, 255),
        FoodKind::Bloodworm => Color::from_rgba(200, 55, 55, 255),
        FoodKind::Shrimp => Color::from_rgba(245, 150, 130, 255),
    }
}

pub fn draw_food(snapshot: &TankSnapshot, params: &Params) {
    for food in &snapshot.food {
        let (x, y) = (food.x, food.y).to_screen(params);
        let radius = 6.0_f32.to_screen(params);
        draw_circle(x, y, radius, food_color(food.kind));
        draw_circle_lines(x, y, radius, 1.0, Color::from_rgba(255, 255, 255, 120));
    }
}

pub fn draw_fish(snapshot: &TankSnapshot, params: &Params) {
    for fish in &snapshot.fish {
        let (x, y) = (fish.x, fish.y).to_screen(params);
        let body_w = 26.0_f32.to_screen(params);
        let body_h = 14.0_f32.to_screen(params);
        let dir = if fish.facing_left { -1.0 } else { 1.0 };

        let body_color = match fish.state {
            FishState::Eating { .. } => Color::from_rgba(255, 170, 80, 255),
            FishState::Seeking { .. } => Color::from_rgba(250, 210, 90, 255),
            FishState::Wandering => Color::from_rgba(240, 140, 60, 255),
        };

        // tail behind the body, mirrored with swim direction
        let tail_x = x - dir * body_w;
        draw_triangle(
            Vec2::new(tail_x, y),
            Vec2::new(tail_x - dir * body_w * 0.5, y - body_h * 0.7),
            Vec2::new(tail_x - dir * body_w * 0.5, y + body_h * 0.7),
            body_color,
        );
        draw_ellipse(x, y, body_w, body_h, 0.0, body_color);
        draw_circle(
            x + dir * body_w * 0.55,
            y - body_h * 0.25,
            body_h * 0.18,
            BLACK,
        );

        // name tag
        let font_size = 16.0;
        let name_size = measure_text(&fish.name, None, font_size as u16, 1.0);
        draw_text(
            &fish.name,
            x - name_size.width / 2.0,
            y - body_h - 6.0,
            font_size,
            WHITE,
        );

        if matches!(fish.state, FishState::Eating { .. }) {
            let gulp = "*gulp*";
            let gulp_size = measure_text(gulp, None, 14, 1.0);
            draw_text(
                gulp,
                x - gulp_size.width / 2.0,
                y + body_h + 14.0,
                14.0,
                Color::from_rgba(255, 255, 180, 255),
            );
        }
    }
}
