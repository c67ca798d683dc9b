use macroquad::prelude::*;

mod bubbles;
mod graphics;
mod ui;

use aquarium::simulation::fish::ClassifierVerdict;
use aquarium::simulation::params::Params;
use aquarium::simulation::tank::Tank;

const TICK_DT: f32 = 1.0 / 60.0;
const PARAMS_FILE: &str = "params.json";

const FOOD_KEYS: [KeyCode; 10] = [
    KeyCode::Key0,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

#[macroquad::main("Fish Tank")]
async fn main() {
    let params = Params::load_from_file(PARAMS_FILE).unwrap_or_default();

    println!("Starting fish tank simulation");

    let mut genesis = true;
    let mut tank: Option<Tank> = None;
    let mut ui_state = ui::UIState::new();
    let mut bubble_field = bubbles::BubbleField::new();

    loop {
        if genesis {
            clear_background(LIGHTGRAY);
            let text = "Fill the tank by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                genesis = false;
                tank = Some(Tank::new(params.clone()));
            }
            next_frame().await;
            continue;
        }

        clear_background(Color::from_rgba(12, 64, 110, 255));

        if let Some(ref mut tank) = tank {
            handle_input(tank, &mut ui_state);

            tank.tick(TICK_DT);

            bubble_field.update(screen_width(), screen_height());
            bubble_field.draw();

            let snapshot = tank.snapshot();
            graphics::draw_food(&snapshot, &tank.params);
            graphics::draw_fish(&snapshot, &tank.params);

            ui::draw_ui(&mut ui_state, tank);
            egui_macroquad::draw();
        }

        next_frame().await
    }
}

fn handle_input(tank: &mut Tank, ui_state: &mut ui::UIState) {
    // number keys select the food kind, like the original selector
    for (i, key) in FOOD_KEYS.iter().enumerate() {
        if is_key_pressed(*key) {
            ui_state.selected_food = i;
        }
    }

    // click in the water drops the selected food at the cursor
    if is_mouse_button_pressed(MouseButton::Left) && !ui_state.pointer_over_ui {
        let (mx, my) = mouse_position();
        let (x, y) = graphics::to_world(mx, my, &tank.params);
        if let Err(err) = tank.drop_food(x, y, ui_state.selected_food) {
            ui_state.status_message = Some(err.to_string());
        } else {
            ui_state.status_message = None;
        }
    }

    // the drawing/classifier pipeline runs outside the tank; the demo panel
    // admits palette sprites that are already approved
    if ui_state.spawn_requested {
        ui_state.spawn_requested = false;
        let verdict = ClassifierVerdict {
            is_fish: true,
            confidence: 1.0,
        };
        let sprite = ui::SPRITE_PALETTE[ui_state.selected_sprite].1;
        match tank.admit_fish(&ui_state.fish_name, sprite, ui_state.fish_speed, &verdict) {
            Ok(_) => {
                ui_state.status_message =
                    Some(format!("{} released into the tank", ui_state.fish_name.trim()));
                ui_state.fish_name.clear();
            }
            Err(err) => ui_state.status_message = Some(err.to_string()),
        }
    }
}
