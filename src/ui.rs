// UI module - control panel and event feed for the tank frontend.
//
// The drawing interface and classifier run outside this crate; the panel
// stands in for them by admitting sprites from a small built-in palette.

use aquarium::simulation::event_log::EventColor;
use aquarium::simulation::food::FoodKind;
use aquarium::simulation::tank::Tank;
use egui_macroquad::egui;

/// Demo stand-in for the external drawing pipeline's sprite output.
pub const SPRITE_PALETTE: [(&str, &str); 4] = [
    ("Clownfish", "fish/clownfish"),
    ("Guppy", "fish/guppy"),
    ("Tetra", "fish/tetra"),
    ("Angelfish", "fish/angelfish"),
];

pub struct UIState {
    pub fish_name: String,
    pub fish_speed: f32,
    pub selected_sprite: usize,
    pub selected_food: usize,
    pub spawn_requested: bool,
    pub status_message: Option<String>,
    pub pointer_over_ui: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            fish_name: String::new(),
            fish_speed: 2.0,
            selected_sprite: 0,
            selected_food: 0,
            spawn_requested: false,
            status_message: None,
            pointer_over_ui: false,
        }
    }
}

pub fn draw_ui(state: &mut UIState, tank: &Tank) {
    egui_macroquad::ui(|egui_ctx| {
        draw_control_panel(egui_ctx, state, tank);
        draw_events_panel(egui_ctx, tank);
        state.pointer_over_ui = egui_ctx.is_pointer_over_area();
    });
}

fn draw_control_panel(egui_ctx: &egui::Context, state: &mut UIState, tank: &Tank) {
    egui::SidePanel::right("control_panel")
        .default_width(260.0)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Fish Tank");
            ui.label(format!(
                "{} fish, {} food, t = {:.1}s",
                tank.fish.len(),
                tank.food.len(),
                tank.time
            ));
            ui.separator();

            ui.heading("New fish");
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.text_edit_singleline(&mut state.fish_name);
            });
            ui.add(
                egui::Slider::new(
                    &mut state.fish_speed,
                    tank.params.min_speed..=tank.params.max_speed,
                )
                .text("speed"),
            );
            egui::ComboBox::from_label("drawing")
                .selected_text(SPRITE_PALETTE[state.selected_sprite].0)
                .show_ui(ui, |ui| {
                    for (i, (label, _)) in SPRITE_PALETTE.iter().enumerate() {
                        ui.selectable_value(&mut state.selected_sprite, i, *label);
                    }
                });
            if ui.button("Release into tank").clicked() {
                state.spawn_requested = true;
            }
            ui.separator();

            ui.heading("Feeding");
            ui.label("Click the water to drop food.");
            ui.horizontal_wrapped(|ui| {
                for (i, kind) in FoodKind::ALL.iter().enumerate() {
                    let selected = state.selected_food == i;
                    if ui
                        .selectable_label(selected, format!("{} {}", i, kind.label()))
                        .clicked()
                    {
                        state.selected_food = i;
                    }
                }
            });
            ui.label("Number keys also select food.");

            if let Some(message) = &state.status_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(255, 200, 100), message);
            }
        });
}

/// Draws a transparent panel showing recent tank events.
fn draw_events_panel(egui_ctx: &egui::Context, tank: &Tank) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 220.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(300.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(100, 100, 120),
                )),
        )
        .show(egui_ctx, |ui| {
            ui.vertical(|ui| {
                ui.spacing_mut().item_spacing.y = 4.0;

                let events = tank.event_log.events();

                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No events yet...")
                            .color(egui::Color32::from_rgb(150, 150, 150))
                            .size(12.0),
                    );
                } else {
                    for event in events {
                        let color = match event.color {
                            EventColor::Admission => egui::Color32::from_rgb(100, 255, 100),
                            EventColor::Feeding => egui::Color32::from_rgb(255, 200, 100),
                            EventColor::Meal => egui::Color32::from_rgb(100, 200, 255),
                            EventColor::Contention => egui::Color32::from_rgb(150, 150, 150),
                            EventColor::Capacity => egui::Color32::from_rgb(255, 100, 100),
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("[{:.1}s]", event.time))
                                    .color(egui::Color32::from_rgb(180, 180, 200))
                                    .size(11.0)
                                    .monospace(),
                            );
                            ui.label(
                                egui::RichText::new(&event.description)
                                    .color(color)
                                    .size(11.0),
                            );
                        });
                    }
                }
            });
        });
}
