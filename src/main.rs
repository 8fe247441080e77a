//! morph-rs - Shape Morphing Visualizer
//!
//! Draws a single outline and morphs it into the next shape in a fixed
//! cycle (line, triangle, rectangle, circle, spiral) each time the
//! morph button is pressed.
//!
//! ## How it works
//! - Every shape is sampled into the same number of points
//! - A transition blends the two outlines index by index while a
//!   clock drives progress over a configurable duration
//! - Triggering mid-transition restarts from the previous target

use eframe::egui;

mod animation;
mod render;
mod settings;
mod shapes;

use animation::{Easing, MorphEngine, MorphError};
use render::MorphCanvas;
use settings::AppSettings;
use shapes::{ShapeKind, POINT_COUNT};

/// Canvas bounds assumed until the first frame reports real ones
const INITIAL_BOUNDS: f32 = 600.0;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting morph-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 760.0])
            .with_title("morph-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "morph-rs",
        options,
        Box::new(|cc| Ok(Box::new(MorphApp::new(cc)?))),
    )
}

/// Main application state
struct MorphApp {
    engine: MorphEngine,
    canvas: MorphCanvas,
    show_settings: bool,
    status: String,
}

impl MorphApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, MorphError> {
        let settings = AppSettings::load();
        let engine = MorphEngine::new(settings.initial_shape, INITIAL_BOUNDS, INITIAL_BOUNDS)?;

        let mut app = Self {
            engine,
            canvas: MorphCanvas::new(),
            show_settings: true,
            status: "Ready".to_string(),
        };
        settings.apply(&mut app);
        Ok(app)
    }

    /// Label for the shape currently on screen
    fn shape_label(&self) -> String {
        let state = self.engine.state();
        if self.engine.is_morphing() {
            format!("{} -> {}", state.source().name(), state.target().name())
        } else {
            state.target().name().to_string()
        }
    }
}

impl eframe::App for MorphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        let time = ctx.input(|i| i.time) as f32;

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("morph-rs");
                ui.separator();

                if ui.button("▶ Morph").clicked() {
                    match self.engine.trigger(time) {
                        Ok(()) => {
                            let state = self.engine.state();
                            self.status = format!(
                                "Morphing {} -> {}",
                                state.source().name(),
                                state.target().name()
                            );
                        }
                        Err(e) => {
                            log::error!("Failed to start morph: {}", e);
                            self.status = format!("Error: {}", e);
                        }
                    }
                }

                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(format!("Shape: {}", self.shape_label()));
                ui.separator();
                ui.small(format!("Progress: {:.0}%", self.engine.progress(time) * 100.0));
                ui.separator();
                ui.small(format!("Points: {}", POINT_COUNT));
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| {
                    ui.heading("Animation");
                    ui.separator();

                    ui.add(
                        egui::Slider::new(&mut self.engine.config.duration_ms, 100..=3000)
                            .text("Duration (ms)"),
                    );

                    egui::ComboBox::from_label("Easing")
                        .selected_text(self.engine.config.easing.name())
                        .show_ui(ui, |ui| {
                            for easing in Easing::all() {
                                ui.selectable_value(
                                    &mut self.engine.config.easing,
                                    *easing,
                                    easing.name(),
                                );
                            }
                        });

                    ui.separator();

                    // Display settings
                    ui.collapsing("Display", |ui| {
                        ui.add(
                            egui::Slider::new(&mut self.canvas.settings.stroke_width, 1.0..=40.0)
                                .text("Stroke width"),
                        );
                    });

                    ui.separator();

                    // Color presets
                    ui.collapsing("Color", |ui| {
                        ui.horizontal(|ui| {
                            if ui.button("Blue").clicked() {
                                self.canvas.settings.color = egui::Color32::from_rgb(0, 0, 255);
                                self.canvas.settings.background =
                                    egui::Color32::from_rgb(255, 255, 255);
                            }
                            if ui.button("Phosphor").clicked() {
                                self.canvas.settings.color = egui::Color32::from_rgb(100, 255, 100);
                                self.canvas.settings.background =
                                    egui::Color32::from_rgb(10, 20, 10);
                            }
                            if ui.button("Amber").clicked() {
                                self.canvas.settings.color = egui::Color32::from_rgb(255, 176, 0);
                                self.canvas.settings.background =
                                    egui::Color32::from_rgb(20, 15, 5);
                            }
                        });
                    });

                    ui.separator();
                    let cycle = ShapeKind::ALL
                        .iter()
                        .map(|kind| kind.name())
                        .collect::<Vec<_>>()
                        .join(" -> ");
                    ui.small(format!("Cycle: {}", cycle));
                    ui.label(format!("Next: {}", self.engine.state().target().next().name()));
                });
        }

        // Morph display
        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui.available_size();
            if size.x > 0.0 && size.y > 0.0 {
                if let Err(e) = self.engine.set_bounds(size.x, size.y) {
                    log::error!("Failed to regenerate outlines: {}", e);
                    self.status = format!("Error: {}", e);
                }
            }

            match self.engine.frame(time) {
                Ok(frame) => {
                    self.canvas.show(ui, &frame.points, frame.close_path);
                }
                Err(e) => {
                    log::error!("Morph frame failed: {}", e);
                    self.status = format!("Error: {}", e);
                }
            }
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        AppSettings::from_app(self).save();
        log::info!("Settings saved");
    }
}
