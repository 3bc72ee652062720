#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

mod settings;

use std::error::Error;

use blocky::{Axis, BlockNode, Color, GameState};
use eframe::egui;
use rand::rngs::SmallRng;
use settings::Settings;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let settings = Settings::from_env()?;
    info!(?settings, "starting");

    #[allow(clippy::cast_precision_loss)] // board sizes are small
    let side = settings.config.max_size() as f32;
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(side + 16.0, side + 40.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Blocky",
        options,
        Box::new(move |_cc| Box::new(BlockyApp::new(settings))),
    )?;
    Ok(())
}

struct BlockyApp {
    board: Board,
}
impl BlockyApp {
    fn new(settings: Settings) -> Self {
        let mut rng = settings.rng();
        let game = if settings.demo {
            GameState::new_demo()
        } else {
            GameState::new_random(settings.config, &mut rng)
        };
        Self {
            board: Board { game, rng },
        }
    }
}
impl eframe::App for BlockyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut self.board);
        });
    }
}

struct Board {
    game: GameState,
    /// feeds smash
    rng: SmallRng,
}
impl Board {
    const BORDER: f32 = 2.0;
    const FOOTER_HEIGHT: f32 = 10.0;
}
impl egui::Widget for &mut Board {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)] // board sizes are small
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let side = self.game.tree().config().max_size() as f32;
        let (response, painter) = ui.allocate_painter(egui::vec2(side, side), egui::Sense::click());
        let origin = response.rect.min;

        // handle key inputs
        ui.input(|input| {
            if input.key_pressed(egui::Key::ArrowUp) {
                self.game.select_parent();
            }
            if input.key_pressed(egui::Key::H) {
                self.game.apply_swap(Axis::Horizontal);
            }
            if input.key_pressed(egui::Key::V) {
                self.game.apply_swap(Axis::Vertical);
            }
            if input.key_pressed(egui::Key::S) {
                self.game.apply_smash(&mut self.rng);
            }
            if input.key_pressed(egui::Key::ArrowLeft) {
                self.game.apply_rotate(false);
            }
            if input.key_pressed(egui::Key::ArrowRight) {
                self.game.apply_rotate(true);
            }
        });

        // handle select input, one board pixel per point
        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                let local = (pointer - origin).floor();
                self.game.select_at(local.x as i64, local.y as i64);
            }
        }

        // draw board
        let border = egui::Stroke::new(Board::BORDER, color32(Color::BLACK));
        for leaf in self.game.tree().leaves() {
            let rect = block_rect(origin, leaf);
            let fill = leaf.color().map_or(egui::Color32::TRANSPARENT, color32);
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect.shrink(Board::BORDER / 2.0), 0.0, border);
        }
        if let Some(selected) = self.game.selected() {
            let highlight = egui::Stroke::new(Board::BORDER, color32(Color::TEMPTING_TURQUOISE));
            painter.rect_stroke(
                block_rect(origin, selected).shrink(Board::BORDER / 2.0),
                0.0,
                highlight,
            );
        }

        // draw footer
        ui.allocate_ui(egui::vec2(side, Board::FOOTER_HEIGHT), |ui| {
            ui.horizontal_centered(|ui| match self.game.selected() {
                Some(selected) => {
                    let pos = selected.pos();
                    let (x, y) = (pos.x, pos.y);
                    let size = selected.size();
                    let depth = selected.depth();
                    ui.label(format!("selected: {x},{y} size {size} depth {depth}"));
                }
                None => {
                    ui.label("click a block to select it");
                }
            });
        });

        response
    }
}

#[allow(clippy::cast_precision_loss)] // board sizes are small
fn block_rect(origin: egui::Pos2, block: &BlockNode) -> egui::Rect {
    let pos = block.pos();
    let size = block.size() as f32;
    egui::Rect::from_min_size(
        origin + egui::vec2(pos.x as f32, pos.y as f32),
        egui::vec2(size, size),
    )
}

fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
