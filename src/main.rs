//! Spring-Bezier.
//!
//! Interaktive kubische Bézier-Kurve mit federnden Steuerpunkten.

use eframe::egui;
use spring_bezier::{ui, AppController, AppIntent, AppState, SimulationOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Spring-Bezier v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 640.0])
                .with_title("Spring-Bezier"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Spring-Bezier",
            options,
            Box::new(|_cc| Ok(Box::new(SpringBezierApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SpringBezierApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SpringBezierApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulationOptions::config_path();
        let options = SimulationOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        state.config_path = config_path;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SpringBezierApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);
        let mut events = ui::render_settings_panel(ctx, &self.state);

        let canvas_rect = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                events.extend(self.input.collect_canvas_events(ui, &response));
                rect
            })
            .inner;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        // Genau ein Integrationsschritt pro sichtbarem Frame
        self.controller
            .handle_frame(&mut self.state, events, !ctx.will_discard());

        let scene = self.controller.build_render_scene(&self.state);
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(canvas_rect);
        ui::paint_scene(&painter, canvas_rect, &scene);

        self.maybe_request_repaint(ctx);
    }
}

impl SpringBezierApp {
    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.should_exit
            || !self.state.curve.is_settled()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
