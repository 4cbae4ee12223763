mod app;
mod color;
mod data;
mod state;
mod ui;

use app::TubeTrendsApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tube Trends – Trending Videos Dashboard",
        options,
        Box::new(|_cc| {
            let mut app = TubeTrendsApp::default();
            // Probe the conventional data directory once at session start.
            if let Some(path) = data::loader::find_default_file() {
                app.state.load_from_path(&path);
            }
            Ok(Box::new(app))
        }),
    )
}
