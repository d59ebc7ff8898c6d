#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod fluid_picker;

use app::FluidCalcApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0])
            .with_title("fluidcalc"),
        ..Default::default()
    };

    eframe::run_native(
        "fluidcalc",
        options,
        Box::new(|cc| Ok(Box::new(FluidCalcApp::new(cc)))),
    )
}
