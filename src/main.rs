// HEAL-O-CODE 2.0 promotional site
// Main entry point

use heal_o_code::services::settings::SettingsService;
use heal_o_code::ui_egui::HackathonApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting HEAL-O-CODE site");

    let settings = SettingsService::from_project_dirs().load_or_default();
    let title = settings.event_name.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(HackathonApp::new(cc, settings)?))),
    )
}

