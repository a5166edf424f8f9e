use dice_roll_game::{logging, storage, ui};
use gtk4::prelude::*;
use gtk4::Application;

fn main() {
    let (settings, problem) = storage::load_settings_checked();
    logging::init(&settings.log_level);
    if let Some(e) = problem {
        storage::report_fallback(&e);
    }

    let app = Application::builder()
        .application_id("io.github.dicegame.DiceRollGame")
        .build();

    app.connect_activate(move |app| {
        ui::app::build_ui(app, &settings);
    });

    app.run();
}
