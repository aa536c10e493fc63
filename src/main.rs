//! Shaft Hop entry point
//!
//! Opens the window, loads sprites and runs the frame loop until quit.

use std::process::ExitCode;

use shaft_hop::Settings;
use shaft_hop::assets::SpriteSheet;
use shaft_hop::game::run_loop;
use shaft_hop::platform::{GameWindow, SystemClock};
use shaft_hop::renderer::SpriteRenderer;
use shaft_hop::sim::GameState;

/// Exit status when the window or graphics device can't be set up
const EXIT_GRAPHICS: u8 = 3;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Shaft Hop starting...");

    let settings = Settings::load();

    let mut window = match GameWindow::open(&settings.window_title) {
        Ok(window) => window,
        Err(err) => {
            log::error!("{err:#}");
            return ExitCode::from(EXIT_GRAPHICS);
        }
    };

    let mut renderer = match SpriteRenderer::new(window.handle(), settings.vsync) {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("Couldn't create renderer: {err:#}");
            return ExitCode::from(EXIT_GRAPHICS);
        }
    };

    let sheet = match SpriteSheet::load(&settings.asset_dir) {
        Ok(sheet) => sheet,
        Err(err) => {
            log::error!("{err:#}");
            return ExitCode::FAILURE;
        }
    };
    renderer.upload(&sheet);
    drop(sheet);

    let seed = settings.resolve_seed();
    let mut state = GameState::new(seed);

    match run_loop(&mut state, &mut window, &mut renderer, &mut SystemClock) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
