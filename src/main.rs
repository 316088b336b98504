mod assets;
mod audio;
mod ball;
mod brick;
mod config;
mod game;
mod geom;
mod input;
mod logging;
mod paddle;
mod palette;
mod render;

use clap::Parser;
use log::{LevelFilter, info};
use macroquad::prelude::*;

use crate::audio::AudioManager;
use crate::game::Game;
use crate::input::InputState;
use crate::render::Renderer;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the color RNG; the same seed replays the same round colors.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "game,ball")
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_owned(),
        window_width: config::FIELD_WIDTH as i32,
        window_height: config::FIELD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing {}...", config::WINDOW_TITLE);

    let mut audio = AudioManager::new();
    audio.load_assets().await;

    let mut renderer = Renderer::new();
    renderer.load_assets();

    let mut game = Game::new(args.seed);
    info!(
        "Field {}x{}, {} bricks laid",
        config::FIELD_WIDTH as i32,
        config::FIELD_HEIGHT as i32,
        game.bricks.len()
    );

    let mut last_pointer_x = mouse_position().0;
    loop {
        let input = InputState::poll(&mut last_pointer_x);
        if input.quit {
            info!("Quit requested; exiting.");
            break;
        }

        game.update(&input, &audio);
        renderer.draw_frame(&game);
        next_frame().await;
    }
}
