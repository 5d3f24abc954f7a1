//! # Tilecaster Main Entry Point
//!
//! Loads the configuration, opens the macroquad window, and runs the frame
//! loop: input, integrate, cast, project, overlay, present, idle.

use clap::Parser;
use log::{error, info};
use macroquad::prelude::{next_frame, request_new_screen_size};
use std::path::PathBuf;
use tilecaster::{
    FpsCounter, FramePacer, GameState, InputHandler, MacroquadDisplay, RaycasterConfig,
    TilecasterResult,
};

/// Command line arguments for the Tilecaster renderer.
#[derive(Parser, Debug)]
#[command(name = "tilecaster")]
#[command(about = "A real-time textured raycaster over a tile grid")]
#[command(version)]
struct Args {
    /// JSON configuration file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Start with the minimap hidden
    #[arg(long)]
    no_minimap: bool,

    /// Move with the arrow keys only; WASD is ignored
    #[arg(long)]
    arrows_only: bool,

    /// Hide the on-screen controls hint
    #[arg(long)]
    hide_controls: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("Tilecaster")]
async fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Tilecaster v{}", tilecaster::VERSION);

    if let Err(e) = run(&args).await {
        error!("Tilecaster stopped: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::INFO,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp_millis()
            .init();
    }
}

/// Builds the effective configuration from defaults, the config file and
/// command line overrides.
fn load_config(args: &Args) -> TilecasterResult<RaycasterConfig> {
    let mut config = match &args.config {
        Some(path) => RaycasterConfig::load_from_file(path)?,
        None => RaycasterConfig::default(),
    };

    if let Some(fps) = args.fps {
        config.target_fps = fps;
    }
    if args.no_minimap {
        config.show_minimap = false;
    }
    if args.arrows_only {
        config.wasd_enabled = false;
    }
    if args.hide_controls {
        config.show_controls = false;
    }

    config.validate()?;
    Ok(config)
}

async fn run(args: &Args) -> TilecasterResult<()> {
    let config = load_config(args)?;

    if args.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    request_new_screen_size(config.screen_width as f32, config.screen_height as f32);

    let mut display = MacroquadDisplay::new(config.screen_width, config.screen_height)?;
    display.show_controls = config.show_controls;
    let input_handler = InputHandler::with_wasd(config.wasd_enabled);
    let mut pacer = FramePacer::new(config.target_fps);
    let mut state = GameState::new(config)?;
    let mut fps = FpsCounter::new();

    info!("Entering frame loop");
    pacer.restart();

    loop {
        let input = input_handler.get_input();
        if input.quit {
            info!("Quit requested after {} frames", state.frame_count());
            break;
        }

        let elapsed = pacer.tick();
        fps.record(elapsed);

        state.tick(&input, elapsed);
        display.present(state.frame(), &fps);

        pacer.idle();
        next_frame().await;
    }

    Ok(())
}
