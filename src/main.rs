//! # Roomshift Main Entry Point
//!
//! Parses the command line, loads the configuration, sets up logging and
//! hands control to the scene manager.

use clap::Parser;
use log::{error, info};
use macroquad::window::Conf;
use roomshift::{GameConfig, GameSession, InputHandler, RoomshiftResult, SceneManager};
use std::path::PathBuf;

/// Command line arguments for Roomshift.
#[derive(Parser, Debug)]
#[command(name = "roomshift")]
#[command(about = "Explore a grid of shifting rooms and lock them in place")]
#[command(version)]
struct Args {
    /// Random seed for room generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of locked rooms needed to win
    #[arg(long)]
    win_threshold: Option<usize>,

    /// How far from the origin rooms may be generated
    #[arg(long)]
    radius: Option<i32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Roomshift".to_string(),
        window_width: 1024,
        window_height: 768,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Roomshift v{}", roomshift::VERSION);

    if let Err(e) = run_game(&args).await {
        error!("Game error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
///
/// `RUST_LOG` takes precedence over `--log-level` when set.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_timestamp(None)
            .init();
    }
}

/// Builds the configuration from the optional file and command line overrides.
fn load_config(args: &Args) -> RoomshiftResult<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threshold) = args.win_threshold {
        config.win_threshold = threshold;
    }
    if let Some(radius) = args.radius {
        config.generation.max_room_radius = radius;
    }

    config.validate()?;
    Ok(config)
}

/// Runs the main game loop with macroquad graphics.
async fn run_game(args: &Args) -> RoomshiftResult<()> {
    let config = load_config(args)?;
    let session = GameSession::new(config)?;
    info!(
        "Session seed {}; lock {} rooms to win",
        session.seed(),
        session.rooms.win_threshold()
    );
    #[cfg(feature = "dev-tools")]
    let _span = tracing::info_span!("session", seed = session.seed()).entered();

    let mut scene_manager = SceneManager::new(session, InputHandler::new())?;
    scene_manager.run().await
}
