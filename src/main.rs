use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use macroquad::{
    input::prevent_quit,
    text::{Font, load_ttf_font},
    window::Conf,
    Window,
};
use tracing::{error, info};
use ufaz_snake::game::{GameConfig, Variant};
use ufaz_snake::logging;
use ufaz_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "ufaz-snake")]
#[command(version, about = "UFAZ the Snake")]
struct Cli {
    /// Which variant to play
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    variant: Variant,

    /// TrueType font for the game-over banner (classic variant only)
    #[arg(long, default_value = "Arial.ttf")]
    font: PathBuf,

    /// Delay between ticks in milliseconds
    #[arg(long, default_value = "150")]
    tick_ms: u64,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.title.clone(),
        window_width: config.width,
        window_height: config.height,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    match launch() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn launch() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    // Create game configuration from CLI arguments
    let mut config = GameConfig::for_variant(cli.variant);
    config.tick_ms = cli.tick_ms;
    config.validate().context("invalid game configuration")?;

    info!(
        variant = ?cli.variant,
        width = config.width,
        height = config.height,
        seed = ?cli.seed,
        "starting"
    );

    Window::from_config(window_conf(&config), async move {
        if let Err(e) = play(config, cli.variant, cli.font, cli.seed).await {
            error!("{e:#}");
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    });

    Ok(())
}

async fn play(config: GameConfig, variant: Variant, font_path: PathBuf, seed: Option<u64>) -> Result<()> {
    prevent_quit();

    let font = if variant.shows_banner() {
        Some(load_font(&font_path).await?)
    } else {
        None
    };

    let mut mode = HumanMode::new(config, variant, seed);
    mode.run(font.as_ref()).await?;

    Ok(())
}

async fn load_font(path: &Path) -> Result<Font> {
    let name = path
        .to_str()
        .ok_or_else(|| anyhow!("font path {} is not valid UTF-8", path.display()))?;

    load_ttf_font(name)
        .await
        .map_err(|e| anyhow!("Font error: {e:?}"))
        .with_context(|| format!("failed to load font {}", path.display()))
}
