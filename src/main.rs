//! Skycast - a current-conditions weather dashboard for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use skycast_app::Settings;

/// Skycast - a current-conditions weather dashboard for the terminal
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "A current-conditions weather dashboard for the terminal", long_about = None)]
struct Args {
    /// City to show on startup (defaults to the configured default city)
    #[arg(value_name = "CITY")]
    city: Option<String>,

    /// Path to an alternate config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    skycast_core::logging::init()?;

    let settings = match args.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let initial_city = args.city.unwrap_or_else(|| settings.default_city.clone());

    skycast_tui::run(settings, initial_city).await?;

    Ok(())
}
