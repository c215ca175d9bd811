mod app;
mod backdrop;
mod components;
mod config;
mod error;
#[cfg(test)]
mod fixtures;
mod icons;
mod report;
mod style;
mod view;
mod weather;

use app::{Flags, WeatherApp};
use config::AppConfig;
use iced::{window, Application, Settings, Size};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use weather::WeatherClient;

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = AppConfig::default();
    config.validate()?;
    let client = WeatherClient::new(config.provider.clone())?;

    tracing::info!("Starting Weather Pro");

    let mut settings = Settings::with_flags(Flags {
        config: config.clone(),
        client,
    });
    settings.window = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        resizable: false,
        decorations: false,
        // Close requests go through the quit confirmation first
        exit_on_close_request: false,
        ..Default::default()
    };

    WeatherApp::run(settings).map_err(|e| anyhow::anyhow!("failed to run the window: {e}"))
}
