use magicblue_light::application::setup_platform;
use magicblue_light::domain::settings::SettingsService;
use magicblue_light::infrastructure::driver::SimulatedBulb;
use magicblue_light::infrastructure::logging::init_logger;
use magicblue_light::presentation::{console, Host};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings_service = match std::env::args().nth(1) {
        Some(path) => SettingsService::from_path(path)?,
        None => SettingsService::new()?,
    };

    let _logging_guard = init_logger(&settings_service.get().log_settings)
        .map_err(|e| eprintln!("Failed to initialize logging: {}", e))
        .ok();

    info!(
        "Starting MagicBlue host with settings from {}",
        settings_service.path().display()
    );
    settings_service.validate()?;

    let settings = settings_service.get();
    let mut host = Host::new(Duration::from_secs(settings.poll_interval_secs));
    for bulb in &settings.bulbs {
        setup_platform(
            bulb,
            |address, version| SimulatedBulb::new(address, version),
            &mut host,
        )?;
    }
    if host.devices().is_empty() {
        warn!(
            "No bulbs configured; add entries under \"bulbs\" in {}",
            settings_service.path().display()
        );
    }

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    tokio::spawn(console::read_commands(command_tx));

    host.run(command_rx).await;
    info!("MagicBlue host stopped");
    Ok(())
}
