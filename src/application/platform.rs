//! Host Plugin Contract
//!
//! What a home-automation host sees of a bulb: display accessors it polls,
//! command entry points, and the registration hook used at setup time.

use crate::application::adapter::MagicBlueLight;
use crate::domain::error::ConfigError;
use crate::domain::models::{Rgb, SupportedFeatures, TurnOnOptions};
use crate::domain::settings::BulbConfig;
use crate::infrastructure::driver::BulbDriver;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// A light entity as exposed to the host
#[async_trait]
pub trait Light: Send + Sync + fmt::Display {
    fn name(&self) -> &str;

    fn is_on(&self) -> bool;

    fn rgb_color(&self) -> Rgb;

    /// `None` when the bulb does not support warm-white levels
    fn brightness(&self) -> Option<u8>;

    fn supported_features(&self) -> SupportedFeatures;

    fn is_available(&self) -> bool;

    async fn turn_on(&self, options: TurnOnOptions);

    async fn turn_off(&self);

    /// Schedule a state refresh and return immediately
    fn update(self: Arc<Self>);

    /// Release the device connection before the host exits
    async fn shutdown(&self);
}

/// Receives the entities created by [`setup_platform`]
pub trait DeviceRegistry {
    fn add_devices(&mut self, devices: Vec<Arc<dyn Light>>);
}

/// Validate one bulb entry, build its driver and register the adapter
///
/// `make_driver` receives the trimmed address and the protocol version.
pub fn setup_platform<D, F>(
    config: &BulbConfig,
    make_driver: F,
    registry: &mut dyn DeviceRegistry,
) -> Result<(), ConfigError>
where
    D: BulbDriver + 'static,
    F: FnOnce(&str, u32) -> D,
{
    config.validate(0)?;

    let driver = make_driver(config.address.trim(), config.version);
    let light = MagicBlueLight::from_config(config, driver);
    info!(
        "Setting up {} (protocol v{}, features {:#x})",
        light,
        config.version,
        light.supported_features().bits()
    );

    let light: Arc<dyn Light> = Arc::new(light);
    registry.add_devices(vec![light]);
    Ok(())
}
