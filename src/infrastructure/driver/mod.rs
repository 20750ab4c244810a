//! Bulb Driver Module
//!
//! The adapter never talks BLE itself. Everything transport related
//! (pairing, GATT discovery, command encoding) sits behind [`BulbDriver`].
//!
//! ## Modules
//!
//! - [`simulated`] - In-memory bulb used when no BLE transport is plugged in

pub mod simulated;

use crate::domain::error::DriverError;
use crate::domain::models::{DeviceInfo, Rgb};
use async_trait::async_trait;

pub use simulated::SimulatedBulb;

/// Operations the adapter needs from a single bulb connection
///
/// Implementations are not required to be reentrant: the adapter guarantees
/// at most one call in flight per driver.
#[async_trait]
pub trait BulbDriver: Send + Sync {
    async fn connect(&mut self) -> Result<(), DriverError>;

    async fn disconnect(&mut self) -> Result<(), DriverError>;

    async fn is_connected(&self) -> bool;

    async fn turn_on(&mut self) -> Result<(), DriverError>;

    async fn turn_off(&mut self) -> Result<(), DriverError>;

    async fn set_color(&mut self, color: Rgb) -> Result<(), DriverError>;

    /// Set warm-white intensity as a fraction in `[0, 1]`
    async fn set_warm_level(&mut self, level: f32) -> Result<(), DriverError>;

    async fn get_device_info(&mut self) -> Result<DeviceInfo, DriverError>;

    /// Human-readable identity used in log lines
    fn describe(&self) -> String;
}
