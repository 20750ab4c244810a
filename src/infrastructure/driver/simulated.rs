//! Simulated Bulb
//!
//! Keeps a bulb's state in memory so the host can run without a BLE
//! adapter. It behaves like a bulb that is always in range.

use super::BulbDriver;
use crate::domain::error::DriverError;
use crate::domain::models::{DeviceInfo, Rgb, FULL_BRIGHTNESS};
use async_trait::async_trait;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Output {
    Color(Rgb),
    /// Warm-white level in `[0, 1]`
    Warm(f32),
}

#[derive(Debug)]
pub struct SimulatedBulb {
    address: String,
    version: u32,
    connected: bool,
    on: bool,
    output: Output,
}

impl SimulatedBulb {
    pub fn new(address: impl Into<String>, version: u32) -> Self {
        Self {
            address: address.into(),
            version,
            connected: false,
            on: false,
            output: Output::Color(Rgb::WHITE),
        }
    }

    fn ensure_link(&self, command: &str) -> Result<(), DriverError> {
        if self.connected {
            Ok(())
        } else {
            Err(DriverError::Command(format!(
                "{}: not connected to {}",
                command, self.address
            )))
        }
    }
}

#[async_trait]
impl BulbDriver for SimulatedBulb {
    async fn connect(&mut self) -> Result<(), DriverError> {
        debug!(
            "Simulated connect to {} (protocol v{})",
            self.address, self.version
        );
        self.connected = true;
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), DriverError> {
        self.connected = false;
        Ok(())
    }

    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn turn_on(&mut self) -> Result<(), DriverError> {
        self.ensure_link("turn_on")?;
        self.on = true;
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<(), DriverError> {
        self.ensure_link("turn_off")?;
        self.on = false;
        Ok(())
    }

    async fn set_color(&mut self, color: Rgb) -> Result<(), DriverError> {
        self.ensure_link("set_color")?;
        trace!("{} color -> {}", self.address, color);
        self.output = Output::Color(color);
        Ok(())
    }

    async fn set_warm_level(&mut self, level: f32) -> Result<(), DriverError> {
        self.ensure_link("set_warm_level")?;
        if !(0.0..=1.0).contains(&level) {
            return Err(DriverError::Command(format!(
                "warm level {} outside [0, 1]",
                level
            )));
        }
        trace!("{} warm level -> {:.3}", self.address, level);
        self.output = Output::Warm(level);
        Ok(())
    }

    async fn get_device_info(&mut self) -> Result<DeviceInfo, DriverError> {
        self.ensure_link("get_device_info")?;
        let (color, brightness) = match self.output {
            Output::Color(color) => (color, FULL_BRIGHTNESS),
            Output::Warm(level) => (Rgb::WHITE, (level * 255.0).round() as u8),
        };
        Ok(DeviceInfo {
            on: self.on,
            r: color.r,
            g: color.g,
            b: color.b,
            brightness,
        })
    }

    fn describe(&self) -> String {
        format!("SimulatedBulb({})", self.address)
    }
}
