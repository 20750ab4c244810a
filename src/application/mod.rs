//! Application Layer
//!
//! - [`adapter`] - Per-bulb adapter: serialized driver access and state cache
//! - [`platform`] - Host-facing entity trait and setup entry point

pub mod adapter;
pub mod platform;

pub use adapter::{CommandOutcome, MagicBlueLight, RefreshOutcome};
pub use platform::{setup_platform, DeviceRegistry, Light};
