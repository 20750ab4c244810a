//! MagicBlue Light
//!
//! Adapter that lets a home-automation host control MagicBlue Bluetooth LE
//! bulbs through an external bulb driver.
//!
//! ## Architecture
//!
//! ```text
//!  host command / poll tick
//!            │
//!            ▼
//! ┌─────────────────────┐     ┌───────────────────┐
//! │   MagicBlueLight    │────▶│ CommandSerializer │  one in-flight call
//! │  (application)      │     │  (owns the driver)│  per bulb
//! └─────────┬───────────┘     └─────────┬─────────┘
//!           │ writes                    │
//!           ▼                           ▼
//! ┌─────────────────────┐     ┌───────────────────┐
//! │    DeviceState      │     │    BulbDriver     │  BLE transport,
//! │  (read by the host) │     │    (external)     │  command encoding
//! └─────────────────────┘     └───────────────────┘
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
