//! MagicBlue Light Adapter
//!
//! Maps host commands onto a [`BulbDriver`] and mirrors the bulb in a
//! [`DeviceState`] cache the host reads for display.
//!
//! Every driver call goes through the per-device [`CommandSerializer`]:
//! commands wait for it, polling skips when it is busy. The connection is
//! re-checked before every operation. Driver failures never reach the host;
//! they are logged and reported as an outcome value.

use crate::application::platform::Light;
use crate::domain::error::DriverError;
use crate::domain::models::{
    Capabilities, DeviceInfo, DeviceState, Rgb, SupportedFeatures, TurnOnOptions,
};
use crate::domain::settings::BulbConfig;
use crate::infrastructure::driver::BulbDriver;
use crate::infrastructure::serializer::CommandSerializer;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Result of a poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Cache replaced from this reading
    Updated(DeviceInfo),
    /// Connect or query failed; only `available` changed
    Unavailable(DriverError),
    /// Another operation held the serializer
    Skipped,
}

/// Result of a host command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// The command stopped at the first failing driver call; cache untouched
    Aborted(DriverError),
}

pub struct MagicBlueLight<D> {
    name: String,
    address: String,
    capabilities: Capabilities,
    bulb: CommandSerializer<D>,
    state: RwLock<DeviceState>,
    closed: AtomicBool,
}

impl<D: BulbDriver> MagicBlueLight<D> {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        driver: D,
        capabilities: Capabilities,
    ) -> Self {
        let name = name.into();
        let address = address.into();
        let label = format!("{}@{}", name, address);
        Self {
            name,
            address,
            capabilities,
            bulb: CommandSerializer::new(label, driver),
            state: RwLock::new(DeviceState::default()),
            closed: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &BulbConfig, driver: D) -> Self {
        Self::new(
            config.name.trim(),
            config.address.trim(),
            driver,
            config.capabilities(),
        )
    }

    /// Snapshot of the cache
    pub fn state(&self) -> DeviceState {
        *self.state.read()
    }

    /// Poll the bulb without waiting for the serializer
    ///
    /// Skipped while another operation holds the serializer and after
    /// [`Light::shutdown`], so a late poll never reopens the connection.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.bulb
            .with_exclusive_access("refresh", false, |mut bulb| async move {
                if self.closed.load(Ordering::SeqCst) {
                    debug!(device = %self, "refresh: device shut down");
                    return RefreshOutcome::Skipped;
                }
                debug!(device = %self, "refresh");

                match read_device_info(&mut *bulb).await {
                    Ok(info) => {
                        self.state.write().apply_reading(&info);
                        debug!(device = %self, ?info, "refresh: state updated");
                        RefreshOutcome::Updated(info)
                    }
                    Err(err) => {
                        let was_available =
                            std::mem::replace(&mut self.state.write().available, false);
                        if was_available {
                            warn!(device = %self, "Device became unavailable: {}", err);
                        } else {
                            debug!(device = %self, "Status update failed: {}", err);
                        }
                        RefreshOutcome::Unavailable(err)
                    }
                }
            })
            .await
            .unwrap_or(RefreshOutcome::Skipped)
    }

    /// Turn the bulb on, optionally switching to a color or a warm level
    pub async fn turn_on(&self, options: TurnOnOptions) -> CommandOutcome {
        let mut bulb = self.bulb.lock("turn_on").await;
        debug!(device = %self, ?options, "turn_on");

        if let Err(err) = ensure_connected(&mut *bulb).await {
            error!(
                device = %self,
                operation = "turn_on",
                "Could not connect to {}: {}",
                bulb.describe(),
                err
            );
            return CommandOutcome::Aborted(err);
        }

        let mut next = self.state();
        if let Err(err) = self.send_turn_on(&mut *bulb, &mut next, options).await {
            error!(device = %self, operation = "turn_on", "Command failed: {}", err);
            return CommandOutcome::Aborted(err);
        }

        next.power = true;
        *self.state.write() = next;
        debug!(device = %self, mode = ?next.mode(), "turn_on applied");
        CommandOutcome::Applied
    }

    async fn send_turn_on(
        &self,
        bulb: &mut D,
        next: &mut DeviceState,
        options: TurnOnOptions,
    ) -> Result<(), DriverError> {
        if !next.power {
            bulb.turn_on().await?;
        }

        let brightness = match options.brightness {
            Some(level) if !self.capabilities.supports_brightness => {
                warn!(device = %self, "Brightness {} ignored: not supported", level);
                None
            }
            other => other,
        };

        if let Some(color) = options.color {
            if let Some(level) = brightness {
                debug!(device = %self, "Brightness {} ignored: color {} wins", level, color);
            }
            next.show_color(color);
            bulb.set_color(color).await?;
        } else if let Some(level) = brightness {
            next.show_warm(level);
            bulb.set_warm_level(warm_level(level)).await?;
        }

        Ok(())
    }

    pub async fn turn_off(&self) -> CommandOutcome {
        let mut bulb = self.bulb.lock("turn_off").await;
        debug!(device = %self, "turn_off");

        if let Err(err) = ensure_connected(&mut *bulb).await {
            error!(
                device = %self,
                operation = "turn_off",
                "Could not connect to {}: {}",
                bulb.describe(),
                err
            );
            return CommandOutcome::Aborted(err);
        }

        if let Err(err) = bulb.turn_off().await {
            error!(device = %self, operation = "turn_off", "Command failed: {}", err);
            return CommandOutcome::Aborted(err);
        }

        self.state.write().power = false;
        CommandOutcome::Applied
    }

    /// Drop the transport connection if one is open
    pub async fn disconnect(&self) -> CommandOutcome {
        let mut bulb = self.bulb.lock("disconnect").await;
        if !bulb.is_connected().await {
            return CommandOutcome::Applied;
        }

        match bulb.disconnect().await {
            Ok(()) => {
                info!(device = %self, "Disconnected");
                CommandOutcome::Applied
            }
            Err(err) => {
                error!(device = %self, operation = "disconnect", "{}", err);
                CommandOutcome::Aborted(err)
            }
        }
    }
}

/// Warm level as the unit fraction the driver expects
fn warm_level(brightness: u8) -> f32 {
    f32::from(brightness) / 255.0
}

async fn ensure_connected<D: BulbDriver>(bulb: &mut D) -> Result<(), DriverError> {
    if !bulb.is_connected().await {
        bulb.connect().await?;
    }
    Ok(())
}

async fn read_device_info<D: BulbDriver>(bulb: &mut D) -> Result<DeviceInfo, DriverError> {
    ensure_connected(bulb).await?;
    bulb.get_device_info().await
}

impl<D> fmt::Display for MagicBlueLight<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<MagicBlueLight('{}', '{}')>", self.address, self.name)
    }
}

impl<D> fmt::Debug for MagicBlueLight<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[async_trait]
impl<D: BulbDriver + 'static> Light for MagicBlueLight<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_on(&self) -> bool {
        self.state.read().power
    }

    fn rgb_color(&self) -> Rgb {
        self.state.read().color
    }

    fn brightness(&self) -> Option<u8> {
        self.capabilities
            .supports_brightness
            .then(|| self.state.read().brightness)
    }

    fn supported_features(&self) -> SupportedFeatures {
        SupportedFeatures::from(self.capabilities)
    }

    fn is_available(&self) -> bool {
        !self.capabilities.supports_availability || self.state.read().available
    }

    async fn turn_on(&self, options: TurnOnOptions) {
        MagicBlueLight::turn_on(self, options).await;
    }

    async fn turn_off(&self) {
        MagicBlueLight::turn_off(self).await;
    }

    fn update(self: Arc<Self>) {
        debug!(device = %self, "update scheduled");
        tokio::spawn(async move {
            self.refresh().await;
        });
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.disconnect().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;
    use tokio::sync::{Notify, Semaphore};

    #[derive(Default)]
    struct StubScript {
        connected: bool,
        refuse_connect: bool,
        fail_query: bool,
        fail_commands: bool,
        info: DeviceInfo,
        calls: Vec<&'static str>,
        warm_levels: Vec<f32>,
    }

    /// Holds every driver call open until the test releases it
    struct Hold {
        entered: Notify,
        release: Semaphore,
    }

    struct InFlight(Arc<AtomicUsize>);

    impl Drop for InFlight {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[derive(Clone, Default)]
    struct StubDriver {
        script: Arc<StdMutex<StubScript>>,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        hold: Option<Arc<Hold>>,
        delay: Option<Duration>,
    }

    impl StubDriver {
        fn connected() -> Self {
            let stub = Self::default();
            stub.script.lock().unwrap().connected = true;
            stub
        }

        fn with_hold(mut self) -> (Self, Arc<Hold>) {
            let hold = Arc::new(Hold {
                entered: Notify::new(),
                release: Semaphore::new(0),
            });
            self.hold = Some(hold.clone());
            (self, hold)
        }

        fn script(&self) -> std::sync::MutexGuard<'_, StubScript> {
            self.script.lock().unwrap()
        }

        fn calls(&self, name: &str) -> usize {
            self.script().calls.iter().filter(|c| **c == name).count()
        }

        async fn enter(&self, call: &'static str) -> InFlight {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.script().calls.push(call);

            if let Some(hold) = &self.hold {
                hold.entered.notify_one();
                hold.release.acquire().await.unwrap().forget();
            }
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            } else {
                tokio::task::yield_now().await;
            }
            InFlight(self.in_flight.clone())
        }

        fn command_result(&self, call: &str) -> Result<(), DriverError> {
            if self.script().fail_commands {
                Err(DriverError::Command(format!("{} rejected", call)))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl BulbDriver for StubDriver {
        async fn connect(&mut self) -> Result<(), DriverError> {
            let _entry = self.enter("connect").await;
            let mut script = self.script();
            if script.refuse_connect {
                return Err(DriverError::Connection("out of range".to_string()));
            }
            script.connected = true;
            Ok(())
        }

        async fn disconnect(&mut self) -> Result<(), DriverError> {
            let _entry = self.enter("disconnect").await;
            self.script().connected = false;
            Ok(())
        }

        async fn is_connected(&self) -> bool {
            let _entry = self.enter("is_connected").await;
            self.script().connected
        }

        async fn turn_on(&mut self) -> Result<(), DriverError> {
            let _entry = self.enter("turn_on").await;
            self.command_result("turn_on")
        }

        async fn turn_off(&mut self) -> Result<(), DriverError> {
            let _entry = self.enter("turn_off").await;
            self.command_result("turn_off")
        }

        async fn set_color(&mut self, _color: Rgb) -> Result<(), DriverError> {
            let _entry = self.enter("set_color").await;
            self.command_result("set_color")
        }

        async fn set_warm_level(&mut self, level: f32) -> Result<(), DriverError> {
            let _entry = self.enter("set_warm_level").await;
            self.script().warm_levels.push(level);
            self.command_result("set_warm_level")
        }

        async fn get_device_info(&mut self) -> Result<DeviceInfo, DriverError> {
            let _entry = self.enter("get_device_info").await;
            let script = self.script();
            if script.fail_query {
                return Err(DriverError::Command("no response".to_string()));
            }
            Ok(script.info)
        }

        fn describe(&self) -> String {
            "StubDriver".to_string()
        }
    }

    fn light(driver: StubDriver) -> MagicBlueLight<StubDriver> {
        MagicBlueLight::new("Desk", "C7:17:1D:43:39:03", driver, Capabilities::default())
    }

    #[tokio::test]
    async fn test_turn_on_with_color() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());

        for color in [Rgb::new(10, 20, 30), Rgb::new(0, 0, 0), Rgb::new(255, 1, 2)] {
            let outcome = light.turn_on(TurnOnOptions::color(color)).await;
            assert_eq!(outcome, CommandOutcome::Applied);

            let state = light.state();
            assert!(state.power);
            assert_eq!(state.color, color);
            assert_eq!(state.brightness, 255);
        }

        // power-on is only sent while the cache says off
        assert_eq!(driver.calls("turn_on"), 1);
        assert_eq!(driver.calls("set_color"), 3);
    }

    #[tokio::test]
    async fn test_turn_on_with_brightness() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::color(Rgb::new(1, 2, 3))).await;

        for level in [128u8, 0, 255] {
            light.turn_on(TurnOnOptions::brightness(level)).await;
            let state = light.state();
            assert!(state.power);
            assert_eq!(state.color, Rgb::WHITE);
            assert_eq!(state.brightness, level);
        }

        assert_eq!(
            driver.script().warm_levels,
            vec![128.0 / 255.0, 0.0, 1.0]
        );
    }

    #[tokio::test]
    async fn test_bare_turn_on_preserves_display_mode() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::brightness(60)).await;
        light.turn_off().await;

        light.turn_on(TurnOnOptions::default()).await;
        let state = light.state();
        assert!(state.power);
        assert_eq!(state.color, Rgb::WHITE);
        assert_eq!(state.brightness, 60);
        assert_eq!(driver.calls("set_warm_level"), 1);
        assert_eq!(driver.calls("set_color"), 0);
    }

    #[tokio::test]
    async fn test_color_wins_over_brightness() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());

        light
            .turn_on(TurnOnOptions {
                color: Some(Rgb::new(4, 5, 6)),
                brightness: Some(10),
            })
            .await;

        assert_eq!(light.state().color, Rgb::new(4, 5, 6));
        assert_eq!(light.state().brightness, 255);
        assert_eq!(driver.calls("set_warm_level"), 0);
    }

    #[tokio::test]
    async fn test_turn_off_keeps_color_and_brightness() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::brightness(77)).await;

        assert_eq!(light.turn_off().await, CommandOutcome::Applied);
        let state = light.state();
        assert!(!state.power);
        assert_eq!(state.brightness, 77);
        assert_eq!(state.color, Rgb::WHITE);
    }

    #[tokio::test]
    async fn test_reconnects_before_command() {
        let driver = StubDriver::default();
        let light = light(driver.clone());

        light.turn_off().await;
        assert_eq!(driver.calls("connect"), 1);
        assert!(driver.script().connected);

        light.turn_off().await;
        assert_eq!(driver.calls("connect"), 1);
    }

    #[tokio::test]
    async fn test_failed_connect_leaves_cache_untouched() {
        let driver = StubDriver::connected();
        driver.script().info = DeviceInfo {
            on: true,
            r: 40,
            g: 50,
            b: 60,
            brightness: 255,
        };
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::color(Rgb::new(40, 50, 60))).await;
        light.refresh().await;
        let before = light.state();
        assert_eq!(
            before,
            DeviceState {
                power: true,
                color: Rgb::new(40, 50, 60),
                brightness: 255,
                available: true,
            }
        );

        {
            let mut script = driver.script();
            script.connected = false;
            script.refuse_connect = true;
        }
        let commands_before = driver.calls("turn_on") + driver.calls("turn_off");

        let outcome = light.turn_on(TurnOnOptions::brightness(9)).await;
        assert!(matches!(
            outcome,
            CommandOutcome::Aborted(DriverError::Connection(_))
        ));
        assert_eq!(light.state(), before);

        let outcome = light.turn_off().await;
        assert!(matches!(outcome, CommandOutcome::Aborted(_)));
        assert_eq!(light.state(), before);
        assert_eq!(
            driver.calls("turn_on") + driver.calls("turn_off"),
            commands_before
        );
        assert_eq!(driver.calls("set_warm_level"), 0);
    }

    #[tokio::test]
    async fn test_failed_command_leaves_cache_untouched() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::color(Rgb::new(1, 1, 1))).await;
        let before = light.state();

        driver.script().fail_commands = true;
        let outcome = light.turn_on(TurnOnOptions::brightness(5)).await;
        assert!(matches!(
            outcome,
            CommandOutcome::Aborted(DriverError::Command(_))
        ));
        light.turn_off().await;
        assert_eq!(light.state(), before);
    }

    #[tokio::test]
    async fn test_refresh_success_then_failure() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());

        light.turn_on(TurnOnOptions::color(Rgb::new(10, 20, 30))).await;
        assert_eq!(
            light.state(),
            DeviceState {
                power: true,
                color: Rgb::new(10, 20, 30),
                brightness: 255,
                available: false,
            }
        );

        let reading = DeviceInfo {
            on: true,
            r: 10,
            g: 20,
            b: 30,
            brightness: 255,
        };
        driver.script().info = reading;
        assert_eq!(light.refresh().await, RefreshOutcome::Updated(reading));
        assert!(light.state().available);

        driver.script().fail_query = true;
        assert!(matches!(
            light.refresh().await,
            RefreshOutcome::Unavailable(DriverError::Command(_))
        ));
        assert_eq!(
            light.state(),
            DeviceState {
                power: true,
                color: Rgb::new(10, 20, 30),
                brightness: 255,
                available: false,
            }
        );
    }

    #[tokio::test]
    async fn test_refresh_overwrites_cache_exactly() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        light.turn_on(TurnOnOptions::color(Rgb::new(200, 0, 0))).await;

        driver.script().info = DeviceInfo {
            on: false,
            r: 255,
            g: 255,
            b: 255,
            brightness: 42,
        };
        light.refresh().await;
        assert_eq!(
            light.state(),
            DeviceState {
                power: false,
                color: Rgb::WHITE,
                brightness: 42,
                available: true,
            }
        );
    }

    #[tokio::test]
    async fn test_refresh_connect_failure_marks_unavailable() {
        let driver = StubDriver::connected();
        driver.script().info = DeviceInfo {
            on: true,
            r: 1,
            g: 2,
            b: 3,
            brightness: 255,
        };
        let light = light(driver.clone());
        light.refresh().await;
        let good = light.state();

        {
            let mut script = driver.script();
            script.connected = false;
            script.refuse_connect = true;
        }
        assert!(matches!(
            light.refresh().await,
            RefreshOutcome::Unavailable(DriverError::Connection(_))
        ));
        assert_eq!(
            light.state(),
            DeviceState {
                available: false,
                ..good
            }
        );
        assert_eq!(driver.calls("get_device_info"), 1);
    }

    #[tokio::test]
    async fn test_overlapping_refresh_is_skipped() {
        let (driver, hold) = StubDriver::connected().with_hold();
        let light = Arc::new(light(driver.clone()));

        let first = {
            let light = light.clone();
            tokio::spawn(async move { light.refresh().await })
        };
        hold.entered.notified().await;

        let before = light.state();
        assert_eq!(light.refresh().await, RefreshOutcome::Skipped);
        assert_eq!(light.state(), before);

        hold.release.add_permits(16);
        assert!(matches!(
            first.await.unwrap(),
            RefreshOutcome::Updated(_)
        ));
        assert_eq!(driver.calls("get_device_info"), 1);
    }

    #[tokio::test]
    async fn test_refresh_skipped_while_command_runs() {
        let (driver, hold) = StubDriver::connected().with_hold();
        let light = Arc::new(light(driver.clone()));

        let command = {
            let light = light.clone();
            tokio::spawn(async move { light.turn_off().await })
        };
        hold.entered.notified().await;
        assert_eq!(light.refresh().await, RefreshOutcome::Skipped);

        hold.release.add_permits(16);
        assert_eq!(command.await.unwrap(), CommandOutcome::Applied);
        assert_eq!(driver.calls("get_device_info"), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_commands_never_overlap_on_driver() {
        let driver = StubDriver {
            delay: Some(Duration::from_millis(2)),
            ..StubDriver::connected()
        };
        let light = Arc::new(light(driver.clone()));

        let mut tasks = Vec::new();
        for i in 0..8u8 {
            let light = light.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    light.turn_on(TurnOnOptions::color(Rgb::new(i, i, i))).await
                } else {
                    light.turn_off().await
                }
            }));
        }
        for task in tasks {
            assert_eq!(task.await.unwrap(), CommandOutcome::Applied);
        }

        assert_eq!(driver.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_capability_set() {
        let driver = StubDriver::connected();
        let light = Arc::new(MagicBlueLight::new(
            "Hall",
            "AA:BB",
            driver.clone(),
            Capabilities {
                supports_brightness: false,
                supports_availability: false,
            },
        ));

        assert!(Light::is_available(light.as_ref()));
        assert_eq!(Light::brightness(light.as_ref()), None);
        assert!(!light
            .supported_features()
            .contains(SupportedFeatures::BRIGHTNESS));

        light.turn_on(TurnOnOptions::brightness(10)).await;
        assert!(light.state().power);
        assert_eq!(light.state().brightness, 255);
        assert_eq!(driver.calls("set_warm_level"), 0);
    }

    #[tokio::test]
    async fn test_display_and_disconnect() {
        let driver = StubDriver::connected();
        let light = light(driver.clone());
        assert_eq!(
            light.to_string(),
            "<MagicBlueLight('C7:17:1D:43:39:03', 'Desk')>"
        );

        assert_eq!(light.disconnect().await, CommandOutcome::Applied);
        assert!(!driver.script().connected);
        assert_eq!(driver.calls("disconnect"), 1);

        light.disconnect().await;
        assert_eq!(driver.calls("disconnect"), 1);
    }

    #[tokio::test]
    async fn test_no_poll_after_shutdown() {
        let driver = StubDriver::connected();
        let light = Arc::new(light(driver.clone()));
        light.refresh().await;

        Light::shutdown(light.as_ref()).await;
        assert!(!driver.script().connected);
        let connects = driver.calls("connect");

        assert_eq!(light.refresh().await, RefreshOutcome::Skipped);
        light.clone().update();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(!driver.script().connected);
        assert_eq!(driver.calls("connect"), connects);
        assert_eq!(driver.calls("get_device_info"), 1);
    }

    #[tokio::test]
    async fn test_update_polls_in_background() {
        let driver = StubDriver::connected();
        driver.script().info = DeviceInfo {
            on: true,
            r: 3,
            g: 2,
            b: 1,
            brightness: 255,
        };
        let light = Arc::new(light(driver.clone()));

        light.clone().update();
        for _ in 0..100 {
            if Light::is_available(light.as_ref()) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert!(Light::is_available(light.as_ref()));
        assert_eq!(light.rgb_color(), Rgb::new(3, 2, 1));
    }
}
