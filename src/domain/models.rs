use std::fmt;
use std::ops::BitOr;

/// RGB color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Full brightness; also the fixed brightness while a color is displayed.
pub const FULL_BRIGHTNESS: u8 = 255;

/// Last-known state of a bulb as mirrored by the adapter
///
/// `color` and `brightness` are exclusive display modes: a color is shown
/// at full brightness, a warm level is shown with a white color.
/// When `available` is false the other fields keep their last good values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceState {
    pub power: bool,
    pub color: Rgb,
    pub brightness: u8,
    pub available: bool,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            power: false,
            color: Rgb::WHITE,
            brightness: FULL_BRIGHTNESS,
            available: false,
        }
    }
}

impl DeviceState {
    /// Display mode derived from the cached fields
    pub fn mode(&self) -> LightMode {
        if !self.power {
            LightMode::Off
        } else if self.color == Rgb::WHITE && self.brightness != FULL_BRIGHTNESS {
            LightMode::Warm
        } else {
            LightMode::Color
        }
    }

    /// Switch to color mode
    pub fn show_color(&mut self, color: Rgb) {
        self.color = color;
        self.brightness = FULL_BRIGHTNESS;
    }

    /// Switch to warm-white mode
    pub fn show_warm(&mut self, brightness: u8) {
        self.color = Rgb::WHITE;
        self.brightness = brightness;
    }

    /// Overwrite power, color and brightness from a driver reading
    pub fn apply_reading(&mut self, info: &DeviceInfo) {
        self.power = info.on;
        self.color = Rgb::new(info.r, info.g, info.b);
        self.brightness = info.brightness;
        self.available = true;
    }
}

/// Sub-state of an available bulb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    Off,
    Color,
    Warm,
}

/// Raw status report returned by a bulb driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    pub on: bool,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub brightness: u8,
}

/// Parameters of a turn-on request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOnOptions {
    pub color: Option<Rgb>,
    pub brightness: Option<u8>,
}

impl TurnOnOptions {
    pub fn color(color: Rgb) -> Self {
        Self {
            color: Some(color),
            brightness: None,
        }
    }

    pub fn brightness(brightness: u8) -> Self {
        Self {
            color: None,
            brightness: Some(brightness),
        }
    }
}

/// Optional behaviours of a bulb, resolved from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub supports_brightness: bool,
    pub supports_availability: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            supports_brightness: true,
            supports_availability: true,
        }
    }
}

/// Feature bitset advertised to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    pub const BRIGHTNESS: SupportedFeatures = SupportedFeatures(1);
    pub const RGB_COLOR: SupportedFeatures = SupportedFeatures(16);

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: SupportedFeatures) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SupportedFeatures {
    type Output = SupportedFeatures;

    fn bitor(self, rhs: Self) -> Self::Output {
        SupportedFeatures(self.0 | rhs.0)
    }
}

impl From<Capabilities> for SupportedFeatures {
    fn from(capabilities: Capabilities) -> Self {
        if capabilities.supports_brightness {
            SupportedFeatures::RGB_COLOR | SupportedFeatures::BRIGHTNESS
        } else {
            SupportedFeatures::RGB_COLOR
        }
    }
}
