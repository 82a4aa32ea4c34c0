use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// An sRGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", channel(self.red), channel(self.green), channel(self.blue))
    }
}

/// The platform's default accent blue.
pub const ACCENT_BLUE: Rgb = Rgb::new(0.0, 0.478, 1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppTheme {
    #[default]
    System,
    Light,
    Dark,
    Blue,
    BlueDark,
    Green,
    GreenDark,
}

impl AppTheme {
    pub const ALL: [AppTheme; 7] = [
        Self::System,
        Self::Light,
        Self::Dark,
        Self::Blue,
        Self::BlueDark,
        Self::Green,
        Self::GreenDark,
    ];

    /// Stored name, as written in the config file.
    pub fn raw_name(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blue => "blue",
            Self::BlueDark => "blueDark",
            Self::Green => "green",
            Self::GreenDark => "greenDark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Blue => "Blue",
            Self::BlueDark => "Blue Dark",
            Self::Green => "Green",
            Self::GreenDark => "Green Dark",
        }
    }

    /// `None` follows the system appearance.
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        match self {
            Self::System => None,
            Self::Light | Self::Blue | Self::Green => Some(ColorScheme::Light),
            Self::Dark | Self::BlueDark | Self::GreenDark => Some(ColorScheme::Dark),
        }
    }

    pub fn primary_color(&self) -> Rgb {
        match self {
            Self::Blue | Self::BlueDark => Rgb::new(0.1, 0.3, 0.7),
            Self::Green | Self::GreenDark => Rgb::new(0.2, 0.6, 0.3),
            _ => ACCENT_BLUE,
        }
    }

    /// Theme family without the dark variant suffix ("blueDark" -> "blue").
    pub fn base_theme(&self) -> &'static str {
        let raw = self.raw_name();
        raw.strip_suffix("Dark").unwrap_or(raw)
    }

    /// Pick the dark or light variant of a value for this theme.
    pub fn adaptive<T>(&self, dark: T, light: T, system_is_dark: bool) -> T {
        let is_dark = match self.color_scheme() {
            Some(scheme) => scheme == ColorScheme::Dark,
            None => system_is_dark,
        };
        if is_dark { dark } else { light }
    }
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AppTheme {
    type Err = String;

    /// Accepts the stored name or the display name, ignoring case and spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        Self::ALL
            .into_iter()
            .find(|t| t.raw_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Unknown theme: {}", s))
    }
}
