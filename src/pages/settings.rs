use std::fmt::Write;

use axer::config::AxerConfig;
use axer::theme::{AppTheme, ColorScheme};

/// The theme catalogue with the current theme starred.
pub fn theme_list(current: AppTheme) -> String {
    let mut out = String::from("Theme\n");
    for theme in AppTheme::ALL {
        let marker = if theme == current { "*" } else { " " };
        let _ = writeln!(out, "  {} {}", marker, theme.display_name());
    }
    out
}

pub fn settings_view(config: &AxerConfig) -> String {
    let mut out = theme_list(config.theme);
    let appearance = match config.theme.color_scheme() {
        Some(ColorScheme::Light) => "light",
        Some(ColorScheme::Dark) => "dark",
        None => "follows system",
    };
    let _ = writeln!(
        out,
        "\nAppearance: {}, accent {}",
        appearance,
        config.theme.primary_color().to_hex()
    );
    let _ = writeln!(
        out,
        "Debug logging: {}",
        if config.debug_logging { "on" } else { "off" }
    );
    let _ = writeln!(out, "Calendar window: {} days", config.calendar_window_days);
    out
}
