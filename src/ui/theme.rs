//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use statusboard_types::{HeartbeatStatus, Status};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for services that are up.
    pub up: Color,
    /// Color for services that are down.
    pub down: Color,
    /// Color for the warning status.
    pub warning: Color,
    /// Color for the maintenance status.
    pub maintenance: Color,
    /// Color for unknown status and missing heartbeats.
    pub unknown: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for section titles.
    pub header: Style,
    /// Style for the selected card.
    pub selected: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            up: Color::Green,
            down: Color::Red,
            warning: Color::Yellow,
            maintenance: Color::Blue,
            unknown: Color::DarkGray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            up: Color::Green,
            down: Color::Red,
            warning: Color::Yellow,
            maintenance: Color::Magenta,
            unknown: Color::Gray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Color for a service status.
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Up => self.up,
            Status::Down => self.down,
            Status::Warning => self.warning,
            Status::Maintenance => self.maintenance,
            Status::Unknown => self.unknown,
        }
    }

    /// Get style for a service status
    pub fn status_style(&self, status: Status) -> Style {
        let style = Style::default().fg(self.status_color(status));
        if status == Status::Down {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for one heartbeat glyph.
    pub fn heartbeat_style(&self, status: HeartbeatStatus) -> Style {
        Style::default().fg(self.status_color(status.into()))
    }
}
