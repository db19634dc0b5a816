//! Settings loaded from `rewind.toml`.

use std::path::Path;
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use rewind_tictactoe::MoveOrder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// User settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Start with the latest move at the top of the move list.
    #[serde(default)]
    descending: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Colour names for the board and move list.
    #[serde(default)]
    theme: Theme,
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            descending: false,
            log_filter: default_log_filter(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, falling back to defaults when it
    /// does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            info!("Settings file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text, validating the theme colours.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.theme.palette()?;
        info!(descending = settings.descending, "Settings loaded");
        Ok(settings)
    }

    /// Initial move-list order.
    pub fn order(&self) -> MoveOrder {
        if self.descending {
            MoveOrder::Descending
        } else {
            MoveOrder::Ascending
        }
    }
}

/// Colour names, as accepted by ratatui (`"blue"`, `"lightred"`, `"#ffaa00"`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Colour of X marks.
    x: String,
    /// Colour of O marks.
    o: String,
    /// Background of squares on the winning line.
    highlight: String,
    /// Background of the selected move entry.
    selected: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            highlight: "green".to_string(),
            selected: "yellow".to_string(),
        }
    }
}

impl Theme {
    /// Resolves the colour names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x", &self.x)?,
            o: parse_color("o", &self.o)?,
            highlight: parse_color("highlight", &self.highlight)?,
            selected: parse_color("selected", &self.selected)?,
        })
    }
}

#[track_caller]
fn parse_color(key: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Unknown colour {:?} for theme.{}", name, key)))
}

/// Resolved theme colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Colour of X marks.
    pub x: Color,
    /// Colour of O marks.
    pub o: Color,
    /// Background of squares on the winning line.
    pub highlight: Color,
    /// Background of the selected move entry.
    pub selected: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Green,
            selected: Color::Yellow,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
