//! Desktop configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it overrides:
//!
//! ```toml
//! background = "forest"
//! window_dock_reserve = 64
//!
//! [viewport]
//! width = 1280
//! height = 800
//! ```

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Viewport, WIDGET_DOCK_RESERVE, WINDOW_DOCK_RESERVE};

/// Background reference used until the user picks another one.
pub const DEFAULT_BACKGROUND: &str = "https://images.unsplash.com/photo-1549880338-65ddcdfd017b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

#[derive(Debug, Error)]
/// Failures loading or validating a [`DesktopConfig`].
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The config text is not valid TOML for [`DesktopConfig`].
    #[error("failed to parse desktop config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config parsed but holds unusable values.
    #[error("invalid desktop config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Boot-time settings for a [`crate::DesktopStore`].
pub struct DesktopConfig {
    /// Initial viewport; hosts update it with `SetViewport` as the screen changes.
    pub viewport: Viewport,
    /// Bottom strip kept clear of dragged windows.
    pub window_dock_reserve: i32,
    /// Bottom strip kept clear of dragged widgets.
    pub widget_dock_reserve: i32,
    /// Initial desktop background reference.
    pub background: String,
    /// Start with the sample Desktop/Documents/Downloads tree instead of an empty root.
    pub seed_file_system: bool,
    /// Place the starter widget set at boot.
    pub starter_widgets: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            window_dock_reserve: WINDOW_DOCK_RESERVE,
            widget_dock_reserve: WIDGET_DOCK_RESERVE,
            background: DEFAULT_BACKGROUND.to_string(),
            seed_file_system: true,
            starter_widgets: true,
        }
    }
}

impl DesktopConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and [`ConfigError::Invalid`] when
    /// [`Self::validate`] fails.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise the errors of
    /// [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let body = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&body)
    }

    /// Checks that the viewport is non-empty and each dock strip fits inside it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width <= 0 || self.viewport.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport must be positive, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        for (field, reserve) in [
            ("window_dock_reserve", self.window_dock_reserve),
            ("widget_dock_reserve", self.widget_dock_reserve),
        ] {
            if reserve < 0 || reserve >= self.viewport.height {
                return Err(ConfigError::Invalid(format!(
                    "{field} must be within 0..{}, got {reserve}",
                    self.viewport.height
                )));
            }
        }
        Ok(())
    }
}
