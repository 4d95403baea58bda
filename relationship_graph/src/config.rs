//! Engine configuration - canvas extent, force constants and node sizing.
//!
//! Every field has a default, so a TOML document only needs the values it
//! wants to change:
//!
//! ```toml
//! [layout]
//! iterations = 80
//! seed = 42
//!
//! [radius]
//! max_radius = 24.0
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed graph config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration for the relationship graph engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub layout: LayoutConfig,
    pub radius: RadiusConfig,
}

impl GraphConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: GraphConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.layout.validate()?;
        self.radius.validate()
    }
}

/// Configuration for the force-directed layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width.
    pub width: f64,

    /// Canvas height.
    pub height: f64,

    /// Margin kept free on every side of the canvas.
    pub padding: f64,

    /// Number of simulation steps per run.
    pub iterations: u32,

    /// Pairwise charge pushing nodes apart (divided by squared distance).
    pub repulsion_strength: f64,

    /// Spring constant pulling linked nodes together (times distance).
    pub attraction_strength: f64,

    /// Velocity multiplier applied each step (0.0-1.0, exclusive).
    pub damping: f64,

    /// Added to squared distances so coincident nodes stay finite.
    pub epsilon: f64,

    /// Seed for initial placement. `None` draws a fresh layout every build.
    pub seed: Option<u64>,

    /// Wall-clock budget for one run in milliseconds. Exceeding it stops the
    /// run early and keeps the partial layout.
    pub max_duration_ms: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 50.0,
            iterations: 50,
            repulsion_strength: 5000.0,
            attraction_strength: 0.01,
            damping: 0.85,
            epsilon: 0.01,
            seed: None,
            max_duration_ms: None,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid("layout.width", "must be a positive number"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid("layout.height", "must be a positive number"));
        }
        if !(self.padding >= 0.0 && self.padding * 2.0 < self.width.min(self.height)) {
            return Err(invalid(
                "layout.padding",
                "must be non-negative and leave room inside the canvas",
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(invalid("layout.damping", "must lie strictly between 0 and 1"));
        }
        if !(self.repulsion_strength >= 0.0 && self.attraction_strength >= 0.0) {
            return Err(invalid(
                "layout.repulsion_strength",
                "force strengths must be non-negative",
            ));
        }
        if !(self.epsilon > 0.0) {
            return Err(invalid("layout.epsilon", "must be positive"));
        }
        Ok(())
    }

    /// Smallest allowed x coordinate.
    pub fn min_x(&self) -> f64 {
        self.padding
    }

    /// Largest allowed x coordinate.
    pub fn max_x(&self) -> f64 {
        self.width - self.padding
    }

    /// Smallest allowed y coordinate.
    pub fn min_y(&self) -> f64 {
        self.padding
    }

    /// Largest allowed y coordinate.
    pub fn max_y(&self) -> f64 {
        self.height - self.padding
    }
}

/// Configuration for deriving node radius from importance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusConfig {
    /// Radius of a node with no connections.
    pub base_radius: f64,

    /// Radius gained per connection.
    pub scale_factor: f64,

    /// Maximum radius gained from connections.
    pub importance_cap: f64,

    /// Hard upper bound on the final radius.
    pub max_radius: f64,
}

impl Default for RadiusConfig {
    fn default() -> Self {
        Self {
            base_radius: 8.0,
            scale_factor: 2.0,
            importance_cap: 12.0,
            max_radius: 20.0,
        }
    }
}

impl RadiusConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.base_radius >= 0.0) {
            return Err(invalid("radius.base_radius", "must be non-negative"));
        }
        if !(self.scale_factor >= 0.0 && self.importance_cap >= 0.0) {
            return Err(invalid("radius.scale_factor", "growth must be non-negative"));
        }
        if !(self.max_radius >= self.base_radius) {
            return Err(invalid("radius.max_radius", "must not be below base_radius"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
