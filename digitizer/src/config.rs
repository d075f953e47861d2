//! Digitizer configuration: gesture and closure thresholds.
//!
//! Defaults come from [`crate::consts`]. Every value can be overridden from
//! the environment:
//!
//! - `POLYTRACE_DRAG_THRESHOLD_PX`: pointer travel (px) above which a release is a drag
//! - `POLYTRACE_SYMBOL_SCALE`: start-marker scale used for the closure radius
//! - `POLYTRACE_SYMBOL_PIXEL_RADIUS`: unscaled marker size (px)
//! - `POLYTRACE_MIN_RING_VERTICES`: vertex count before closure is considered

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::closure::ClosureParams;
use crate::consts::DRAG_THRESHOLD_PX;

pub const ENV_DRAG_THRESHOLD_PX: &str = "POLYTRACE_DRAG_THRESHOLD_PX";
pub const ENV_SYMBOL_SCALE: &str = "POLYTRACE_SYMBOL_SCALE";
pub const ENV_SYMBOL_PIXEL_RADIUS: &str = "POLYTRACE_SYMBOL_PIXEL_RADIUS";
pub const ENV_MIN_RING_VERTICES: &str = "POLYTRACE_MIN_RING_VERTICES";

const ENV_VARS: [&str; 4] = [ENV_DRAG_THRESHOLD_PX, ENV_SYMBOL_SCALE, ENV_SYMBOL_PIXEL_RADIUS, ENV_MIN_RING_VERTICES];

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: cannot parse '{value}'")]
    Parse { var: &'static str, value: String },
    #[error("{var}: {reason}")]
    OutOfRange { var: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DigitizerConfig {
    pub drag_threshold_px: f64,
    pub closure: ClosureParams,
}

impl Default for DigitizerConfig {
    fn default() -> Self {
        Self { drag_threshold_px: DRAG_THRESHOLD_PX, closure: ClosureParams::default() }
    }
}

impl DigitizerConfig {
    /// Build config from process environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but not valid Unicode,
    /// unparsable, or out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut values = Vec::with_capacity(ENV_VARS.len());
        for var in ENV_VARS {
            if let Some(value) = env_value(var)? {
                values.push((var, value));
            }
        }
        Self::from_lookup(|key| values.iter().find(|(var, _)| *var == key).map(|(_, value)| value.clone()))
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a value is present but unparsable or out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            drag_threshold_px: parse_or(&lookup, ENV_DRAG_THRESHOLD_PX, defaults.drag_threshold_px)?,
            closure: ClosureParams {
                symbol_scale: parse_or(&lookup, ENV_SYMBOL_SCALE, defaults.closure.symbol_scale)?,
                symbol_pixel_radius: parse_or(&lookup, ENV_SYMBOL_PIXEL_RADIUS, defaults.closure.symbol_pixel_radius)?,
                min_vertices: parse_or(&lookup, ENV_MIN_RING_VERTICES, defaults.closure.min_vertices)?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drag_threshold_px.is_finite() && self.drag_threshold_px >= 0.0) {
            return Err(ConfigError::OutOfRange { var: ENV_DRAG_THRESHOLD_PX, reason: "must be finite and >= 0" });
        }
        if !(self.closure.symbol_scale.is_finite() && self.closure.symbol_scale > 0.0) {
            return Err(ConfigError::OutOfRange { var: ENV_SYMBOL_SCALE, reason: "must be finite and > 0" });
        }
        if !(self.closure.symbol_pixel_radius.is_finite() && self.closure.symbol_pixel_radius > 0.0) {
            return Err(ConfigError::OutOfRange { var: ENV_SYMBOL_PIXEL_RADIUS, reason: "must be finite and > 0" });
        }
        if self.closure.min_vertices < 4 {
            return Err(ConfigError::OutOfRange { var: ENV_MIN_RING_VERTICES, reason: "must be at least 4" });
        }
        Ok(())
    }
}

/// Read one variable; unset is `None`, non-Unicode is a parse error.
fn env_value(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::Parse { var, value: raw.to_string_lossy().into_owned() }),
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Parse { var, value: raw }),
    }
}
