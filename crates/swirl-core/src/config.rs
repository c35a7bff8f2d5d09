//! Mount-time configuration.
//!
//! A [`SwirlConfig`] is fixed for the lifetime of one mount; changing any
//! value means unmounting and mounting again. Values arrive either as typed
//! JS object fields or as `data-*` attribute text, so parsing goes through
//! [`ConfigValue`] and reports problems per key instead of failing the whole
//! configuration.

use crate::constants::*;
use crate::error::ConfigError;
use crate::sizing::SizingStrategy;

#[derive(Clone, Debug, PartialEq)]
pub struct SwirlConfig {
    /// Time multiplier applied to elapsed seconds.
    pub speed: f64,
    /// Number of curves painted per frame.
    pub density: u32,
    /// Brightness multiplier for stroke alpha, shadow alpha and blur.
    pub glow: f64,
    /// Skip the animation entirely when the platform asks for reduced motion.
    pub respect_reduced_motion: bool,
    /// Vertical center as a fraction of height (0 = top, 1 = bottom).
    /// Stored as given and clamped when used.
    pub y_bias: f64,
    /// Size to the viewport instead of the parent container.
    pub fixed: bool,
}

impl Default for SwirlConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            density: DEFAULT_DENSITY,
            glow: DEFAULT_GLOW,
            respect_reduced_motion: true,
            y_bias: DEFAULT_Y_BIAS,
            fixed: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigKey {
    Speed,
    Density,
    Glow,
    RespectReducedMotion,
    YBias,
    Fixed,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::Speed,
        ConfigKey::Density,
        ConfigKey::Glow,
        ConfigKey::RespectReducedMotion,
        ConfigKey::YBias,
        ConfigKey::Fixed,
    ];

    /// Accepts both the JS property name and the `data-*` attribute suffix.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "speed" => Some(ConfigKey::Speed),
            "density" => Some(ConfigKey::Density),
            "glow" => Some(ConfigKey::Glow),
            "respectReducedMotion" | "respect-reduced-motion" => {
                Some(ConfigKey::RespectReducedMotion)
            }
            "yBias" | "y-bias" => Some(ConfigKey::YBias),
            "fixed" => Some(ConfigKey::Fixed),
            _ => None,
        }
    }

    /// Property name on a JS configuration object.
    pub fn js_name(self) -> &'static str {
        match self {
            ConfigKey::Speed => "speed",
            ConfigKey::Density => "density",
            ConfigKey::Glow => "glow",
            ConfigKey::RespectReducedMotion => "respectReducedMotion",
            ConfigKey::YBias => "yBias",
            ConfigKey::Fixed => "fixed",
        }
    }

    /// Full `data-*` attribute name on the canvas element.
    pub fn attr_name(self) -> &'static str {
        match self {
            ConfigKey::Speed => "data-speed",
            ConfigKey::Density => "data-density",
            ConfigKey::Glow => "data-glow",
            ConfigKey::RespectReducedMotion => "data-respect-reduced-motion",
            ConfigKey::YBias => "data-y-bias",
            ConfigKey::Fixed => "data-fixed",
        }
    }
}

/// A raw configuration value before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ConfigValue {
    fn to_number(&self, key: &'static str) -> Result<f64, ConfigError> {
        let n = match self {
            ConfigValue::Number(n) => *n,
            ConfigValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                ConfigError::InvalidNumber {
                    key,
                    value: s.clone(),
                }
            })?,
            ConfigValue::Bool(b) => {
                return Err(ConfigError::InvalidNumber {
                    key,
                    value: b.to_string(),
                })
            }
        };
        if !n.is_finite() {
            return Err(ConfigError::OutOfRange { key, value: n });
        }
        Ok(n)
    }

    fn to_bool(&self, key: &'static str) -> Result<bool, ConfigError> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::Number(n) => Ok(*n != 0.0),
            // A bare attribute (`data-fixed`) reads as an empty string.
            ConfigValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "" | "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    key,
                    value: s.clone(),
                }),
            },
        }
    }
}

impl SwirlConfig {
    /// Apply one entry. On error the field keeps its previous value.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), ConfigError> {
        let key = ConfigKey::parse(key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let name = key.js_name();
        match key {
            ConfigKey::Speed => self.speed = non_negative(name, value.to_number(name)?)?,
            ConfigKey::Glow => self.glow = non_negative(name, value.to_number(name)?)?,
            ConfigKey::Density => {
                let n = non_negative(name, value.to_number(name)?)?.trunc();
                if n > MAX_DENSITY as f64 {
                    log::warn!("[config] density {} capped at {}", n, MAX_DENSITY);
                }
                self.density = (n as u32).min(MAX_DENSITY);
            }
            ConfigKey::YBias => self.y_bias = value.to_number(name)?,
            ConfigKey::RespectReducedMotion => {
                self.respect_reduced_motion = value.to_bool(name)?
            }
            ConfigKey::Fixed => self.fixed = value.to_bool(name)?,
        }
        Ok(())
    }

    /// Build a configuration from defaults plus `entries`, collecting every
    /// rejected entry instead of stopping at the first.
    pub fn from_entries<'a, I>(entries: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, ConfigValue)>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        for (key, value) in entries {
            if let Err(e) = cfg.set(key, value) {
                errors.push(e);
            }
        }
        (cfg, errors)
    }

    #[inline]
    pub fn y_bias_clamped(&self) -> f64 {
        self.y_bias.clamp(0.0, 1.0)
    }

    #[inline]
    pub fn strategy(&self) -> SizingStrategy {
        SizingStrategy::from_fixed(self.fixed)
    }
}

fn non_negative(key: &'static str, n: f64) -> Result<f64, ConfigError> {
    if n < 0.0 {
        Err(ConfigError::OutOfRange { key, value: n })
    } else {
        Ok(n)
    }
}
