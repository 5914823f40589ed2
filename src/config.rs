//! Construction-time configuration for a grid and its three signals.

use serde::{Deserialize, Serialize};

use crate::dsp::signal::Channel;
use crate::error::LedGridError;
use crate::params::{DEFAULT_GRID_SIZE, ParamKey};

/// Initial control values for one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignalConfig {
    pub geometry: f64,
    pub freq_x: f64,
    pub freq_y: f64,
    pub drift: f64,
    pub shape: f64,
    pub cutoff: f64,
    #[serde(rename = "mod")]
    pub modulation: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        SignalConfig {
            geometry: 1.0,
            // one cycle across the grid after the cubic remap
            freq_x: 0.1_f64.cbrt(),
            freq_y: 0.0,
            drift: 0.0,
            shape: 0.5,
            cutoff: 0.0,
            modulation: 0.0,
        }
    }
}

impl SignalConfig {
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::Geometry => self.geometry,
            ParamKey::FreqX => self.freq_x,
            ParamKey::FreqY => self.freq_y,
            ParamKey::Drift => self.drift,
            ParamKey::Shape => self.shape,
            ParamKey::Cutoff => self.cutoff,
            ParamKey::Mod => self.modulation,
        }
    }
}

/// Grid, canvas and initial signal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub grid_x: f64,
    pub grid_y: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Tick increment per frame (already remapped, not the raw control input).
    pub speed: f64,
    pub mirror: f64,
    /// Red, green, blue.
    pub signals: [SignalConfig; 3],
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            grid_x: DEFAULT_GRID_SIZE as f64,
            grid_y: DEFAULT_GRID_SIZE as f64,
            canvas_width: 512.0,
            canvas_height: 512.0,
            speed: 1.0,
            mirror: 0.0,
            signals: Default::default(),
        }
    }
}

impl GridConfig {
    /// Parse a JSON config; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LedGridError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn signal(&self, channel: Channel) -> &SignalConfig {
        &self.signals[channel.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = GridConfig::from_json("{}").unwrap();
        assert_eq!(config, GridConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = GridConfig::from_json(
            r#"{ "gridX": 16, "mirror": 0.5, "signals": [{ "shape": 0.0 }, {}, { "mod": -1.0 }] }"#,
        )
        .unwrap();
        assert_eq!(config.grid_x, 16.0);
        assert_eq!(config.grid_y, DEFAULT_GRID_SIZE as f64);
        assert_eq!(config.mirror, 0.5);
        assert_eq!(config.signal(Channel::Red).shape, 0.0);
        assert_eq!(config.signal(Channel::Red).geometry, 1.0);
        assert_eq!(config.signal(Channel::Blue).modulation, -1.0);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = GridConfig::from_json("{ gridX: ").unwrap_err();
        assert!(matches!(err, LedGridError::Config(_)));
    }

    #[test]
    fn default_frequency_is_one_cycle() {
        let f = SignalConfig::default().freq_x;
        assert!((f * f * f * 10.0 - 1.0).abs() < 1e-12);
    }
}
