//! Parameter surface — the named, range-bounded controls a host UI binds to.
//!
//! Every per-channel control is a [`ParamKey`]; a host writes through
//! [`Signal::set`](crate::dsp::signal::Signal::set) instead of poking fields by
//! string. Descriptors carry everything a control panel needs to build its
//! widgets (range, step, group, label) and [`ParamKey::format`] renders the live
//! readout next to each one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dsp::signal::{DRIFT_SCALE, FREQ_SCALE};
use crate::error::LedGridError;

/// Grid size used when a resize request is not a number.
pub const DEFAULT_GRID_SIZE: usize = 32;
pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 128;

/// Speed control input `[-1, 1]` is cubed and scaled by this.
pub const SPEED_SCALE: f64 = 1000.0;

/// Per-channel parameter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    #[serde(rename = "geometry")]
    Geometry,
    #[serde(rename = "freqX")]
    FreqX,
    #[serde(rename = "freqY")]
    FreqY,
    #[serde(rename = "drift")]
    Drift,
    #[serde(rename = "shape")]
    Shape,
    #[serde(rename = "cutoff")]
    Cutoff,
    #[serde(rename = "mod")]
    Mod,
}

/// Which panel section a control is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamGroup {
    Spatial,
    Motion,
    Tone,
}

/// Everything a control surface needs to build one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub key: ParamKey,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub group: ParamGroup,
    pub default: f64,
}

impl ParamKey {
    /// All keys in display order.
    pub const ALL: [ParamKey; 7] = [
        ParamKey::Geometry,
        ParamKey::FreqX,
        ParamKey::FreqY,
        ParamKey::Drift,
        ParamKey::Mod,
        ParamKey::Shape,
        ParamKey::Cutoff,
    ];

    /// Wire name used by the host.
    pub fn name(self) -> &'static str {
        match self {
            ParamKey::Geometry => "geometry",
            ParamKey::FreqX => "freqX",
            ParamKey::FreqY => "freqY",
            ParamKey::Drift => "drift",
            ParamKey::Shape => "shape",
            ParamKey::Cutoff => "cutoff",
            ParamKey::Mod => "mod",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::Geometry => "Geometry",
            ParamKey::FreqX => "Frequency X",
            ParamKey::FreqY => "Frequency Y",
            ParamKey::Drift => "Drift",
            ParamKey::Shape => "Shape",
            ParamKey::Cutoff => "Cutoff",
            ParamKey::Mod => "Modulation",
        }
    }

    pub fn group(self) -> ParamGroup {
        match self {
            ParamKey::Geometry | ParamKey::FreqX | ParamKey::FreqY => ParamGroup::Spatial,
            ParamKey::Drift | ParamKey::Mod => ParamGroup::Motion,
            ParamKey::Shape | ParamKey::Cutoff => ParamGroup::Tone,
        }
    }

    /// Declared `(min, max)` range.
    pub fn range(self) -> (f64, f64) {
        match self {
            ParamKey::Shape => (0.0, 1.0),
            _ => (-1.0, 1.0),
        }
    }

    pub fn descriptor(self) -> ParamDescriptor {
        let (min, max) = self.range();
        ParamDescriptor {
            key: self,
            label: self.label().to_string(),
            min,
            max,
            step: 0.01,
            group: self.group(),
            default: crate::config::SignalConfig::default().get(self),
        }
    }

    /// Live readout text for a control value.
    pub fn format(self, value: f64) -> String {
        match self {
            ParamKey::Geometry => {
                if value >= 1.0 {
                    "linear".to_string()
                } else if value <= -1.0 {
                    "grid".to_string()
                } else if value > 0.0 {
                    format!("radial → linear {:.0}%", value * 100.0)
                } else if value < 0.0 {
                    format!("radial → grid {:.0}%", -value * 100.0)
                } else {
                    "radial".to_string()
                }
            }
            ParamKey::FreqX | ParamKey::FreqY => {
                format!("{:.3} cycles", value * value * value * FREQ_SCALE)
            }
            ParamKey::Drift => {
                if value < 0.0 {
                    format!("snap {:.2}", -value)
                } else if value > 0.0 {
                    format!("rate {:.4}/frame", value * DRIFT_SCALE)
                } else {
                    "frozen".to_string()
                }
            }
            ParamKey::Shape => {
                if value < 0.5 {
                    format!("triangle {:.0}% / sine", (0.5 - value) * 200.0)
                } else if value > 0.5 {
                    format!("sine / square {:.0}%", (value - 0.5) * 200.0)
                } else {
                    "sine".to_string()
                }
            }
            ParamKey::Cutoff => {
                if value > 0.0 {
                    format!("low {value:.2}")
                } else if value < 0.0 {
                    format!("high {:.2}", 1.0 + value)
                } else {
                    "off".to_string()
                }
            }
            ParamKey::Mod => format!("{:+.0}%", value * 100.0),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamKey {
    type Err = LedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamKey::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| LedGridError::UnknownParam(s.to_string()))
    }
}

/// Descriptor table for every per-channel control, in display order.
pub fn param_descriptors() -> Vec<ParamDescriptor> {
    ParamKey::ALL.into_iter().map(ParamKey::descriptor).collect()
}

/// Map the bounded speed control to a tick increment. Cubing keeps slow
/// speeds finely adjustable; negative input runs time backwards.
pub fn speed_from_input(input: f64) -> f64 {
    input * input * input * SPEED_SCALE
}

/// Clamp a requested grid side to `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
/// Non-finite requests fall back to [`DEFAULT_GRID_SIZE`].
pub fn clamp_grid_size(requested: f64) -> usize {
    if !requested.is_finite() {
        log::warn!("grid size {requested} is not a number, using {DEFAULT_GRID_SIZE}");
        return DEFAULT_GRID_SIZE;
    }
    let size = requested
        .round()
        .clamp(MIN_GRID_SIZE as f64, MAX_GRID_SIZE as f64) as usize;
    if size as f64 != requested {
        log::warn!("grid size {requested} clamped to {size}");
    }
    size
}

/// Parse a grid side from control text, e.g. a number input's value.
pub fn parse_grid_size(text: &str) -> usize {
    match text.trim().parse::<f64>() {
        Ok(n) => clamp_grid_size(n),
        Err(_) => {
            log::warn!("grid size '{text}' is not a number, using {DEFAULT_GRID_SIZE}");
            DEFAULT_GRID_SIZE
        }
    }
}
