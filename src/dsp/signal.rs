//! Signal — one color channel's procedural waveform.
//!
//! A signal maps a (possibly folded) cell coordinate plus the animation clock
//! to a brightness in `[0, 1]`. Three spatial projections are blended by
//! `geometry`:
//!
//! - **Grid product** (`geometry <= -1`): one wave per axis, multiplied.
//! - **Radial** (`geometry == 0`): distance and angle from the grid center.
//! - **Linear** (`geometry >= 1`): a plane wave along `(fx, fy)`.
//!
//! The wave itself comes from the [shaper](super::shaper), then gets
//! normalized and windowed by `cutoff`.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::shaper::{lerp, shape};
use crate::config::SignalConfig;
use crate::error::LedGridError;
use crate::params::ParamKey;

/// Raw frequency controls are cubed then scaled by this.
pub const FREQ_SCALE: f64 = 10.0;
/// Ticks per unit of temporal phase.
pub const TICK_RATE: f64 = 100.0;
/// Full-scale modulation shifts the phase by this many cycles.
pub const MOD_DEPTH: f64 = 3.0;
/// Phase advance per frame at `drift = 1`.
pub const DRIFT_SCALE: f64 = 0.002;

/// The three color channels, in modulation-chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = LedGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| LedGridError::UnknownChannel(s.to_string()))
    }
}

/// One channel's waveform generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub channel: Channel,
    /// Projection blend: -1 grid product, 0 radial, 1 linear.
    pub geometry: f64,
    pub freq_x: f64,
    pub freq_y: f64,
    /// <0 snaps the phase to `-drift`, >0 accumulates, 0 freezes.
    pub drift: f64,
    /// 0 triangle, 0.5 sine, 1 square.
    pub shape: f64,
    /// >0 clips the low end, <0 clips the high end.
    pub cutoff: f64,
    /// Depth of phase modulation by the previous channel's output.
    pub modulation: f64,

    phase: f64,
    // Effective frequencies, refreshed once per frame.
    fx: f64,
    fy: f64,
}

impl Signal {
    pub fn new(channel: Channel) -> Self {
        Self::with_config(channel, &SignalConfig::default())
    }

    pub fn with_config(channel: Channel, config: &SignalConfig) -> Self {
        let mut signal = Signal {
            channel,
            geometry: config.geometry,
            freq_x: config.freq_x,
            freq_y: config.freq_y,
            drift: config.drift,
            shape: config.shape,
            cutoff: config.cutoff,
            modulation: config.modulation,
            phase: 0.0,
            fx: 0.0,
            fy: 0.0,
        };
        signal.update_frequencies();
        signal
    }

    /// Write one control. Values are taken as-is; range checking is the
    /// control surface's job.
    pub fn set(&mut self, key: ParamKey, value: f64) {
        match key {
            ParamKey::Geometry => self.geometry = value,
            ParamKey::FreqX => self.freq_x = value,
            ParamKey::FreqY => self.freq_y = value,
            ParamKey::Drift => self.drift = value,
            ParamKey::Shape => self.shape = value,
            ParamKey::Cutoff => self.cutoff = value,
            ParamKey::Mod => self.modulation = value,
        }
    }

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

    /// Current phase offset in cycles, `[0, 1)` once accumulating.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Cached effective frequencies `(fx, fy)`.
    pub fn frequencies(&self) -> (f64, f64) {
        (self.fx, self.fy)
    }

    /// Recompute the cubic frequency remap. Call once per frame, not per cell.
    pub fn update_frequencies(&mut self) {
        self.fx = cubic(self.freq_x) * FREQ_SCALE;
        self.fy = cubic(self.freq_y) * FREQ_SCALE;
    }

    /// Step the phase by one frame according to `drift`.
    pub fn advance_phase(&mut self) {
        if self.drift < 0.0 {
            self.phase = -self.drift;
        } else if self.drift > 0.0 {
            self.phase = (self.phase + self.drift * DRIFT_SCALE).rem_euclid(1.0);
        }
    }

    /// Brightness in `[0, 1]` at a cell.
    ///
    /// `col`/`row` may be fractional after a partial mirror fold.
    /// `mod_input` is the previous channel's output for this cell, or 0.
    pub fn value_at(
        &self,
        col: f64,
        row: f64,
        tick: f64,
        grid_x: usize,
        grid_y: usize,
        mod_input: f64,
    ) -> f64 {
        let u = col / grid_x as f64;
        let v = row / grid_y as f64;
        let temporal = tick / TICK_RATE;
        let phase_offset = self.phase * TAU + mod_input * self.modulation * MOD_DEPTH * TAU;

        let g = self.geometry;
        let wave = if g >= 1.0 {
            self.linear_wave(u, v, temporal, phase_offset)
        } else if g <= -1.0 {
            self.grid_wave(u, v, temporal, phase_offset)
        } else {
            let radial = self.radial_wave(u, v, temporal, phase_offset);
            if g > 0.0 {
                lerp(radial, self.linear_wave(u, v, temporal, phase_offset), g)
            } else {
                lerp(radial, self.grid_wave(u, v, temporal, phase_offset), -g)
            }
        };

        window((wave + 1.0) / 2.0, self.cutoff).clamp(0.0, 1.0)
    }

    fn linear_wave(&self, u: f64, v: f64, temporal: f64, phase_offset: f64) -> f64 {
        let spatial = u * self.fx + v * self.fy;
        shape((spatial + temporal) * TAU + phase_offset, self.shape)
    }

    fn grid_wave(&self, u: f64, v: f64, temporal: f64, phase_offset: f64) -> f64 {
        let wx = shape((u * self.fx + temporal) * TAU + phase_offset, self.shape);
        let wy = shape((v * self.fy + temporal) * TAU + phase_offset, self.shape);
        wx * wy
    }

    fn radial_wave(&self, u: f64, v: f64, temporal: f64, phase_offset: f64) -> f64 {
        let nx = u - 0.5;
        let ny = v - 0.5;
        let spatial = 2.0 * (nx * nx + ny * ny).sqrt() * self.fx + ny.atan2(nx) / TAU * self.fy;
        shape((spatial + temporal) * TAU + phase_offset, self.shape)
    }
}

fn cubic(x: f64) -> f64 {
    x * x * x
}

/// Cutoff window: clip one end of `[0, 1]` to zero and stretch the rest back
/// over the full range.
pub fn window(value: f64, cutoff: f64) -> f64 {
    if cutoff > 0.0 {
        if cutoff >= 1.0 || value <= cutoff {
            0.0
        } else {
            (value - cutoff) / (1.0 - cutoff)
        }
    } else if cutoff < 0.0 {
        let ceil = 1.0 + cutoff;
        if ceil <= 0.0 || value >= ceil {
            0.0
        } else {
            value / ceil
        }
    } else {
        value
    }
}
