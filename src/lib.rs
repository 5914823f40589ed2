pub mod config;
pub mod dsp;
pub mod error;
pub mod params;

use crate::config::GridConfig;
use crate::dsp::animation::Animation;
use crate::dsp::grid::Grid;
use crate::dsp::signal::Channel;
use crate::error::LedGridError;
use crate::params::{DEFAULT_GRID_SIZE, ParamKey};
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn js_err(e: LedGridError) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

/// WASM-exposed: return the ledgrid-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: descriptor table for building the per-channel controls.
#[wasm_bindgen]
pub fn param_schema() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&params::param_descriptors())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: readout text for a control value.
#[wasm_bindgen]
pub fn format_param(key: &str, value: f64) -> Result<String, JsValue> {
    let key: ParamKey = key.parse().map_err(js_err)?;
    Ok(key.format(value))
}

/// Look up a channel + parameter pair from host strings.
pub fn resolve_param(channel: &str, key: &str) -> Result<(Channel, ParamKey), LedGridError> {
    Ok((channel.parse()?, key.parse()?))
}

/// WASM-exposed handle owning one grid and its animation state.
///
/// The host calls `frame()` from its animation callback, then reads
/// `colors()` (packed RGB per cell) and paints each cell rectangle.
#[wasm_bindgen]
pub struct LedGrid {
    animation: Animation,
}

#[wasm_bindgen]
impl LedGrid {
    /// `config` may be `undefined`/`null` for defaults, otherwise a partial
    /// `GridConfig` object. Canvas size arguments override the config's.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f64, canvas_height: f64, config: JsValue) -> Result<LedGrid, JsValue> {
        let mut config: GridConfig = if config.is_undefined() || config.is_null() {
            GridConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&format!("{e}")))?
        };
        config.canvas_width = canvas_width;
        config.canvas_height = canvas_height;
        let grid = Grid::new(&config).map_err(js_err)?;
        Ok(LedGrid {
            animation: Animation::new(grid),
        })
    }

    pub fn start(&mut self) {
        self.animation.start();
    }

    pub fn stop(&mut self) {
        self.animation.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    /// Run one tick. Returns `false` (and does nothing) while stopped.
    pub fn frame(&mut self) -> bool {
        self.animation.on_frame()
    }

    /// Packed `r, g, b` bytes per cell, in cell order.
    pub fn colors(&self) -> Vec<u8> {
        self.animation.grid().colors_flat()
    }

    /// Full cell list with rectangles and colors.
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.animation.cells())
            .map_err(|e| JsValue::from_str(&format!("{e}")))
    }

    pub fn set_param(&mut self, channel: &str, key: &str, value: f64) -> Result<(), JsValue> {
        let (channel, key) = resolve_param(channel, key).map_err(js_err)?;
        self.animation.grid_mut().signal_mut(channel).set(key, value);
        Ok(())
    }

    pub fn param(&self, channel: &str, key: &str) -> Result<f64, JsValue> {
        let (channel, key) = resolve_param(channel, key).map_err(js_err)?;
        Ok(self.animation.grid().signal(channel).get(key))
    }

    /// Speed control input in `[-1, 1]`, remapped cubically.
    pub fn set_speed_input(&mut self, input: f64) {
        self.animation.grid_mut().speed = params::speed_from_input(input);
    }

    pub fn speed(&self) -> f64 {
        self.animation.grid().speed
    }

    pub fn set_mirror(&mut self, mirror: f64) {
        self.animation.grid_mut().mirror = mirror;
    }

    /// Accepts numbers or numeric strings; anything else means the default size.
    pub fn resize(&mut self, grid_x: JsValue, grid_y: JsValue) {
        let x = js_grid_size(&grid_x);
        let y = js_grid_size(&grid_y);
        self.animation.grid_mut().resize(x, y);
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.animation.grid_mut().set_canvas_size(width, height).map_err(js_err)
    }

    pub fn grid_x(&self) -> usize {
        self.animation.grid().grid_x()
    }

    pub fn grid_y(&self) -> usize {
        self.animation.grid().grid_y()
    }

    pub fn tick(&self) -> f64 {
        self.animation.grid().tick()
    }
}

fn js_grid_size(value: &JsValue) -> f64 {
    if let Some(n) = value.as_f64() {
        n
    } else if let Some(s) = value.as_string() {
        params::parse_grid_size(&s) as f64
    } else {
        DEFAULT_GRID_SIZE as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_host_names() {
        assert_eq!(
            resolve_param("blue", "freqY").unwrap(),
            (Channel::Blue, ParamKey::FreqY)
        );
        assert_eq!(
            resolve_param("alpha", "freqY"),
            Err(LedGridError::UnknownChannel("alpha".to_string()))
        );
        assert_eq!(
            resolve_param("red", "hz"),
            Err(LedGridError::UnknownParam("hz".to_string()))
        );
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(core_version(), "0.3.0");
    }
}
