//! Grid — the cell array and the per-frame evaluation pass.
//!
//! Each frame every cell is folded by the mirror transform, run through the
//! red → green → blue modulation chain and quantized to 8-bit color. Cells
//! carry no state across frames besides the color kept for presentation.

use serde::Serialize;

use super::mirror;
use super::signal::{Channel, Signal};
use crate::config::GridConfig;
use crate::error::LedGridError;
use crate::params::clamp_grid_size;

/// Pixel-space rectangle a cell occupies on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// 8-bit color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub rect: Rect,
    pub color: Rgb,
}

/// Map a `[0, 1]` channel value to `0..=255`, rounding halves up.
pub fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

#[derive(Debug, Clone)]
pub struct Grid {
    grid_x: usize,
    grid_y: usize,
    canvas_width: f64,
    canvas_height: f64,
    /// Fold control, see [`mirror::fold_amounts`].
    pub mirror: f64,
    /// Tick increment per frame; negative runs backwards.
    pub speed: f64,
    tick: f64,
    signals: [Signal; 3],
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(config: &GridConfig) -> Result<Self, LedGridError> {
        validate_canvas(config.canvas_width, config.canvas_height)?;
        let signals = Channel::ALL.map(|c| Signal::with_config(c, config.signal(c)));
        let mut grid = Grid {
            grid_x: clamp_grid_size(config.grid_x),
            grid_y: clamp_grid_size(config.grid_y),
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            mirror: config.mirror,
            speed: config.speed,
            tick: 0.0,
            signals,
            cells: Vec::new(),
        };
        grid.build_cells();
        Ok(grid)
    }

    pub fn grid_x(&self) -> usize {
        self.grid_x
    }

    pub fn grid_y(&self) -> usize {
        self.grid_y
    }

    pub fn tick(&self) -> f64 {
        self.tick
    }

    pub fn set_tick(&mut self, tick: f64) {
        self.tick = tick;
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn signal(&self, channel: Channel) -> &Signal {
        &self.signals[channel.index()]
    }

    pub fn signal_mut(&mut self, channel: Channel) -> &mut Signal {
        &mut self.signals[channel.index()]
    }

    /// Rebuild the cell array for a new grid size. Sizes are clamped to
    /// `[2, 128]`; previous colors are discarded.
    pub fn resize(&mut self, grid_x: f64, grid_y: f64) {
        self.grid_x = clamp_grid_size(grid_x);
        self.grid_y = clamp_grid_size(grid_y);
        self.build_cells();
    }

    /// Re-lay cell rectangles for a new canvas size.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> Result<(), LedGridError> {
        validate_canvas(width, height)?;
        self.canvas_width = width;
        self.canvas_height = height;
        log::debug!("canvas resized to {width}x{height}");
        let (cell_w, cell_h) = self.cell_size();
        for cell in &mut self.cells {
            cell.rect = cell_rect(cell.col, cell.row, cell_w, cell_h);
        }
        Ok(())
    }

    /// Advance the clock and every signal's phase by one frame.
    pub fn advance(&mut self) {
        self.tick += self.speed;
        for signal in &mut self.signals {
            signal.advance_phase();
        }
    }

    /// Evaluate every cell at the current tick.
    pub fn update(&mut self) {
        for signal in &mut self.signals {
            signal.update_frequencies();
        }

        let [red, green, blue] = &self.signals;
        for cell in &mut self.cells {
            let (col, row) = mirror::fold(cell.col, cell.row, self.grid_x, self.grid_y, self.mirror);
            let r = red.value_at(col, row, self.tick, self.grid_x, self.grid_y, 0.0);
            let g = green.value_at(col, row, self.tick, self.grid_x, self.grid_y, r);
            let b = blue.value_at(col, row, self.tick, self.grid_x, self.grid_y, g);
            cell.color = Rgb::new(quantize(r), quantize(g), quantize(b));
        }
    }

    /// One full frame: advance, then evaluate.
    pub fn frame(&mut self) {
        self.advance();
        self.update();
    }

    /// Current colors as packed `r, g, b` bytes in cell order.
    pub fn colors_flat(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.cells.len() * 3);
        for cell in &self.cells {
            out.extend_from_slice(&[cell.color.r, cell.color.g, cell.color.b]);
        }
        out
    }

    fn cell_size(&self) -> (f64, f64) {
        (
            self.canvas_width / self.grid_x as f64,
            self.canvas_height / self.grid_y as f64,
        )
    }

    fn build_cells(&mut self) {
        let (cell_w, cell_h) = self.cell_size();
        let mut cells = Vec::with_capacity(self.grid_x * self.grid_y);
        for col in 0..self.grid_x {
            for row in 0..self.grid_y {
                cells.push(Cell {
                    col,
                    row,
                    rect: cell_rect(col, row, cell_w, cell_h),
                    color: Rgb::default(),
                });
            }
        }
        self.cells = cells;
        log::debug!("built {}x{} grid ({} cells)", self.grid_x, self.grid_y, self.cells.len());
    }
}

fn cell_rect(col: usize, row: usize, cell_w: f64, cell_h: f64) -> Rect {
    Rect {
        x: col as f64 * cell_w,
        y: row as f64 * cell_h,
        width: cell_w,
        height: cell_h,
    }
}

fn validate_canvas(width: f64, height: f64) -> Result<(), LedGridError> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(LedGridError::InvalidCanvas { width, height })
    }
}
