//! Animation lifecycle — start/stop gating around the per-frame tick.
//!
//! The host owns the actual frame callback (e.g. `requestAnimationFrame`) and
//! calls [`Animation::on_frame`] from it. While stopped, frames are ignored
//! and the last colors stay on the cells.

use super::grid::{Cell, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Running,
}

#[derive(Debug, Clone)]
pub struct Animation {
    grid: Grid,
    state: PlaybackState,
    frames: u64,
}

impl Animation {
    pub fn new(mut grid: Grid) -> Self {
        // Fill cells so a stopped animation still has something to show.
        grid.update();
        Animation {
            grid,
            state: PlaybackState::Stopped,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.state == PlaybackState::Stopped {
            log::info!("animation started at tick {}", self.grid.tick());
            self.state = PlaybackState::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.state == PlaybackState::Running {
            log::info!("animation stopped after {} frames", self.frames);
            self.state = PlaybackState::Stopped;
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Run one frame if running. Returns whether the cells changed.
    pub fn on_frame(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.grid.frame();
        self.frames += 1;
        true
    }

    /// Number of frames executed since creation.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for control writes between frames.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
