//! Offline renderer — runs a grid for a fixed number of frames.

use super::grid::Grid;

/// Render `frames` consecutive frames and return their packed RGB bytes,
/// frame after frame, in cell order.
pub fn render_frames(grid: &mut Grid, frames: usize) -> Vec<u8> {
    let frame_len = grid.cells().len() * 3;
    let mut out = Vec::with_capacity(frame_len * frames);
    for _ in 0..frames {
        grid.frame();
        out.extend_from_slice(&grid.colors_flat());
    }
    out
}
