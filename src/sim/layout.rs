//! Block grid generation

use glam::Vec2;

use crate::config::GameConfig;
use crate::consts::BLOCK_ROW_GAP;

/// Top-left corners of a fresh block grid, row-major, left-to-right,
/// top-to-bottom.
///
/// Horizontally `cols + 1` equal gaps plus `cols` block widths exactly fill
/// the arena; rows are separated (and offset from the top wall) by
/// `BLOCK_ROW_GAP`.
pub fn block_grid(config: &GameConfig) -> Vec<Vec2> {
    let gap_x = config.horizontal_gap();
    let step_x = config.block.width as f32 + gap_x;
    let step_y = config.block.height as f32 + BLOCK_ROW_GAP;

    let mut positions = Vec::with_capacity(config.block_count());
    for row in 0..config.grid.rows {
        let y = BLOCK_ROW_GAP + row as f32 * step_y;
        for col in 0..config.grid.cols {
            positions.push(Vec2::new(gap_x + col as f32 * step_x, y));
        }
    }
    positions
}
