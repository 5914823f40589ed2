//! Mirror fold — partial reflection of cell coordinates across the midlines.
//!
//! A single `mirror` control in `[0, 1]` runs a three-stage schedule over the
//! horizontal (`mx`) and vertical (`my`) fold amounts:
//!
//! | mirror      | mx            | my           |
//! |-------------|---------------|--------------|
//! | 0 → 1/3     | 0 → 1         | 0            |
//! | 1/3 → 2/3   | 1 → 0         | 0 → 1        |
//! | 2/3 → 1     | 0 → 1         | 1            |

const THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Horizontal and vertical fold amounts for a mirror control value.
pub fn fold_amounts(mirror: f64) -> (f64, f64) {
    let (mx, my) = if mirror <= THIRD {
        (mirror * 3.0, 0.0)
    } else if mirror <= TWO_THIRDS {
        let t = (mirror - THIRD) * 3.0;
        (1.0 - t, t)
    } else {
        ((mirror - TWO_THIRDS) * 3.0, 1.0)
    };
    (mx.clamp(0.0, 1.0), my.clamp(0.0, 1.0))
}

/// Fold a cell coordinate. Only cells at or past the midline move; they
/// slide toward their mirror image by the fold amount.
pub fn fold(col: usize, row: usize, grid_x: usize, grid_y: usize, mirror: f64) -> (f64, f64) {
    let (mx, my) = fold_amounts(mirror);
    (fold_axis(col, grid_x, mx), fold_axis(row, grid_y, my))
}

fn fold_axis(index: usize, size: usize, amount: f64) -> f64 {
    let i = index as f64;
    let n = size as f64;
    if amount > 0.0 && i >= n / 2.0 {
        let mirrored = n - 1.0 - i;
        i + (mirrored - i) * amount
    } else {
        i
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_identity() {
        for col in 0..9 {
            for row in 0..7 {
                assert_eq!(fold(col, row, 9, 7, 0.0), (col as f64, row as f64));
            }
        }
    }

    #[test]
    fn schedule_stages() {
        assert_eq!(fold_amounts(0.0), (0.0, 0.0));
        let (mx, my) = fold_amounts(THIRD);
        assert!((mx - 1.0).abs() < 1e-12 && my == 0.0);
        let (mx, my) = fold_amounts(0.5);
        assert!((mx - 0.5).abs() < 1e-12 && (my - 0.5).abs() < 1e-12);
        let (mx, my) = fold_amounts(TWO_THIRDS);
        assert!(mx.abs() < 1e-12 && (my - 1.0).abs() < 1e-12);
        assert_eq!(fold_amounts(1.0).1, 1.0);
    }

    #[test]
    fn full_mirror_folds_rows_past_midline() {
        let (grid_x, grid_y) = (8, 6);
        for row in 0..grid_y {
            let (_, folded) = fold(0, row, grid_x, grid_y, 1.0);
            if row >= grid_y / 2 {
                assert_eq!(folded, (grid_y - 1 - row) as f64, "row {row}");
            } else {
                assert_eq!(folded, row as f64);
            }
        }
    }

    #[test]
    fn full_horizontal_fold_at_one_third() {
        let (folded, _) = fold(6, 0, 8, 8, THIRD);
        assert!((folded - 1.0).abs() < 1e-12);
        assert_eq!(fold(2, 0, 8, 8, THIRD).0, 2.0);
    }

    #[test]
    fn partial_fold_interpolates() {
        // mx = 0.5 at mirror 1/6
        let (folded, _) = fold(7, 0, 8, 8, 1.0 / 6.0);
        assert!((folded - 3.5).abs() < 1e-12, "got {folded}");
    }

    #[test]
    fn odd_sizes_fold_from_the_middle_cell() {
        // 5 columns: midline 2.5, so column 2 stays and 3 maps to 1
        assert_eq!(fold(2, 0, 5, 5, THIRD).0, 2.0);
        assert!((fold(3, 0, 5, 5, THIRD).0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_mirror_is_clamped() {
        let (mx, my) = fold_amounts(4.0);
        assert_eq!((mx, my), (1.0, 1.0));
        assert_eq!(fold_amounts(-1.0), (0.0, 0.0));
    }
}
