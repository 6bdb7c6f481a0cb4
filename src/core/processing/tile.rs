use ndarray::{ArrayView2, ArrayViewMut2, s};

use crate::core::raster::Rgba;

/// Repeat `pattern` across `dst` starting at its top-left corner. The last
/// tile on each axis is clipped to the top-left part of the pattern.
///
/// Returns the number of (possibly partial) tiles written. An empty pattern
/// writes nothing.
pub fn tile_into(pattern: ArrayView2<'_, Rgba>, mut dst: ArrayViewMut2<'_, Rgba>) -> usize {
    let (pattern_rows, pattern_cols) = pattern.dim();
    let (rows, cols) = dst.dim();
    if pattern_rows == 0 || pattern_cols == 0 {
        return 0;
    }

    let mut tiles = 0;
    for y in (0..rows).step_by(pattern_rows) {
        let h = pattern_rows.min(rows - y);
        for x in (0..cols).step_by(pattern_cols) {
            let w = pattern_cols.min(cols - x);
            dst.slice_mut(s![y..y + h, x..x + w])
                .assign(&pattern.slice(s![..h, ..w]));
            tiles += 1;
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    fn px(v: u8) -> Rgba {
        [v, v, v, 255]
    }

    #[test]
    fn exact_multiple_repeats_whole_tiles() {
        let pattern = array![[px(1), px(2)], [px(3), px(4)]];
        let mut dst = Array2::from_elem((4, 6), px(0));
        assert_eq!(tile_into(pattern.view(), dst.view_mut()), 6);
        assert_eq!(dst[[2, 4]], px(1));
        assert_eq!(dst[[3, 5]], px(4));
        assert_eq!(dst[[1, 2]], px(3));
    }

    #[test]
    fn trailing_tile_is_clipped_from_the_pattern_origin() {
        let pattern = array![[px(1), px(2), px(3)]];
        let mut dst = Array2::from_elem((1, 7), px(0));
        assert_eq!(tile_into(pattern.view(), dst.view_mut()), 3);
        let row: Vec<Rgba> = dst.row(0).to_vec();
        assert_eq!(
            row,
            vec![px(1), px(2), px(3), px(1), px(2), px(3), px(1)]
        );
    }

    #[test]
    fn pattern_larger_than_destination_is_cropped() {
        let pattern = Array2::from_shape_fn((5, 5), |(y, x)| px((y * 5 + x) as u8));
        let mut dst = Array2::from_elem((2, 3), px(0));
        assert_eq!(tile_into(pattern.view(), dst.view_mut()), 1);
        assert_eq!(dst, pattern.slice(s![..2, ..3]));
    }

    #[test]
    fn empty_pattern_or_destination_is_a_no_op() {
        let empty = Array2::<Rgba>::from_elem((0, 3), px(9));
        let mut dst = Array2::from_elem((2, 2), px(0));
        assert_eq!(tile_into(empty.view(), dst.view_mut()), 0);
        assert!(dst.iter().all(|&p| p == px(0)));

        let pattern = array![[px(1)]];
        let mut nothing = Array2::from_elem((0, 4), px(0));
        assert_eq!(tile_into(pattern.view(), nothing.view_mut()), 0);
    }
}
