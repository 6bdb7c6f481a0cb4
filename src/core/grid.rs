//! 3x3 partition of a raster by its cap insets.
//!
//! ```text
//!   TopLeft    | Top    | TopRight
//!   -----------+--------+------------
//!   Left       | Center | Right
//!   -----------+--------+------------
//!   BottomLeft | Bottom | BottomRight
//! ```
//!
//! Corners keep the inset sizes; the middle column and row absorb whatever
//! width and height remain.
use serde::{Deserialize, Serialize};

use crate::core::insets::CapInsets;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Region {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Region {
    /// Row-major order.
    pub const ALL: [Region; 9] = [
        Region::TopLeft,
        Region::Top,
        Region::TopRight,
        Region::Left,
        Region::Center,
        Region::Right,
        Region::BottomLeft,
        Region::Bottom,
        Region::BottomRight,
    ];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    const fn column(self) -> usize {
        self.index() % 3
    }

    const fn row(self) -> usize {
        self.index() / 3
    }

    pub const fn scales_horizontally(self) -> bool {
        self.column() == 1
    }

    pub const fn scales_vertically(self) -> bool {
        self.row() == 1
    }

    pub const fn is_corner(self) -> bool {
        !self.scales_horizontally() && !self.scales_vertically()
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Region::TopLeft => "top-left",
            Region::Top => "top",
            Region::TopRight => "top-right",
            Region::Left => "left",
            Region::Center => "center",
            Region::Right => "right",
            Region::BottomLeft => "bottom-left",
            Region::Bottom => "bottom",
            Region::BottomRight => "bottom-right",
        };
        write!(f, "{}", s)
    }
}

/// Cell rectangles of a `width`x`height` area cut by `insets`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RegionGrid {
    cells: [Rect; 9],
}

impl RegionGrid {
    /// Insets larger than the area collapse the middle row or column to zero;
    /// run `CapInsets::validate` first when that matters.
    pub fn new(width: usize, height: usize, insets: &CapInsets) -> Self {
        let xs = [0, insets.left, width.saturating_sub(insets.right)];
        let widths = [
            insets.left,
            width.saturating_sub(insets.horizontal()),
            insets.right,
        ];
        let ys = [0, insets.top, height.saturating_sub(insets.bottom)];
        let heights = [
            insets.top,
            height.saturating_sub(insets.vertical()),
            insets.bottom,
        ];

        let cells = Region::ALL.map(|region| {
            let (col, row) = (region.column(), region.row());
            Rect::new(xs[col], ys[row], widths[col], heights[row])
        });
        Self { cells }
    }

    pub fn rect(&self, region: Region) -> Rect {
        self.cells[region.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, Rect)> + '_ {
        Region::ALL.into_iter().zip(self.cells)
    }
}
