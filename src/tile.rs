//! Square tile crops for slicing a source image into an N×N grid.
//!
//! Each tile is a square region of the source, in the same fill order as
//! the grid cells, so tile `i` is the natural content of child `i`.
//!
//! ```
//! use squaregrid::{GridSize, Rect, Size, tile};
//!
//! let tiles: Vec<_> = tile::tiles(Size::new(300, 300), GridSize::new(3).unwrap()).collect();
//! assert_eq!(tiles.len(), 9);
//! assert_eq!(tiles[5].crop, Rect::new(200, 100, 300, 200));
//! ```

use crate::constraint::{Cell, Cells, GridSize, Rect, Size, saturate_i32};

/// One square crop of the source image.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceTile {
    /// Grid cell this tile belongs to.
    pub cell: Cell,
    /// Region of the source, in source pixel coordinates.
    pub crop: Rect,
}

/// Side of each tile: the smaller source axis divided by `N`.
///
/// Any remainder along either axis is left uncovered at the right and bottom.
pub fn tile_side(source: Size, grid: GridSize) -> u32 {
    source.width.min(source.height) / grid.get()
}

/// Iterate the `N²` tile crops of `source` in fill order.
pub fn tiles(source: Size, grid: GridSize) -> Tiles {
    Tiles {
        side: tile_side(source, grid),
        cells: grid.cells(),
    }
}

/// Iterator returned by [`tiles`].
#[derive(Clone, Debug)]
pub struct Tiles {
    side: u32,
    cells: Cells,
}

impl Iterator for Tiles {
    type Item = SourceTile;

    fn next(&mut self) -> Option<SourceTile> {
        let cell = self.cells.next()?;
        let side = i64::from(self.side);
        let x = i64::from(cell.column) * side;
        let y = i64::from(cell.row) * side;
        Some(SourceTile {
            cell,
            crop: Rect::new(
                saturate_i32(x),
                saturate_i32(y),
                saturate_i32(x + side),
                saturate_i32(y + side),
            ),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for Tiles {}
