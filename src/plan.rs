//! Two-phase layout: the measured [`LayoutResult`] and the placement pass.
//!
//! [`SquareGrid::compute_layout`](crate::SquareGrid::compute_layout) produces
//! a `LayoutResult` carrying the square side explicitly; [`place`] consumes it
//! without redoing the measurement arithmetic.
//!
//! ```
//! use squaregrid::{AxisConstraint, GridSize, Insets, Rect, SquareGrid, place};
//!
//! let layout = SquareGrid::new(GridSize::new(3).unwrap())
//!     .compute_layout(AxisConstraint::exact(100), AxisConstraint::exact(100))
//!     .unwrap();
//!
//! let margins = [Insets::ZERO; 9];
//! let rects: Vec<Rect> = place(Rect::new(0, 0, 100, 100), &layout, &margins)
//!     .map(|p| p.rect)
//!     .collect();
//!
//! assert_eq!(rects[0], Rect::new(0, 0, 33, 33));
//! assert_eq!(rects[8], Rect::new(66, 66, 100, 100));
//! ```

use crate::constraint::{
    Axis, Cell, Cells, GridSize, Insets, Margins, Padding, Rect, Size, saturate_i32,
};

/// Result of the measurement pass, valid for one layout cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutResult {
    /// Container's own measured size.
    pub size: Size,
    /// Side of the square grid in pixels, excluding padding.
    pub square_side: u32,
    /// Grid size the measurement was made for.
    pub grid_size: GridSize,
    /// Container padding the measurement was made with.
    pub padding: Padding,
    /// Axis whose padded span sized the grid.
    pub driving_axis: Axis,
}

impl LayoutResult {
    /// Exact size a child in `cell` is forced to during measurement.
    ///
    /// Margins are not subtracted; they only shrink the placed rect.
    pub fn cell_size(&self, cell: Cell) -> Size {
        Size::new(
            cell_extent(self.square_side, self.grid_size, cell.column),
            cell_extent(self.square_side, self.grid_size, cell.row),
        )
    }

    /// Forced sizes of the first `children` cells, in fill order.
    pub fn cell_sizes(&self, children: usize) -> CellSizes {
        CellSizes {
            layout: *self,
            cells: self.grid_size.cells().take_children(children),
        }
    }

    /// Top-left corner of the square grid centered inside `bounds`.
    ///
    /// `bounds` are the host-assigned edges; the origin is relative to
    /// `bounds.left`/`bounds.top`. Odd slack pixels go to the trailing side.
    pub fn grid_origin(&self, bounds: Rect) -> (i32, i32) {
        let s = i64::from(self.square_side);
        let p = self.padding;
        let x = i64::from(p.left)
            + (i64::from(bounds.right)
                - i64::from(p.right)
                - i64::from(bounds.left)
                - i64::from(p.left)
                - s)
                / 2;
        let y = i64::from(p.top)
            + (i64::from(bounds.bottom)
                - i64::from(p.bottom)
                - i64::from(bounds.top)
                - i64::from(p.top)
                - s)
                / 2;
        (saturate_i32(x), saturate_i32(y))
    }

    /// The square region occupied by the grid inside `bounds`.
    pub fn grid_rect(&self, bounds: Rect) -> Rect {
        let (x, y) = self.grid_origin(bounds);
        let s = i64::from(self.square_side);
        Rect::new(
            x,
            y,
            saturate_i32(i64::from(x) + s),
            saturate_i32(i64::from(y) + s),
        )
    }

    /// Full rect of `cell` inside `bounds`, before child margins.
    pub fn cell_rect(&self, bounds: Rect, cell: Cell) -> Rect {
        cell_rect_at(self.grid_origin(bounds), self.square_side, self.grid_size, cell)
    }

    /// Placement pass. See [`place`].
    pub fn place<'a>(&self, bounds: Rect, margins: &'a [Margins]) -> Placements<'a> {
        place(bounds, self, margins)
    }
}

/// Where one present child ends up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChildPlacement {
    /// Cell the child occupies.
    pub cell: Cell,
    /// Cell rect shrunk by the child's margins.
    pub rect: Rect,
}

/// Placement pass: position each present child inside `bounds`.
///
/// `margins[i]` are the margins of child `i`; the slice length is the number
/// of present children. Children past `N²` are ignored. The grid is centered
/// in `bounds` minus padding, and each cell spans
/// `origin + s*i/N .. origin + s*(i+1)/N` on both axes so cells tile the
/// square exactly.
pub fn place<'a>(bounds: Rect, layout: &LayoutResult, margins: &'a [Margins]) -> Placements<'a> {
    Placements {
        origin: layout.grid_origin(bounds),
        square_side: layout.square_side,
        grid_size: layout.grid_size,
        cells: layout.grid_size.cells().take_children(margins.len()),
        margins,
    }
}

/// Iterator returned by [`place`].
#[derive(Clone, Debug)]
pub struct Placements<'a> {
    origin: (i32, i32),
    square_side: u32,
    grid_size: GridSize,
    cells: Cells,
    margins: &'a [Insets],
}

impl Iterator for Placements<'_> {
    type Item = ChildPlacement;

    fn next(&mut self) -> Option<ChildPlacement> {
        let cell = self.cells.next()?;
        let margins = self.margins.get(cell.index).copied()?;
        let rect = cell_rect_at(self.origin, self.square_side, self.grid_size, cell).inset(margins);
        Some(ChildPlacement { cell, rect })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for Placements<'_> {}

/// Iterator returned by [`LayoutResult::cell_sizes`].
#[derive(Clone, Debug)]
pub struct CellSizes {
    layout: LayoutResult,
    cells: Cells,
}

impl Iterator for CellSizes {
    type Item = (Cell, Size);

    fn next(&mut self) -> Option<(Cell, Size)> {
        let cell = self.cells.next()?;
        Some((cell, self.layout.cell_size(cell)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for CellSizes {}

/// Forced measure extent of cell `index` along one axis: `(span + index) / N`.
///
/// Summed over `index in 0..N` this gives exactly `span`; the `span mod N`
/// extra pixels land on the highest indices. Only meaningful for `index < N`.
pub fn cell_extent(span: u32, grid: GridSize, index: u32) -> u32 {
    debug_assert!(index < grid.get());
    ((u64::from(span) + u64::from(index)) / u64::from(grid.get())) as u32
}

/// Offset of cell boundary `index` from the grid origin: `span * index / N`.
///
/// `cell_edge(0) == 0`, `cell_edge(N) == span`, and the edges are
/// non-decreasing, so consecutive cells share their boundary.
pub fn cell_edge(span: u32, grid: GridSize, index: u32) -> u32 {
    debug_assert!(index <= grid.get());
    (u64::from(span) * u64::from(index) / u64::from(grid.get())) as u32
}

fn cell_rect_at(origin: (i32, i32), side: u32, grid: GridSize, cell: Cell) -> Rect {
    let (x, y) = (i64::from(origin.0), i64::from(origin.1));
    let edge = |i: u32| i64::from(cell_edge(side, grid, i));
    Rect::new(
        saturate_i32(x + edge(cell.column)),
        saturate_i32(y + edge(cell.row)),
        saturate_i32(x + edge(cell.column + 1)),
        saturate_i32(y + edge(cell.row + 1)),
    )
}
