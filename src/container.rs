//! Stateful square grid container driven by a layout host.
//!
//! [`SquareGridLayout`] owns its children and caches the [`LayoutResult`]
//! of the last measurement so the host can call [`measure`] and then
//! [`layout`] as two separate passes.
//!
//! [`measure`]: SquareGridLayout::measure
//! [`layout`]: SquareGridLayout::layout

use alloc::vec::Vec;

use crate::constraint::{
    AxisConstraint, GridSize, Insets, LayoutError, Margins, Padding, Rect, Size, SquareGrid,
};
use crate::plan::LayoutResult;

/// An element placed by the container.
pub trait Child {
    /// Margins honoured when the child is placed. Defaults to none.
    fn margins(&self) -> Margins {
        Insets::ZERO
    }

    /// Force the child to exactly `size`. Its own preferred size is never
    /// consulted.
    fn measure_exact(&mut self, size: Size);

    /// Final rect, relative to the container's origin.
    fn place(&mut self, rect: Rect);
}

impl<C: Child + ?Sized> Child for &mut C {
    fn margins(&self) -> Margins {
        (**self).margins()
    }

    fn measure_exact(&mut self, size: Size) {
        (**self).measure_exact(size)
    }

    fn place(&mut self, rect: Rect) {
        (**self).place(rect)
    }
}

/// A container forcing its children into an N×N grid of equal squares.
///
/// ```
/// use squaregrid::{AxisConstraint, Child, GridSize, Rect, Size, SquareGridLayout};
///
/// #[derive(Default)]
/// struct Tile {
///     rect: Rect,
/// }
///
/// impl Child for Tile {
///     fn measure_exact(&mut self, _size: Size) {}
///     fn place(&mut self, rect: Rect) {
///         self.rect = rect;
///     }
/// }
///
/// let mut grid = SquareGridLayout::new(GridSize::new(2).unwrap());
/// for _ in 0..4 {
///     grid.add_child(Tile::default());
/// }
///
/// let size = grid
///     .measure(AxisConstraint::exact(300), AxisConstraint::exact(200))
///     .unwrap();
/// assert_eq!(size, Size::new(300, 200));
///
/// grid.layout(Rect::new(0, 0, 300, 200));
/// assert_eq!(grid.children()[3].rect, Rect::new(150, 100, 250, 200));
/// ```
#[derive(Clone, Debug)]
pub struct SquareGridLayout<C> {
    grid: SquareGrid,
    children: Vec<C>,
    measured: Option<LayoutResult>,
    layout_requested: bool,
}

impl<C: Child> SquareGridLayout<C> {
    /// Empty container with a `size`×`size` grid and no padding.
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: SquareGrid::new(size),
            children: Vec::new(),
            measured: None,
            layout_requested: true,
        }
    }

    /// Set padding at construction.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.grid = self.grid.padding(padding);
        self
    }

    /// Current grid configuration.
    pub fn grid(&self) -> SquareGrid {
        self.grid
    }

    /// Cells per side.
    pub fn grid_size(&self) -> GridSize {
        self.grid.size
    }

    /// Change the number of cells per side.
    ///
    /// Returns `Ok(true)` when the size changed and a new layout cycle was
    /// requested, `Ok(false)` when `size` equals the current size.
    pub fn set_grid_size(&mut self, size: i32) -> Result<bool, LayoutError> {
        let size = GridSize::new(size)?;
        if size == self.grid.size {
            return Ok(false);
        }
        self.grid.size = size;
        self.request_layout();
        Ok(true)
    }

    /// Current padding.
    pub fn padding(&self) -> Padding {
        self.grid.padding
    }

    /// Change the padding. Requests a layout cycle if it differs.
    pub fn set_padding(&mut self, padding: Padding) {
        if padding != self.grid.padding {
            self.grid.padding = padding;
            self.request_layout();
        }
    }

    /// Append a child. Children past `N²` are kept but never measured or placed.
    pub fn add_child(&mut self, child: C) {
        self.children.push(child);
        self.request_layout();
    }

    /// Remove the child at `index`, shifting later children down one cell.
    pub fn remove_child(&mut self, index: usize) -> Option<C> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        self.request_layout();
        Some(child)
    }

    /// Children in fill order.
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Mutable access to the children. Does not request a layout.
    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    /// Number of children, including any past `N²`.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether a configuration or child change is waiting for a layout cycle.
    pub fn is_layout_requested(&self) -> bool {
        self.layout_requested
    }

    /// Drop the cached measurement and ask for a new layout cycle.
    pub fn request_layout(&mut self) {
        if self.measured.take().is_some() {
            tracing::debug!("square grid measurement invalidated");
        }
        self.layout_requested = true;
    }

    /// Result of the pending measurement, if the container has been measured
    /// since its last change.
    pub fn measured(&self) -> Option<&LayoutResult> {
        self.measured.as_ref()
    }

    /// Measurement pass. Forces every present child among the first `N²`
    /// to its cell size and returns the container's own size.
    pub fn measure(
        &mut self,
        width: AxisConstraint,
        height: AxisConstraint,
    ) -> Result<Size, LayoutError> {
        // A failed measurement must not leave the previous cycle placeable.
        self.measured = None;
        let result = self.grid.compute_layout(width, height)?;
        for (cell, size) in result.cell_sizes(self.children.len()) {
            self.children[cell.index].measure_exact(size);
        }
        tracing::trace!(
            grid = result.grid_size.get(),
            square_side = result.square_side,
            width = result.size.width,
            height = result.size.height,
            axis = ?result.driving_axis,
            "measured square grid"
        );
        self.measured = Some(result);
        Ok(result.size)
    }

    /// Placement pass. Positions each present child inside `bounds` using the
    /// cached measurement and returns how many children were placed.
    ///
    /// Without a measurement since the last change nothing is placed.
    pub fn layout(&mut self, bounds: Rect) -> usize {
        let Some(result) = self.measured else {
            tracing::debug!("square grid layout requested before measure, skipping");
            return 0;
        };
        let mut placed = 0;
        for cell in result.grid_size.cells().take_children(self.children.len()) {
            let child = &mut self.children[cell.index];
            let rect = result.cell_rect(bounds, cell).inset(child.margins());
            child.place(rect);
            placed += 1;
        }
        tracing::trace!(
            placed,
            square_side = result.square_side,
            "placed square grid children"
        );
        self.layout_requested = false;
        placed
    }
}

impl<C: Child> Default for SquareGridLayout<C> {
    fn default() -> Self {
        Self::new(GridSize::ONE)
    }
}

impl<C: Child> Extend<C> for SquareGridLayout<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.children.extend(iter);
        self.request_layout();
    }
}
