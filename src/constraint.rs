//! Axis constraints, insets and the measurement pass of the square grid.
//!
//! Pure geometry with no allocation, `no_std` compatible. The measurement pass
//! picks the more constrained axis, sizes an N×N square grid to it and
//! reports the container's own size. Its product, a [`LayoutResult`], is
//! consumed by the placement pass in [`crate::plan`].
//!
//! # Example
//!
//! ```
//! use squaregrid::{AxisConstraint, GridSize, Insets, Size, SquareGrid};
//!
//! let layout = SquareGrid::new(GridSize::new(3).unwrap())
//!     .padding(Insets::uniform(10))
//!     .compute_layout(AxisConstraint::unspecified(), AxisConstraint::exact(150))
//!     .unwrap();
//!
//! assert_eq!(layout.square_side, 130);
//! assert_eq!(layout.size, Size::new(150, 150));
//! ```

use core::num::NonZeroU32;

use crate::plan::LayoutResult;

/// How the host constrains one axis of the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// The container must be exactly the given size.
    Exact,
    /// The container may be at most the given size.
    AtMost,
    /// No constraint; the size is ignored.
    #[default]
    Unspecified,
}

/// A `(mode, size)` constraint on one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisConstraint {
    pub mode: MeasureMode,
    pub size: u32,
}

impl AxisConstraint {
    /// Create a constraint from its parts.
    pub const fn new(mode: MeasureMode, size: u32) -> Self {
        Self { mode, size }
    }

    /// The axis must be exactly `size` pixels.
    pub const fn exact(size: u32) -> Self {
        Self::new(MeasureMode::Exact, size)
    }

    /// The axis may be at most `size` pixels.
    pub const fn at_most(size: u32) -> Self {
        Self::new(MeasureMode::AtMost, size)
    }

    /// The axis is unconstrained.
    pub const fn unspecified() -> Self {
        Self::new(MeasureMode::Unspecified, 0)
    }

    /// Whether the host placed any bound on this axis.
    pub const fn is_specified(&self) -> bool {
        !matches!(self.mode, MeasureMode::Unspecified)
    }
}

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Width.
    Horizontal,
    /// Height.
    Vertical,
}

/// Edge insets in pixels. Used both for container padding and child margins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Container padding, applied before the grid is allocated.
pub type Padding = Insets;

/// Child margins, honoured only when the child is placed.
pub type Margins = Insets;

impl Insets {
    /// No insets on any edge.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets in left, top, right, bottom order.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every edge.
    pub const fn uniform(inset: u32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// `left + right`.
    pub const fn horizontal(&self) -> u64 {
        self.left as u64 + self.right as u64
    }

    /// `top + bottom`.
    pub const fn vertical(&self) -> u64 {
        self.top as u64 + self.bottom as u64
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle given by its edges, in pixels relative to the
/// container's own origin.
///
/// Edges are signed: a grid centered in bounds smaller than itself starts at
/// a negative offset, and margins larger than a cell leave `right < left`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rect from its edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rect at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, saturate_i32(size.width.into()), saturate_i32(size.height.into()))
    }

    /// `right - left`. Negative when the rect is inverted.
    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// `bottom - top`. Negative when the rect is inverted.
    pub const fn height(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Shrink every edge inward by `insets`.
    pub fn inset(self, insets: Insets) -> Self {
        Self {
            left: saturate_i32(i64::from(self.left) + i64::from(insets.left)),
            top: saturate_i32(i64::from(self.top) + i64::from(insets.top)),
            right: saturate_i32(i64::from(self.right) - i64::from(insets.right)),
            bottom: saturate_i32(i64::from(self.bottom) - i64::from(insets.bottom)),
        }
    }

    /// Whether `other` lies entirely inside this rect.
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

/// Number of rows (and columns) of the grid. Always at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct GridSize(NonZeroU32);

impl GridSize {
    /// A 1×1 grid.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Validate a grid size. Non-positive values are rejected.
    pub const fn new(size: i32) -> Result<Self, LayoutError> {
        if size <= 0 {
            return Err(LayoutError::InvalidGridSize { size });
        }
        match NonZeroU32::new(size as u32) {
            Some(n) => Ok(Self(n)),
            None => Err(LayoutError::InvalidGridSize { size }),
        }
    }

    /// Cells per side.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Total number of cells, `N²`. Saturates on targets where it overflows `usize`.
    pub const fn cell_count(self) -> usize {
        (self.get() as usize).saturating_mul(self.get() as usize)
    }

    /// Iterate over all `N²` cells in fill order.
    pub const fn cells(self) -> Cells {
        Cells {
            grid: self,
            next: 0,
            end: self.cell_count(),
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<i32> for GridSize {
    type Error = LayoutError;

    fn try_from(size: i32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for i32 {
    fn from(size: GridSize) -> Self {
        // Only constructed from positive i32 values.
        size.get() as i32
    }
}

/// One square of the grid.
///
/// Cells fill row-major: `index = row * N + column`. `column` runs along
/// the horizontal axis and `row` along the vertical one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Child index this cell is assigned to.
    pub index: usize,
    /// Horizontal position, `0..N`.
    pub column: u32,
    /// Vertical position, `0..N`.
    pub row: u32,
}

impl Cell {
    /// The cell assigned to child `index`, or `None` past the last cell.
    pub const fn at(grid: GridSize, index: usize) -> Option<Self> {
        if index >= grid.cell_count() {
            return None;
        }
        let n = grid.get() as usize;
        Some(Self {
            index,
            column: (index % n) as u32,
            row: (index / n) as u32,
        })
    }
}

/// Iterator over grid cells in fill order. See [`GridSize::cells`].
#[derive(Clone, Debug)]
pub struct Cells {
    grid: GridSize,
    next: usize,
    end: usize,
}

impl Cells {
    /// Stop after the first `count` cells.
    pub fn take_children(mut self, count: usize) -> Self {
        self.end = self.end.min(self.next.saturating_add(count));
        self
    }
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.end {
            return None;
        }
        let cell = Cell::at(self.grid, self.next)?;
        self.next += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Cells {}

/// Square grid configuration: grid size plus container padding.
///
/// ```
/// use squaregrid::{AxisConstraint, Axis, GridSize, Size, SquareGrid};
///
/// let layout = SquareGrid::new(GridSize::new(3).unwrap())
///     .compute_layout(AxisConstraint::exact(300), AxisConstraint::exact(200))
///     .unwrap();
///
/// assert_eq!(layout.driving_axis, Axis::Vertical);
/// assert_eq!(layout.square_side, 200);
/// assert_eq!(layout.size, Size::new(300, 200));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareGrid {
    pub size: GridSize,
    pub padding: Padding,
}

impl SquareGrid {
    /// Grid of `size`×`size` cells with no padding.
    pub const fn new(size: GridSize) -> Self {
        Self {
            size,
            padding: Insets::ZERO,
        }
    }

    /// Set container padding.
    pub const fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Measurement pass: size the square grid and the container itself.
    ///
    /// The grid is sized to the padded span of the driving axis: the only
    /// specified axis, or the smaller padded span when both are specified
    /// (ties go to width). A padded span made negative by oversized padding
    /// is clamped to zero for the grid, while the container's own size on a
    /// non-`Exact` axis is that span plus the axis padding.
    pub fn compute_layout(
        &self,
        width: AxisConstraint,
        height: AxisConstraint,
    ) -> Result<LayoutResult, LayoutError> {
        let pw = self.padding.horizontal() as i64;
        let ph = self.padding.vertical() as i64;
        let available_w = i64::from(width.size) - pw;
        let available_h = i64::from(height.size) - ph;

        let (driving_axis, span) = match (width.is_specified(), height.is_specified()) {
            (false, false) => return Err(LayoutError::Unconstrained),
            (false, true) => (Axis::Vertical, available_h),
            (true, false) => (Axis::Horizontal, available_w),
            (true, true) if available_w <= available_h => (Axis::Horizontal, available_w),
            (true, true) => (Axis::Vertical, available_h),
        };

        Ok(LayoutResult {
            size: Size::new(own_extent(width, span, pw), own_extent(height, span, ph)),
            square_side: clamp_u32(span),
            grid_size: self.size,
            padding: self.padding,
            driving_axis,
        })
    }
}

/// Layout computation error. Both variants are configuration errors
/// surfaced synchronously to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LayoutError {
    /// Grid size was zero or negative.
    #[error("grid size must be positive, got {size}")]
    InvalidGridSize { size: i32 },
    /// Both axis constraints were [`MeasureMode::Unspecified`].
    #[error("layout must be constrained on at least one axis")]
    Unconstrained,
}

impl LayoutError {
    /// Whether the error stems from invalid configuration. Currently every
    /// variant does.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidGridSize { .. } | Self::Unconstrained)
    }
}

/// Own size on one axis: the exact size when forced, else the square span
/// plus this axis's padding.
fn own_extent(constraint: AxisConstraint, span: i64, padding: i64) -> u32 {
    match constraint.mode {
        MeasureMode::Exact => constraint.size,
        MeasureMode::AtMost | MeasureMode::Unspecified => clamp_u32(span + padding),
    }
}

pub(crate) fn clamp_u32(v: i64) -> u32 {
    v.clamp(0, i64::from(u32::MAX)) as u32
}

pub(crate) fn saturate_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn grid(n: i32) -> SquareGrid {
        SquareGrid::new(GridSize::new(n).unwrap())
    }

    // ── GridSize ────────────────────────────────────────────────────────

    #[test]
    fn grid_size_rejects_non_positive() {
        assert_eq!(
            GridSize::new(0),
            Err(LayoutError::InvalidGridSize { size: 0 })
        );
        assert_eq!(
            GridSize::new(-3),
            Err(LayoutError::InvalidGridSize { size: -3 })
        );
        assert_eq!(GridSize::new(1).unwrap(), GridSize::ONE);
        assert_eq!(GridSize::new(i32::MAX).unwrap().get(), i32::MAX as u32);
    }

    #[test]
    fn grid_size_round_trips_through_i32() {
        let size = GridSize::try_from(4).unwrap();
        assert_eq!(i32::from(size), 4);
        assert!(GridSize::try_from(0).is_err());
    }

    #[test]
    fn cells_fill_row_major() {
        let cells: Vec<Cell> = GridSize::new(3).unwrap().cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[1], Cell { index: 1, column: 1, row: 0 });
        assert_eq!(cells[3], Cell { index: 3, column: 0, row: 1 });
        assert_eq!(cells[8], Cell { index: 8, column: 2, row: 2 });
    }

    #[test]
    fn cells_take_children_caps_iteration() {
        let n = GridSize::new(3).unwrap();
        assert_eq!(n.cells().take_children(4).count(), 4);
        assert_eq!(n.cells().take_children(20).count(), 9);
        assert_eq!(n.cells().take_children(0).len(), 0);
    }

    #[test]
    fn cell_at_past_end_is_none() {
        let n = GridSize::new(2).unwrap();
        assert!(Cell::at(n, 3).is_some());
        assert!(Cell::at(n, 4).is_none());
    }

    // ── Rect / Insets ───────────────────────────────────────────────────

    #[test]
    fn rect_inset_shrinks_each_edge() {
        let r = Rect::new(10, 20, 110, 220).inset(Insets::new(1, 2, 3, 4));
        assert_eq!(r, Rect::new(11, 22, 107, 216));
        assert_eq!(r.width(), 96);
        assert_eq!(r.height(), 194);
    }

    #[test]
    fn rect_inset_can_invert() {
        let r = Rect::new(0, 0, 4, 4).inset(Insets::uniform(3));
        assert_eq!(r, Rect::new(3, 3, 1, 1));
        assert_eq!(r.width(), -2);
    }

    #[test]
    fn insets_sum_without_overflow() {
        let i = Insets::uniform(u32::MAX);
        assert_eq!(i.horizontal(), 2 * u32::MAX as u64);
        assert_eq!(i.vertical(), 2 * u32::MAX as u64);
    }

    // ── compute_layout ──────────────────────────────────────────────────

    #[test]
    fn both_unspecified_is_rejected() {
        let err = grid(3)
            .compute_layout(AxisConstraint::unspecified(), AxisConstraint::unspecified())
            .unwrap_err();
        assert_eq!(err, LayoutError::Unconstrained);
        assert!(err.is_configuration());
    }

    #[test]
    fn both_exact_drives_off_smaller_axis() {
        let l = grid(3)
            .compute_layout(AxisConstraint::exact(300), AxisConstraint::exact(200))
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Vertical);
        assert_eq!(l.square_side, 200);
        assert_eq!(l.size, Size::new(300, 200));
    }

    #[test]
    fn width_unspecified_drives_off_height() {
        let l = grid(3)
            .padding(Insets::uniform(10))
            .compute_layout(AxisConstraint::unspecified(), AxisConstraint::exact(150))
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Vertical);
        assert_eq!(l.square_side, 130);
        assert_eq!(l.size, Size::new(150, 150));
    }

    #[test]
    fn height_unspecified_drives_off_width() {
        let l = grid(2)
            .padding(Insets::new(5, 1, 5, 3))
            .compute_layout(AxisConstraint::at_most(110), AxisConstraint::unspecified())
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Horizontal);
        assert_eq!(l.square_side, 100);
        assert_eq!(l.size, Size::new(110, 104));
    }

    #[test]
    fn tie_goes_to_width() {
        let l = grid(3)
            .padding(Insets::new(0, 10, 0, 10))
            .compute_layout(AxisConstraint::at_most(100), AxisConstraint::at_most(120))
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Horizontal);
        assert_eq!(l.square_side, 100);
        assert_eq!(l.size, Size::new(100, 120));
    }

    #[test]
    fn padding_compared_on_padded_span() {
        // Raw width is smaller, but heavy vertical padding makes height drive.
        let l = grid(3)
            .padding(Insets::new(0, 60, 0, 60))
            .compute_layout(AxisConstraint::at_most(200), AxisConstraint::at_most(250))
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Vertical);
        assert_eq!(l.square_side, 130);
        assert_eq!(l.size, Size::new(130, 250));
    }

    #[test]
    fn at_most_wraps_tightly() {
        let l = grid(4)
            .compute_layout(AxisConstraint::at_most(500), AxisConstraint::exact(80))
            .unwrap();
        assert_eq!(l.square_side, 80);
        assert_eq!(l.size, Size::new(80, 80));
    }

    #[test]
    fn oversized_padding_clamps_square_side() {
        let l = grid(3)
            .padding(Insets::uniform(40))
            .compute_layout(AxisConstraint::exact(50), AxisConstraint::at_most(60))
            .unwrap();
        assert_eq!(l.driving_axis, Axis::Horizontal);
        assert_eq!(l.square_side, 0);
        // Exact width kept; height wraps span (-30) plus padding (80).
        assert_eq!(l.size, Size::new(50, 50));
    }

    #[test]
    fn own_size_never_negative() {
        let l = grid(2)
            .padding(Insets::new(100, 0, 100, 0))
            .compute_layout(AxisConstraint::at_most(10), AxisConstraint::unspecified())
            .unwrap();
        assert_eq!(l.square_side, 0);
        assert_eq!(l.size, Size::new(10, 0));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LayoutError::InvalidGridSize { size: -1 }.to_string(),
            "grid size must be positive, got -1"
        );
        assert_eq!(
            LayoutError::Unconstrained.to_string(),
            "layout must be constrained on at least one axis"
        );
    }
}
