//! Square grid container layout: N×N equal cells fit to the more constrained axis.
//!
//! Pure geometry with no pixel operations, `no_std` compatible. The host-facing
//! container needs the `alloc` feature.
//!
//! # Modules
//!
//! - [`constraint`]: Axis constraints, insets, grid size and the measurement pass
//! - [`plan`]: Measured layout result and the placement pass
//! - [`container`]: Stateful container running both passes over its children
//! - [`tile`]: Square source crops feeding the grid cells
//! - [`svg`]: SVG rendering of a placed grid (feature `svg`)
//!
//! # Example
//!
//! ```
//! use squaregrid::{AxisConstraint, GridSize, Insets, Rect, Size, SquareGrid};
//!
//! let grid = SquareGrid::new(GridSize::new(3).unwrap());
//! let layout = grid
//!     .compute_layout(AxisConstraint::exact(300), AxisConstraint::exact(200))
//!     .unwrap();
//! assert_eq!(layout.size, Size::new(300, 200));
//!
//! let margins = [Insets::ZERO; 9];
//! let first = layout.place(Rect::new(0, 0, 300, 200), &margins).next().unwrap();
//! assert_eq!(first.rect, Rect::new(50, 0, 116, 66));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod constraint;
#[cfg(feature = "alloc")]
pub mod container;
pub mod plan;
#[cfg(feature = "svg")]
pub mod svg;
pub mod tile;

// Re-exports: core types from constraint module
pub use constraint::{
    Axis, AxisConstraint, Cell, Cells, GridSize, Insets, LayoutError, Margins, MeasureMode,
    Padding, Rect, Size, SquareGrid,
};
#[cfg(feature = "alloc")]
pub use container::{Child, SquareGridLayout};
pub use plan::{ChildPlacement, LayoutResult, Placements, cell_edge, cell_extent, place};
pub use tile::{SourceTile, tiles};
