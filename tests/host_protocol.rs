//! End-to-end host protocol: tile a source image, hand the tiles to a
//! container as children, and run measure then layout cycles against it.

#![cfg(feature = "alloc")]

use squaregrid::*;

/// Child that records what the container told it.
#[derive(Clone, Debug, PartialEq)]
struct ImageTile {
    source: SourceTile,
    margins: Insets,
    measured: Vec<Size>,
    placed: Vec<Rect>,
}

impl ImageTile {
    fn new(source: SourceTile) -> Self {
        Self {
            source,
            margins: Insets::uniform(4),
            measured: Vec::new(),
            placed: Vec::new(),
        }
    }
}

impl Child for ImageTile {
    fn margins(&self) -> Margins {
        self.margins
    }

    fn measure_exact(&mut self, size: Size) {
        self.measured.push(size);
    }

    fn place(&mut self, rect: Rect) {
        self.placed.push(rect);
    }
}

fn tiled_container(source: Size, n: i32) -> SquareGridLayout<ImageTile> {
    let grid = GridSize::new(n).unwrap();
    let mut container = SquareGridLayout::new(grid);
    container.extend(tiles(source, grid).map(ImageTile::new));
    container
}

#[test]
fn tiles_land_in_matching_cells() {
    let mut c = tiled_container(Size::new(300, 300), 3);
    let size = c
        .measure(AxisConstraint::exact(480), AxisConstraint::exact(320))
        .unwrap();
    assert_eq!(size, Size::new(480, 320));
    assert_eq!(c.layout(Rect::new(0, 0, 480, 320)), 9);

    for tile in c.children() {
        let cell = tile.source.cell;
        let placed = tile.placed[0];
        // 320 square centered in 480: origin (80, 0); edges 0, 106, 213, 320.
        let edges = [0, 106, 213, 320];
        let expected = Rect::new(
            80 + edges[cell.column as usize],
            edges[cell.row as usize],
            80 + edges[cell.column as usize + 1],
            edges[cell.row as usize + 1],
        )
        .inset(Insets::uniform(4));
        assert_eq!(placed, expected, "tile {}", cell.index);
    }
}

#[test]
fn forced_sizes_ignore_preferred_size_and_margins() {
    let mut c = tiled_container(Size::new(300, 300), 3);
    c.measure(AxisConstraint::at_most(100), AxisConstraint::at_most(400))
        .unwrap();
    let widths: Vec<u32> = c.children()[..3].iter().map(|t| t.measured[0].width).collect();
    assert_eq!(widths, [33, 33, 34]);
    let heights: Vec<u32> = c
        .children()
        .iter()
        .step_by(3)
        .map(|t| t.measured[0].height)
        .collect();
    assert_eq!(heights, [33, 33, 34]);
}

#[test]
fn wrap_content_height_from_width() {
    let mut c = tiled_container(Size::new(90, 90), 3).with_padding(Insets::new(6, 2, 6, 8));
    let size = c
        .measure(AxisConstraint::exact(312), AxisConstraint::unspecified())
        .unwrap();
    assert_eq!(c.measured().unwrap().square_side, 300);
    assert_eq!(size, Size::new(312, 310));
    c.layout(Rect::from_size(size));
    assert_eq!(c.children()[0].placed[0], Rect::new(10, 6, 102, 98));
    assert_eq!(c.children()[8].placed[0], Rect::new(210, 206, 302, 298));
}

#[test]
fn grid_size_change_runs_fresh_cycle() {
    let mut c = tiled_container(Size::new(300, 300), 3);
    c.measure(AxisConstraint::exact(90), AxisConstraint::exact(90))
        .unwrap();
    c.layout(Rect::new(0, 0, 90, 90));

    assert_eq!(c.set_grid_size(3), Ok(false));
    assert!(!c.is_layout_requested());

    assert_eq!(c.set_grid_size(2), Ok(true));
    assert!(c.is_layout_requested());
    // Stale cycle must not be reused.
    assert_eq!(c.layout(Rect::new(0, 0, 90, 90)), 0);

    c.measure(AxisConstraint::exact(90), AxisConstraint::exact(90))
        .unwrap();
    assert_eq!(c.layout(Rect::new(0, 0, 90, 90)), 4);
    // Only the first four tiles were measured and placed a second time.
    assert_eq!(c.children()[3].placed.len(), 2);
    assert_eq!(c.children()[4].placed.len(), 1);
    assert_eq!(c.children()[3].placed[1], Rect::new(49, 49, 86, 86));
}

#[test]
fn partial_grid_leaves_cells_empty() {
    let mut c = tiled_container(Size::new(300, 300), 3);
    for _ in 0..4 {
        c.remove_child(c.child_count() - 1);
    }
    c.measure(AxisConstraint::exact(90), AxisConstraint::exact(90))
        .unwrap();
    assert_eq!(c.layout(Rect::new(0, 0, 90, 90)), 5);
    let placed: Vec<Rect> = c.children().iter().map(|t| t.placed[0]).collect();
    assert_eq!(placed[4], Rect::new(34, 34, 56, 56));
}

#[test]
fn unconstrained_measure_fails() {
    let mut c = tiled_container(Size::new(300, 300), 3);
    let err = c
        .measure(AxisConstraint::unspecified(), AxisConstraint::unspecified())
        .unwrap_err();
    assert_eq!(err, LayoutError::Unconstrained);
    assert!(c.children().iter().all(|t| t.measured.is_empty()));
}

#[cfg(feature = "serde")]
mod serde_config {
    use super::*;

    #[test]
    fn grid_config_round_trips() {
        let grid = SquareGrid::new(GridSize::new(3).unwrap()).padding(Insets::new(1, 2, 3, 4));
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(
            json,
            r#"{"size":3,"padding":{"left":1,"top":2,"right":3,"bottom":4}}"#
        );
        let back: SquareGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn grid_size_validated_on_deserialize() {
        assert!(serde_json::from_str::<GridSize>("0").is_err());
        assert!(serde_json::from_str::<GridSize>("-4").is_err());
        assert_eq!(serde_json::from_str::<GridSize>("5").unwrap().get(), 5);
    }

    #[test]
    fn constraint_uses_variant_names() {
        let json = serde_json::to_string(&AxisConstraint::at_most(40)).unwrap();
        assert_eq!(json, r#"{"mode":"AtMost","size":40}"#);
    }
}
