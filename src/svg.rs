//! SVG visualization of a placed square grid.
//!
//! Draws one annotated panel: the container bounds, its padding box, the
//! centered square grid with every cell outlined, and each placed child.
//!
//! # Example
//!
//! ```
//! use squaregrid::{AxisConstraint, GridSize, Insets, Rect, SquareGrid, svg::render_grid_svg};
//!
//! let layout = SquareGrid::new(GridSize::new(3).unwrap())
//!     .padding(Insets::uniform(8))
//!     .compute_layout(AxisConstraint::exact(320), AxisConstraint::exact(240))
//!     .unwrap();
//!
//! let bounds = Rect::new(0, 0, 320, 240);
//! let margins = [Insets::uniform(2); 9];
//! let placements: Vec<_> = layout.place(bounds, &margins).collect();
//!
//! let svg = render_grid_svg(bounds, &layout, &placements);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::constraint::{Rect, saturate_i32};
use crate::plan::{ChildPlacement, LayoutResult};

/// Maximum pixel width of the panel.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height of the panel.
const MAX_PANEL_H: f64 = 300.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of annotation text area below the panel.
const ANNOTATION_H: f64 = 22.0;

/// Render an SVG document of the grid placed inside `bounds`.
///
/// `placements` are the results of the placement pass for `layout`.
pub fn render_grid_svg(
    bounds: Rect,
    layout: &LayoutResult,
    placements: &[ChildPlacement],
) -> String {
    let bw = bounds.width().max(0) as f64;
    let bh = bounds.height().max(0) as f64;
    let scale = if bw == 0.0 || bh == 0.0 {
        1.0
    } else {
        (MAX_PANEL_W / bw).min(MAX_PANEL_H / bh)
    };
    let (pw, ph) = (bw * scale, bh * scale);

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let panel_x = total_w / 2.0 - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    // Container-relative rect → panel coordinates.
    let to_panel = |r: &Rect| {
        (
            panel_x + r.left as f64 * scale,
            panel_y + r.top as f64 * scale,
            r.width().max(0) as f64 * scale,
            r.height().max(0) as f64 * scale,
        )
    };

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 10px; fill: #fff; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .padding { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .cell { fill: #b8d4ee; stroke: #7baed0; stroke-width: 1; }
  .child { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .padding { stroke: #555; }
    .cell { fill: #2a4a65; stroke: #4a7a9e; }
    .child { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let n = layout.grid_size.get();
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN_TOP + 14.0,
        escape_xml(&format!("Grid {n}×{n}  {}×{}", bw as u32, bh as u32))
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    let local = Rect::new(0, 0, saturate_i32(bounds.width()), saturate_i32(bounds.height()));
    let (x, y, w, h) = to_panel(&local.inset(layout.padding));
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="padding"/>"#
    ));
    svg.push('\n');

    for cell in layout.grid_size.cells() {
        let (x, y, w, h) = to_panel(&layout.cell_rect(bounds, cell));
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="cell"/>"#
        ));
        svg.push('\n');
    }

    for placement in placements {
        let (x, y, w, h) = to_panel(&placement.rect);
        svg.push_str(&format!(
            r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" class="child" rx="1"/>"#
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index" text-anchor="middle">{}</text>"#,
            x + w / 2.0,
            y + h / 2.0 + 4.0,
            placement.cell.index
        ));
        svg.push('\n');
    }

    let annotation = format!(
        "square {} via {:?}, {} placed",
        layout.square_side,
        layout.driving_axis,
        placements.len()
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        panel_y + ph + 14.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
