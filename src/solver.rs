//! Layout solver for the fixed four-region, three-divider arrangement
//!
//! ```text
//!  x1        x2                      x3        x4
//!  +---------+-----------------------+---------+ y1
//!  |         |                       |         |
//!  | toolbar |        viewer         |  side   |
//!  |         |                       |  panel  |
//!  |         +-----------------------+         | y2
//!  |         |        console        |         |
//!  +---------+-----------------------+---------+ y3
//! ```
//!
//! Boundaries come from divider lengths, while each divider's maximum length
//! comes from the other boundaries (the viewer must keep its minimum size).
//! That circular dependency is resolved by a fixed number of Gauss-Seidel
//! relaxation passes rather than a closed form.
//!
//! [`solve`] is pure: it reads a [`LayoutInput`] and returns every geometry
//! plus the tightened bounds. The container applies the result.

use serde::Serialize;

use crate::model::divider::clamp_length;
use crate::model::geometry::{Point, Rect, Size};

/// Number of relaxation passes over the three maximum-length updates.
///
/// Two passes settle this topology: the console bound depends only on the
/// container height, and the toolbar/panel bounds each depend on the other's
/// length once. This is tuned for exactly three dividers. Adding a fourth
/// divider means re-deriving the pass count or iterating to a fixed point
/// with a convergence check.
pub const RELAXATION_PASSES: usize = 2;

/// A divider length with its current bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub length: i32,
    pub minimum: i32,
    pub maximum: i32,
}

impl LengthBounds {
    pub fn new(length: i32, minimum: i32, maximum: i32) -> Self {
        Self {
            length: clamp_length(length, minimum, maximum),
            minimum,
            maximum,
        }
    }

    /// Replace the maximum and re-clamp, as `Divider::set_maximum_length` does
    fn tighten(&mut self, maximum: i32) {
        self.maximum = maximum;
        self.length = clamp_length(self.length, self.minimum, maximum);
    }
}

/// Everything the solver reads
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput {
    pub size: Size,
    pub margin: i32,
    pub toolbar_visible: bool,
    pub console_visible: bool,
    pub panel_visible: bool,
    pub toolbar: LengthBounds,
    pub panel: LengthBounds,
    pub console: LengthBounds,
    pub viewer_minimum: Size,
}

/// Region boundary coordinates (see the module diagram)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Boundaries {
    pub x1: i32,
    pub x2: i32,
    pub x3: i32,
    pub x4: i32,
    pub y1: i32,
    pub y2: i32,
    pub y3: i32,
}

/// Solved state of one divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerPlacement {
    /// `(start, length)` of the centerline, `None` when the divider's region
    /// is hidden
    pub centerline: Option<(Point, i32)>,
    pub length: i32,
    pub maximum: i32,
}

/// Everything the solver produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOutput {
    pub boundaries: Boundaries,
    pub toolbar: Rect,
    pub viewer: Rect,
    pub console: Rect,
    pub side_panel: Rect,
    pub toolbar_divider: DividerPlacement,
    pub panel_divider: DividerPlacement,
    pub console_divider: DividerPlacement,
    /// Smallest container size that keeps every visible region at or above
    /// its minimum
    pub minimum_size: Size,
}

fn boundaries(
    input: &LayoutInput,
    toolbar: &LengthBounds,
    panel: &LengthBounds,
    console: &LengthBounds,
) -> Boundaries {
    let m = input.margin;
    let m1 = m / 2;
    let m2 = m - m1;

    let x1 = m1;
    let x4 = input.size.width.saturating_sub(m2);
    let y1 = m1;
    let y3 = input.size.height.saturating_sub(m2);

    let x2 = if input.toolbar_visible {
        x1.saturating_add(m).saturating_add(toolbar.length)
    } else {
        x1
    };
    let x3 = if input.panel_visible {
        x4.saturating_sub(m.saturating_add(panel.length))
    } else {
        x4
    };
    let y2 = if input.console_visible {
        y3.saturating_sub(m.saturating_add(console.length))
    } else {
        y3
    };

    Boundaries {
        x1,
        x2,
        x3,
        x4,
        y1,
        y2,
        y3,
    }
}

/// `end - start - 2m - minimum`, the room left for a divider once the viewer
/// keeps its minimum
fn room(end: i32, start: i32, m: i32, minimum: i32) -> i32 {
    end.saturating_sub(start)
        .saturating_sub(m.saturating_mul(2))
        .saturating_sub(minimum)
}

/// Extent of the span `[start + m2, end - m1)`
fn extent(end: i32, start: i32, m: i32) -> i32 {
    end.saturating_sub(start).saturating_sub(m)
}

/// Solve the layout for one container size.
///
/// Containers smaller than [`LayoutOutput::minimum_size`] yield regions with
/// zero or negative extents. That output is returned unchanged.
pub fn solve(input: &LayoutInput) -> LayoutOutput {
    let m = input.margin;
    let m2 = m - m / 2;
    let min_w = input.viewer_minimum.width;
    let min_h = input.viewer_minimum.height;

    let mut toolbar = input.toolbar;
    let mut panel = input.panel;
    let mut console = input.console;

    for _ in 0..RELAXATION_PASSES {
        let b = boundaries(input, &toolbar, &panel, &console);
        toolbar.tighten(room(b.x3, b.x1, m, min_w));

        let b = boundaries(input, &toolbar, &panel, &console);
        panel.tighten(room(b.x4, b.x2, m, min_w));

        let b = boundaries(input, &toolbar, &panel, &console);
        console.tighten(room(b.y3, b.y1, m, min_h));
    }

    let b = boundaries(input, &toolbar, &panel, &console);
    let Boundaries {
        x1,
        x2,
        x3,
        x4,
        y1,
        y2,
        y3,
    } = b;

    let place = |visible: bool, start: Point, length: i32, bounds: &LengthBounds| {
        DividerPlacement {
            centerline: visible.then_some((start, length)),
            length: bounds.length,
            maximum: bounds.maximum,
        }
    };

    let inset_x1 = x1.saturating_add(m2);
    let inset_x2 = x2.saturating_add(m2);
    let inset_y1 = y1.saturating_add(m2);
    let full_height = extent(y3, y1, m);
    let middle_width = extent(x3, x2, m);

    let toolbar_divider = place(
        input.toolbar_visible,
        Point::new(x2, inset_y1),
        full_height,
        &toolbar,
    );
    let panel_divider = place(
        input.panel_visible,
        Point::new(x3, inset_y1),
        full_height,
        &panel,
    );
    let console_divider = place(
        input.console_visible,
        Point::new(inset_x2, y2),
        middle_width,
        &console,
    );

    let gap = |minimum: i32| m.saturating_add(minimum);
    let mut minimum_width = m.saturating_mul(2).saturating_add(min_w);
    if input.toolbar_visible {
        minimum_width = minimum_width.saturating_add(gap(toolbar.minimum));
    }
    if input.panel_visible {
        minimum_width = minimum_width.saturating_add(gap(panel.minimum));
    }
    let mut minimum_height = m.saturating_mul(2).saturating_add(min_h);
    if input.console_visible {
        minimum_height = minimum_height.saturating_add(gap(console.minimum));
    }

    LayoutOutput {
        boundaries: b,
        toolbar: Rect::new(inset_x1, inset_y1, extent(x2, x1, m), full_height),
        viewer: Rect::new(inset_x2, inset_y1, middle_width, extent(y2, y1, m)),
        console: Rect::new(
            inset_x2,
            y2.saturating_add(m2),
            middle_width,
            extent(y3, y2, m),
        ),
        side_panel: Rect::new(
            x3.saturating_add(m2),
            inset_y1,
            extent(x4, x3, m),
            full_height,
        ),
        toolbar_divider,
        panel_divider,
        console_divider,
        minimum_size: Size::new(minimum_width, minimum_height),
    }
}
