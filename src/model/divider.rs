//! Dividers - the draggable boundaries between regions
//!
//! A divider owns its length (the size of the region it resizes, measured
//! along its constrained axis), the bounds on that length, and the geometry
//! derived from the centerline the solver places it on:
//!
//! - the **capture rect** (`grab_width` wide) receives pointer input
//! - the **highlight rect** (`highlight_width` wide, centered inside the
//!   capture rect) is the only part that is ever painted
//!
//! Pointer interaction is an explicit state machine driven by
//! [`Divider::handle_event`]. The divider never reaches back into its
//! container: when a drag changes its length it returns
//! [`DividerRequest::Relayout`] and the caller decides what to do.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};
use crate::theme::Color;

/// Default width of the pointer-capture strip
pub const DEFAULT_GRAB_WIDTH: i32 = 10;

/// Default width of the painted highlight strip
pub const DEFAULT_HIGHLIGHT_WIDTH: i32 = 4;

/// Clamp a length into `[min, max]`.
///
/// Bounds are not required to be ordered. When `min > max` the minimum wins,
/// so a divider never drops below the size its region needs even when the
/// container is too small to honour the maximum.
#[inline]
pub fn clamp_length(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Direction of the divider line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// A horizontal line; its length is a height and drags move along y
    Horizontal,
    /// A vertical line; its length is a width and drags move along x
    Vertical,
}

/// Which side of its region the divider sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub fn orientation(&self) -> Orientation {
        match self {
            Edge::Left | Edge::Right => Orientation::Vertical,
            Edge::Top | Edge::Bottom => Orientation::Horizontal,
        }
    }

    /// Whether dragging toward increasing coordinates makes the region bigger
    pub fn grows_with_positive_delta(&self) -> bool {
        matches!(self, Edge::Right | Edge::Bottom)
    }
}

/// Pointer buttons as seen by the layout core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Mouse cursor a divider asks for while hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorShape {
    #[default]
    Default,
    /// Left/right resize (vertical dividers)
    ColResize,
    /// Up/down resize (horizontal dividers)
    RowResize,
}

/// Recorded at primary-button press, consumed by subsequent moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressSnapshot {
    pub length_at_press: i32,
    /// Pointer coordinate along the constrained axis
    pub coordinate_at_press: i32,
}

/// Interaction state of a divider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Hovered,
    Pressed(PressSnapshot),
}

/// Discrete pointer notifications delivered to one divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerEvent {
    Enter,
    Leave,
    Press { button: PointerButton, position: Point },
    Move { position: Point },
    Release { button: PointerButton },
}

/// What a divider needs from its owner after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerRequest {
    /// Highlight state changed; repaint the divider only
    Repaint,
    /// Length changed by a drag; the whole layout must be solved again
    Relayout,
}

/// A resizable (or fixed) boundary between two regions
#[derive(Debug, Clone)]
pub struct Divider {
    edge: Edge,
    orientation: Orientation,
    resizable: bool,
    shown: bool,

    length: i32,
    minimum_length: i32,
    maximum_length: i32,

    grab_width: i32,
    highlight_width: i32,
    highlight_color: Color,

    centerline_start: Point,
    centerline_length: i32,
    capture_rect: Rect,
    highlight_rect: Rect,

    drag_state: DragState,
}

impl Divider {
    pub fn new(edge: Edge, resizable: bool, length: i32, minimum: i32, maximum: i32) -> Self {
        let mut divider = Self {
            edge,
            orientation: edge.orientation(),
            resizable,
            shown: true,
            length: clamp_length(length, minimum, maximum),
            minimum_length: minimum,
            maximum_length: maximum,
            grab_width: DEFAULT_GRAB_WIDTH,
            highlight_width: DEFAULT_HIGHLIGHT_WIDTH,
            highlight_color: Color::TRANSPARENT,
            centerline_start: Point::default(),
            centerline_length: 0,
            capture_rect: Rect::EMPTY,
            highlight_rect: Rect::EMPTY,
            drag_state: DragState::Idle,
        };
        divider.update_geometry();
        divider
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn minimum_length(&self) -> i32 {
        self.minimum_length
    }

    pub fn maximum_length(&self) -> i32 {
        self.maximum_length
    }

    pub fn grab_width(&self) -> i32 {
        self.grab_width
    }

    pub fn highlight_width(&self) -> i32 {
        self.highlight_width
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn centerline(&self) -> (Point, i32) {
        (self.centerline_start, self.centerline_length)
    }

    pub fn drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self.drag_state, DragState::Hovered | DragState::Pressed(_))
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.drag_state, DragState::Pressed(_))
    }

    /// Bounding box used for hit-testing and dragging
    pub fn capture_rect(&self) -> Rect {
        self.capture_rect
    }

    /// Painted sub-area of the capture rect
    pub fn highlight_rect(&self) -> Rect {
        self.highlight_rect
    }

    /// True when the capture rect extends beyond the painted highlight.
    /// Input is still accepted over the whole capture rect.
    pub fn has_mask(&self) -> bool {
        self.grab_width > self.highlight_width
    }

    /// Only shown, resizable dividers take part in hit-testing and painting
    pub fn is_hit_testable(&self) -> bool {
        self.shown && self.resizable
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.is_hit_testable() && self.capture_rect.contains(point)
    }

    pub fn cursor(&self) -> CursorShape {
        if !self.resizable {
            return CursorShape::Default;
        }
        match self.orientation {
            Orientation::Vertical => CursorShape::ColResize,
            Orientation::Horizontal => CursorShape::RowResize,
        }
    }

    /// Strip to paint, if any. Dividers are invisible until hovered.
    pub fn highlight_fill(&self) -> Option<(Rect, Color)> {
        if self.is_hit_testable() && self.is_hovered() && !self.highlight_rect.is_empty() {
            Some((self.highlight_rect, self.highlight_color))
        } else {
            None
        }
    }

    // =========================================================================
    // Setters
    // =========================================================================

    pub fn set_resizable(&mut self, resizable: bool) {
        if self.resizable != resizable {
            self.resizable = resizable;
            if !resizable {
                self.drag_state = DragState::Idle;
            }
            self.update_geometry();
        }
    }

    /// Show or hide the divider along with its region
    pub fn set_shown(&mut self, shown: bool) {
        if self.shown != shown {
            self.shown = shown;
            if !shown {
                self.drag_state = DragState::Idle;
            }
            self.update_geometry();
        }
    }

    /// Store `length` clamped into the current bounds. Returns whether the
    /// stored value changed.
    pub fn set_length(&mut self, length: i32) -> bool {
        let length = clamp_length(length, self.minimum_length, self.maximum_length);
        if self.length != length {
            self.length = length;
            self.update_geometry();
            true
        } else {
            false
        }
    }

    pub fn set_minimum_length(&mut self, min: i32) {
        self.minimum_length = min;
        self.set_length(self.length);
    }

    pub fn set_maximum_length(&mut self, max: i32) {
        self.maximum_length = max;
        self.set_length(self.length);
    }

    /// Minimum first, then maximum. Inverted ranges are not rejected; see
    /// [`clamp_length`] for how they resolve.
    pub fn set_length_range(&mut self, min: i32, max: i32) {
        self.set_minimum_length(min);
        self.set_maximum_length(max);
    }

    /// Floors at zero; a narrower grab strip pulls the highlight down with it
    pub fn set_grab_width(&mut self, width: i32) {
        self.grab_width = width.max(0);
        if self.grab_width < self.highlight_width {
            self.highlight_width = self.grab_width;
        }
        self.update_geometry();
    }

    /// Floors at zero; a wider highlight pushes the grab strip up with it
    pub fn set_highlight_width(&mut self, width: i32) {
        self.highlight_width = width.max(0);
        if self.grab_width < self.highlight_width {
            self.grab_width = self.highlight_width;
        }
        self.update_geometry();
    }

    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    /// Place the divider. For a vertical divider `start` is the top of the
    /// line and `length` its height; for a horizontal one `start` is the
    /// left end and `length` its width.
    pub fn set_geometry_from_centerline(&mut self, start: Point, length: i32) {
        self.centerline_start = start;
        self.centerline_length = length;
        self.update_geometry();
    }

    fn update_geometry(&mut self) {
        if !self.is_hit_testable() {
            self.capture_rect = Rect::EMPTY;
            self.highlight_rect = Rect::EMPTY;
            return;
        }

        let Point { x, y } = self.centerline_start;
        let l = self.centerline_length;
        let gw1 = self.grab_width / 2;
        let hw1 = self.highlight_width / 2;

        match self.orientation {
            Orientation::Vertical => {
                self.capture_rect = Rect::new(x.saturating_sub(gw1), y, self.grab_width, l);
                self.highlight_rect = Rect::new(x.saturating_sub(hw1), y, self.highlight_width, l);
            }
            Orientation::Horizontal => {
                self.capture_rect = Rect::new(x, y.saturating_sub(gw1), l, self.grab_width);
                self.highlight_rect = Rect::new(x, y.saturating_sub(hw1), l, self.highlight_width);
            }
        }
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    fn axis_coordinate(&self, position: Point) -> i32 {
        match self.orientation {
            Orientation::Vertical => position.x,
            Orientation::Horizontal => position.y,
        }
    }

    /// Advance the drag state machine.
    ///
    /// ```text
    /// Idle    --Enter-------------> Hovered
    /// Hovered --Leave-------------> Idle
    /// Hovered --Press(primary)----> Pressed   (snapshot length + coordinate)
    /// Pressed --Move--------------> Pressed   (set_length, ask for relayout)
    /// Pressed --Release(primary)--> Hovered
    /// ```
    ///
    /// Anything else is ignored, as is every event while the divider is not
    /// hit-testable.
    pub fn handle_event(&mut self, event: DividerEvent) -> Option<DividerRequest> {
        if !self.is_hit_testable() {
            return None;
        }

        match (self.drag_state, event) {
            (DragState::Idle, DividerEvent::Enter) => {
                self.drag_state = DragState::Hovered;
                Some(DividerRequest::Repaint)
            }
            (DragState::Hovered, DividerEvent::Leave) => {
                self.drag_state = DragState::Idle;
                Some(DividerRequest::Repaint)
            }
            (
                DragState::Hovered,
                DividerEvent::Press {
                    button: PointerButton::Primary,
                    position,
                },
            ) => {
                let snapshot = PressSnapshot {
                    length_at_press: self.length,
                    coordinate_at_press: self.axis_coordinate(position),
                };
                tracing::debug!(edge = ?self.edge, ?snapshot, "divider drag started");
                self.drag_state = DragState::Pressed(snapshot);
                Some(DividerRequest::Repaint)
            }
            (DragState::Pressed(snapshot), DividerEvent::Move { position }) => {
                let delta = self
                    .axis_coordinate(position)
                    .saturating_sub(snapshot.coordinate_at_press);
                let requested = if self.edge.grows_with_positive_delta() {
                    snapshot.length_at_press.saturating_add(delta)
                } else {
                    snapshot.length_at_press.saturating_sub(delta)
                };
                self.set_length(requested);
                Some(DividerRequest::Relayout)
            }
            (
                DragState::Pressed(_),
                DividerEvent::Release {
                    button: PointerButton::Primary,
                },
            ) => {
                tracing::debug!(edge = ?self.edge, length = self.length, "divider drag ended");
                self.drag_state = DragState::Hovered;
                Some(DividerRequest::Repaint)
            }
            _ => None,
        }
    }
}
