//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{PointerButton, Point, RegionId, Size};

/// Pointer input in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    /// Pointer moved to a position
    Moved(Point),
    /// A button went down
    Pressed(Point, PointerButton),
    /// A button came up
    Released(Point, PointerButton),
    /// Pointer left the window
    Left,
}

/// Layout messages (visibility, margins, sizes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMsg {
    /// The window's inner size changed
    Resized(Size),
    ToggleConsole,
    TogglePanel,
    ToggleToolbar,
    /// Change the gap between regions
    SetMargin(i32),
    /// A region's content reported a new minimum size
    SetRegionMinimumSize(RegionId, Size),
    /// Force a relayout without changing inputs
    Relayout,
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Persist the current layout to the config file
    SaveLayout,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Pointer messages (hover, drag)
    Pointer(PointerMsg),
    /// Layout messages (visibility, resize)
    Layout(LayoutMsg),
    /// App messages (persistence, exit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn pointer_moved(x: i32, y: i32) -> Self {
        Msg::Pointer(PointerMsg::Moved(Point::new(x, y)))
    }

    pub fn pointer_pressed(x: i32, y: i32) -> Self {
        Msg::Pointer(PointerMsg::Pressed(Point::new(x, y), PointerButton::Primary))
    }

    pub fn pointer_released(x: i32, y: i32) -> Self {
        Msg::Pointer(PointerMsg::Released(Point::new(x, y), PointerButton::Primary))
    }

    pub fn resized(width: i32, height: i32) -> Self {
        Msg::Layout(LayoutMsg::Resized(Size::new(width, height)))
    }
}
