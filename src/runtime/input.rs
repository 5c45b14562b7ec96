//! Keyboard and mouse mapping from winit events to messages

use winit::dpi::PhysicalPosition;
use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};
use winit::window::CursorIcon;

use panekit::messages::{AppMsg, LayoutMsg, Msg};
use panekit::model::{CursorShape, Point, PointerButton};

/// Map a pressed key to a message
///
/// `command` is Ctrl on Linux/Windows and Cmd on macOS.
pub fn key_to_msg(key: &Key, command: bool) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::F1) => Some(Msg::Layout(LayoutMsg::ToggleToolbar)),
        Key::Named(NamedKey::F2) => Some(Msg::Layout(LayoutMsg::ToggleConsole)),
        Key::Named(NamedKey::F3) => Some(Msg::Layout(LayoutMsg::TogglePanel)),
        Key::Named(NamedKey::Escape) => Some(Msg::App(AppMsg::Quit)),
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => {
            Some(Msg::App(AppMsg::SaveLayout))
        }
        _ => None,
    }
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Physical pixels map 1:1 onto container coordinates
pub fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x.floor() as i32, position.y.floor() as i32)
}

pub fn cursor_icon(shape: CursorShape) -> CursorIcon {
    match shape {
        CursorShape::Default => CursorIcon::Default,
        CursorShape::ColResize => CursorIcon::ColResize,
        CursorShape::RowResize => CursorIcon::RowResize,
    }
}
