//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use panekit::commands::Cmd;
use panekit::config::LayoutConfig;
use panekit::messages::Msg;
use panekit::model::{AppModel, CursorShape, PaneContainer, RegionId, Size};
use panekit::theme::Theme;
use panekit::update::update;

/// Container at the reference size: 1000x800, margin 0, viewer minimum 100x100
pub fn reference_container() -> PaneContainer {
    let mut container = PaneContainer::new(Size::new(1000, 800));
    container.set_region_minimum_size(RegionId::Viewer, Size::new(100, 100));
    container
}

/// Model wrapping [`reference_container`], built without touching the user's
/// config or theme directories
pub fn test_model() -> AppModel {
    AppModel {
        container: reference_container(),
        theme: Theme::default(),
        config: LayoutConfig::default(),
        launch_config: LayoutConfig::default(),
        config_path: None,
        pointer: None,
        cursor: CursorShape::Default,
    }
}

pub fn move_to(model: &mut AppModel, x: i32, y: i32) -> Option<Cmd> {
    update(model, Msg::pointer_moved(x, y))
}

pub fn press(model: &mut AppModel, x: i32, y: i32) -> Option<Cmd> {
    update(model, Msg::pointer_pressed(x, y))
}

pub fn release(model: &mut AppModel, x: i32, y: i32) -> Option<Cmd> {
    update(model, Msg::pointer_released(x, y))
}

/// Hover, press, move and release with the primary button
pub fn drag(model: &mut AppModel, from: (i32, i32), to: (i32, i32)) {
    move_to(model, from.0, from.1);
    press(model, from.0, from.1);
    move_to(model, to.0, to.1);
    release(model, to.0, to.1);
}

/// Flatten a command into its leaves
pub fn flatten(cmd: Option<Cmd>) -> Vec<Cmd> {
    let mut out = Vec::new();
    if let Some(cmd) = cmd {
        cmd.for_each(&mut |c| out.push(c));
    }
    out
}
