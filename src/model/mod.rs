//! Application model - the complete state of the layout
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod container;
pub mod divider;
pub mod geometry;
pub mod region;

pub use container::{
    DividerId, PaneContainer, CONSOLE_LENGTH, CONSOLE_MINIMUM_LENGTH, PANEL_LENGTH, SIZE_HINT,
    TOOLBAR_LENGTH,
};
pub use divider::{
    clamp_length, CursorShape, Divider, DividerEvent, DividerRequest, DragState, Edge,
    Orientation, PointerButton, PressSnapshot, DEFAULT_GRAB_WIDTH, DEFAULT_HIGHLIGHT_WIDTH,
};
pub use geometry::{Point, Rect, Size};
pub use region::{Region, RegionId};

use std::path::PathBuf;

use crate::config::LayoutConfig;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The four regions and three dividers
    pub container: PaneContainer,
    /// Theme for colors
    pub theme: Theme,
    /// Layout configuration as stored on disk
    pub config: LayoutConfig,
    /// Layout the session started from (stored config plus command-line
    /// overrides), advanced on every save
    pub launch_config: LayoutConfig,
    /// Where `config` is saved; `None` means the default config file
    pub config_path: Option<PathBuf>,
    /// Last pointer position inside the window
    pub pointer: Option<Point>,
    /// Cursor shape last requested from the window
    pub cursor: CursorShape,
}

impl AppModel {
    /// Create a model whose container fills `config.window`
    pub fn new(config: LayoutConfig, config_path: Option<PathBuf>) -> Self {
        Self::with_overrides(config.clone(), config, config_path)
    }

    /// Create a model laid out from `launch`, while saves merge into the
    /// stored `config`
    pub fn with_overrides(
        config: LayoutConfig,
        launch: LayoutConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        let theme = load_theme(&launch.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                launch.theme,
                e
            );
            Theme::default()
        });

        let mut container = launch.build_container(launch.window);
        for divider in container.dividers_mut() {
            divider.set_highlight_color(theme.divider_highlight);
        }

        Self {
            container,
            theme,
            config,
            launch_config: launch,
            config_path,
            pointer: None,
            cursor: CursorShape::Default,
        }
    }

    /// Window dimensions as the platform sees them
    pub fn window_size(&self) -> (u32, u32) {
        let size = self.container.size();
        (size.width.max(0) as u32, size.height.max(0) as u32)
    }

    /// Merge what changed during the session into the config and write it out
    pub fn save_layout(&mut self) -> Result<(), String> {
        let mut current = self.launch_config.clone();
        current.remember(&self.container);
        current.window = self.container.size();
        self.config.merge_changes(&self.launch_config, &current);
        self.launch_config = current;
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => self.config.save(),
        }
    }
}
