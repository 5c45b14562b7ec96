//! Layout configuration persistence
//!
//! Stores user preferences in `~/.config/panekit/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{
    DividerId, PaneContainer, RegionId, Size, CONSOLE_LENGTH, DEFAULT_GRAB_WIDTH,
    DEFAULT_HIGHLIGHT_WIDTH, PANEL_LENGTH,
};

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Gap between adjacent regions, in pixels
    #[serde(default)]
    pub margin: i32,

    #[serde(default = "default_grab_width")]
    pub grab_width: i32,

    #[serde(default = "default_highlight_width")]
    pub highlight_width: i32,

    #[serde(default = "default_true")]
    pub toolbar_visible: bool,

    #[serde(default = "default_true")]
    pub console_visible: bool,

    #[serde(default = "default_true")]
    pub panel_visible: bool,

    #[serde(default = "default_console_length")]
    pub console_length: i32,

    #[serde(default = "default_panel_length")]
    pub panel_length: i32,

    /// Minimum size reported by the viewer's content
    #[serde(default = "default_viewer_minimum")]
    pub viewer_minimum: Size,

    /// Initial window size
    #[serde(default = "default_window")]
    pub window: Size,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_grab_width() -> i32 {
    DEFAULT_GRAB_WIDTH
}

fn default_highlight_width() -> i32 {
    DEFAULT_HIGHLIGHT_WIDTH
}

fn default_true() -> bool {
    true
}

fn default_console_length() -> i32 {
    CONSOLE_LENGTH
}

fn default_panel_length() -> i32 {
    PANEL_LENGTH
}

fn default_viewer_minimum() -> Size {
    Size::new(200, 150)
}

fn default_window() -> Size {
    Size::new(1280, 800)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            margin: 0,
            grab_width: default_grab_width(),
            highlight_width: default_highlight_width(),
            toolbar_visible: true,
            console_visible: true,
            panel_visible: true,
            console_length: default_console_length(),
            panel_length: default_panel_length(),
            viewer_minimum: default_viewer_minimum(),
            window: default_window(),
        }
    }
}

impl LayoutConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build a container of `size` configured from these settings
    pub fn build_container(&self, size: Size) -> PaneContainer {
        let mut container = PaneContainer::new(size);
        self.apply_to(&mut container);
        container
    }

    /// Push these settings into an existing container and relayout it
    pub fn apply_to(&self, container: &mut PaneContainer) {
        for divider in container.dividers_mut() {
            divider.set_grab_width(self.grab_width);
            divider.set_highlight_width(self.highlight_width);
        }
        container.divider_mut(DividerId::Console).set_length(self.console_length);
        container.divider_mut(DividerId::Panel).set_length(self.panel_length);

        container.set_region_minimum_size(RegionId::Viewer, self.viewer_minimum);
        container.set_region_visible(RegionId::Toolbar, self.toolbar_visible);
        container.set_region_visible(RegionId::Console, self.console_visible);
        container.set_region_visible(RegionId::SidePanel, self.panel_visible);
        container.set_margin(self.margin);
    }

    /// Copy the container's current visibility and lengths into this config
    pub fn remember(&mut self, container: &PaneContainer) {
        self.toolbar_visible = container.is_region_visible(RegionId::Toolbar);
        self.console_visible = container.is_region_visible(RegionId::Console);
        self.panel_visible = container.is_region_visible(RegionId::SidePanel);
        self.console_length = container.divider(DividerId::Console).length();
        self.panel_length = container.divider(DividerId::Panel).length();
        self.margin = container.margin();
    }

    /// Take over every remembered setting that differs between `baseline`
    /// and `current`. Settings left at their `baseline` value keep what is
    /// stored here, so one-launch overrides never reach the file on their own.
    pub fn merge_changes(&mut self, baseline: &LayoutConfig, current: &LayoutConfig) {
        fn take<T: PartialEq + Copy>(stored: &mut T, baseline: T, current: T) {
            if baseline != current {
                *stored = current;
            }
        }

        take(&mut self.toolbar_visible, baseline.toolbar_visible, current.toolbar_visible);
        take(&mut self.console_visible, baseline.console_visible, current.console_visible);
        take(&mut self.panel_visible, baseline.panel_visible, current.panel_visible);
        take(&mut self.console_length, baseline.console_length, current.console_length);
        take(&mut self.panel_length, baseline.panel_length, current.panel_length);
        take(&mut self.margin, baseline.margin, current.margin);
        take(&mut self.window, baseline.window, current.window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: LayoutConfig = serde_yaml::from_str("margin: 6\npanel_visible: false\n").unwrap();
        assert_eq!(config.margin, 6);
        assert!(!config.panel_visible);
        assert!(config.console_visible);
        assert_eq!(config.theme, "default-dark");
        assert_eq!(config.window, Size::new(1280, 800));
        assert_eq!(config.grab_width, 10);
    }

    #[test]
    fn test_apply_to_container() {
        let config = LayoutConfig {
            console_visible: false,
            panel_length: 300,
            margin: 4,
            ..LayoutConfig::default()
        };
        let container = config.build_container(Size::new(1280, 800));

        assert!(!container.is_region_visible(RegionId::Console));
        assert_eq!(container.divider(DividerId::Panel).length(), 300);
        assert_eq!(container.margin(), 4);
        assert_eq!(
            container.region(RegionId::Viewer).minimum_size,
            Size::new(200, 150)
        );
    }

    #[test]
    fn test_remember_round_trips_through_container() {
        let mut container = LayoutConfig::default().build_container(Size::new(1280, 800));
        container.toggle_toolbar_visible();
        container.divider_mut(DividerId::Console).set_length(320);
        container.relayout();

        let mut config = LayoutConfig::default();
        config.remember(&container);

        assert!(!config.toolbar_visible);
        assert_eq!(config.console_length, 320);
        assert_eq!(config.panel_length, 200);
    }

    #[test]
    fn test_merge_changes_skips_untouched_overrides() {
        let stored = LayoutConfig::default();
        let launch = LayoutConfig {
            console_visible: false,
            margin: 12,
            ..LayoutConfig::default()
        };
        let current = LayoutConfig {
            panel_length: 260,
            ..launch.clone()
        };

        let mut merged = stored.clone();
        merged.merge_changes(&launch, &current);

        assert!(merged.console_visible);
        assert_eq!(merged.margin, 0);
        assert_eq!(merged.panel_length, 260);
    }
}
