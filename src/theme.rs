//! Theme system for the pane layout
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/panekit/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::model::RegionId;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

// ============================================================================
// YAML schema
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ThemeData {
    #[allow(dead_code)]
    #[serde(default)]
    pub version: u32,
    pub name: String,
    pub ui: UiData,
}

#[derive(Debug, Deserialize)]
pub struct UiData {
    pub background: String,
    pub regions: RegionColorsData,
    pub divider: DividerColorsData,
}

#[derive(Debug, Deserialize)]
pub struct RegionColorsData {
    pub viewer: String,
    pub toolbar: String,
    pub console: String,
    pub panel: String,
}

#[derive(Debug, Deserialize)]
pub struct DividerColorsData {
    pub highlight: String,
}

// ============================================================================
// Resolved theme
// ============================================================================

/// Colors used to paint the container
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    /// Shows through the margins between regions
    pub background: Color,
    pub viewer: Color,
    pub toolbar: Color,
    pub console: Color,
    pub panel: Color,
    pub divider_highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

impl Theme {
    /// The embedded dark theme, with a hard-coded fallback
    pub fn default_dark() -> Self {
        Theme::from_yaml(DEFAULT_DARK_YAML).unwrap_or_else(|e| {
            tracing::error!("Embedded default theme failed to parse: {}", e);
            Theme {
                name: "Fallback".to_string(),
                background: Color::rgb(0x18, 0x18, 0x1A),
                viewer: Color::rgb(0x1E, 0x1E, 0x1E),
                toolbar: Color::rgb(0x2B, 0x2B, 0x2D),
                console: Color::rgb(0x16, 0x16, 0x17),
                panel: Color::rgb(0x25, 0x25, 0x26),
                divider_highlight: Color::rgb(0x3C, 0x7F, 0xD0),
            }
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        Ok(Theme {
            name: data.name,
            background: Color::from_hex(&data.ui.background)?,
            viewer: Color::from_hex(&data.ui.regions.viewer)?,
            toolbar: Color::from_hex(&data.ui.regions.toolbar)?,
            console: Color::from_hex(&data.ui.regions.console)?,
            panel: Color::from_hex(&data.ui.regions.panel)?,
            divider_highlight: Color::from_hex(&data.ui.divider.highlight)?,
        })
    }

    pub fn region_color(&self, id: RegionId) -> Color {
        match id {
            RegionId::Viewer => self.viewer,
            RegionId::Toolbar => self.toolbar,
            RegionId::Console => self.console,
            RegionId::SidePanel => self.panel,
        }
    }
}
