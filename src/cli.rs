//! Command-line argument parsing
//!
//! Supports:
//! - Initial window size and an explicit config file
//! - Starting with regions hidden
//! - Headless solving (`--solve 1920x1080`) that prints the layout as JSON

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::config::LayoutConfig;
use crate::model::Size;

/// Adaptive split-pane layout
#[derive(Parser, Debug)]
#[command(name = "panekit", version, about = "Adaptive split-pane layout")]
pub struct CliArgs {
    /// Initial window width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<i32>,

    /// Initial window height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<i32>,

    /// Config file to load and save instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with the console hidden
    #[arg(long)]
    pub no_console: bool,

    /// Start with the side panel hidden
    #[arg(long)]
    pub no_panel: bool,

    /// Start with the toolbar hidden
    #[arg(long)]
    pub no_toolbar: bool,

    /// Gap between regions in pixels
    #[arg(long, value_name = "N")]
    pub margin: Option<i32>,

    /// Solve once at WIDTHxHEIGHT, print the layout as JSON and exit
    #[arg(long, value_name = "WxH")]
    pub solve: Option<SizeArg>,
}

/// A `WIDTHxHEIGHT` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub Size);

impl FromStr for SizeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| format!("invalid dimension '{}': {}", v, e))
        };
        Ok(SizeArg(Size::new(parse(w)?, parse(h)?)))
    }
}

impl CliArgs {
    /// Layer command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut LayoutConfig) {
        if let Some(width) = self.width {
            config.window.width = width;
        }
        if let Some(height) = self.height {
            config.window.height = height;
        }
        if let Some(margin) = self.margin {
            config.margin = margin;
        }
        if self.no_console {
            config.console_visible = false;
        }
        if self.no_panel {
            config.panel_visible = false;
        }
        if self.no_toolbar {
            config.toolbar_visible = false;
        }
    }

    /// Load the config this invocation points at, as stored
    pub fn load_stored_config(&self) -> LayoutConfig {
        match &self.config {
            Some(path) => LayoutConfig::load_from(path),
            None => LayoutConfig::load(),
        }
    }

    /// Load the config this invocation points at, with overrides applied
    pub fn load_config(&self) -> LayoutConfig {
        let mut config = self.load_stored_config();
        self.apply_overrides(&mut config);
        config
    }
}

/// Solve headlessly and return the snapshot as pretty JSON
pub fn solve_to_json(config: &LayoutConfig, size: Size) -> Result<String, String> {
    let container = config.build_container(size);
    serde_json::to_string_pretty(&container.snapshot())
        .map_err(|e| format!("Failed to serialize layout: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("panekit").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_size_arg() {
        assert_eq!(
            "1920x1080".parse::<SizeArg>(),
            Ok(SizeArg(Size::new(1920, 1080)))
        );
        assert_eq!("800X600".parse::<SizeArg>(), Ok(SizeArg(Size::new(800, 600))));
        assert!("1920".parse::<SizeArg>().is_err());
        assert!("axb".parse::<SizeArg>().is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&["--no-console", "--width", "1024", "--margin", "3"]);
        let mut config = LayoutConfig::default();
        args.apply_overrides(&mut config);

        assert!(!config.console_visible);
        assert!(config.panel_visible);
        assert_eq!(config.window, Size::new(1024, 800));
        assert_eq!(config.margin, 3);
    }

    #[test]
    fn test_solve_flag_parses() {
        let args = parse(&["--solve", "1000x800"]);
        assert_eq!(args.solve, Some(SizeArg(Size::new(1000, 800))));
    }

    #[test]
    fn test_solve_to_json() {
        let json = solve_to_json(&LayoutConfig::default(), Size::new(1000, 800)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"]["width"], 1000);
        assert_eq!(value["regions"].as_array().map(|r| r.len()), Some(4));
    }
}
