//! Panekit - adaptive split-pane layout
//!
//! A fixed four-region arrangement (toolbar, viewer, console, side panel)
//! separated by three draggable dividers, driven through the Elm
//! Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod solver;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use messages::Msg;
pub use model::{AppModel, PaneContainer};
pub use theme::Theme;
