//! Tracing infrastructure for layout diagnostics
//!
//! Provides structured logging with scoped filtering for debugging divider
//! state transitions and relayouts.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=panekit::model::divider=debug` - drag start/end only
//! - `RUST_LOG=panekit::model::container=trace` - every relayout
//!
//! # Log Files
//!
//! Logs are written to `~/.config/panekit/logs/panekit.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{DividerId, PaneContainer, Rect, RegionId, Size};
use crate::solver::Boundaries;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
/// File logging writes to `~/.config/panekit/logs/panekit.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "panekit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Serialisable snapshot of the solved layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub size: Size,
    pub margin: i32,
    pub minimum_size: Size,
    pub boundaries: Boundaries,
    pub regions: Vec<RegionSnapshot>,
    pub dividers: Vec<DividerSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSnapshot {
    pub id: RegionId,
    pub visible: bool,
    pub geometry: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividerSnapshot {
    pub id: DividerId,
    pub shown: bool,
    pub resizable: bool,
    pub length: i32,
    pub minimum_length: i32,
    pub maximum_length: i32,
    pub capture_rect: Rect,
    pub hovered: bool,
    pub pressed: bool,
}

impl LayoutSnapshot {
    pub fn from_container(container: &PaneContainer) -> Self {
        Self {
            size: container.size(),
            margin: container.margin(),
            minimum_size: container.minimum_size(),
            boundaries: container.boundaries(),
            regions: RegionId::ALL
                .into_iter()
                .map(|id| {
                    let region = container.region(id);
                    RegionSnapshot {
                        id,
                        visible: region.visible,
                        geometry: region.geometry,
                    }
                })
                .collect(),
            dividers: DividerId::ALL
                .into_iter()
                .map(|id| {
                    let divider = container.divider(id);
                    DividerSnapshot {
                        id,
                        shown: divider.is_shown(),
                        resizable: divider.is_resizable(),
                        length: divider.length(),
                        minimum_length: divider.minimum_length(),
                        maximum_length: divider.maximum_length(),
                        capture_rect: divider.capture_rect(),
                        hovered: divider.is_hovered(),
                        pressed: divider.is_pressed(),
                    }
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.size != other.size {
            changes.push(format!(
                "size: {}x{} → {}x{}",
                self.size.width, self.size.height, other.size.width, other.size.height
            ));
        }

        for (before, after) in self.regions.iter().zip(&other.regions) {
            if before.visible != after.visible {
                let status = if after.visible { "shown" } else { "hidden" };
                changes.push(format!("{}: {}", after.id.display_name(), status));
            } else if before.geometry != after.geometry {
                let (b, a) = (before.geometry, after.geometry);
                changes.push(format!(
                    "{}: ({},{} {}x{}) → ({},{} {}x{})",
                    after.id.display_name(),
                    b.x,
                    b.y,
                    b.width,
                    b.height,
                    a.x,
                    a.y,
                    a.width,
                    a.height
                ));
            }
        }

        for (before, after) in self.dividers.iter().zip(&other.dividers) {
            if before.length != after.length {
                changes.push(format!(
                    "{:?} divider length: {} → {}",
                    after.id, before.length, after.length
                ));
            }
            if before.pressed != after.pressed {
                let status = if after.pressed { "pressed" } else { "released" };
                changes.push(format!("{:?} divider {}", after.id, status));
            } else if before.hovered != after.hovered {
                let status = if after.hovered { "entered" } else { "left" };
                changes.push(format!("{:?} divider {}", after.id, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let container = PaneContainer::new(Size::new(1000, 800));
        let snapshot = LayoutSnapshot::from_container(&container);
        assert_eq!(snapshot.diff(&snapshot.clone()), None);
    }

    #[test]
    fn test_diff_reports_visibility_and_length() {
        let mut container = PaneContainer::new(Size::new(1000, 800));
        let before = LayoutSnapshot::from_container(&container);
        container.toggle_console_visible();
        let after = LayoutSnapshot::from_container(&container);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("Console: hidden"), "{}", diff);
        assert!(diff.contains("Viewer:"), "{}", diff);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let container = PaneContainer::new(Size::new(1000, 800));
        let json = serde_json::to_string(&container.snapshot()).unwrap();
        assert!(json.contains("\"SidePanel\""));
        assert!(json.contains("\"minimum_size\""));
    }
}
