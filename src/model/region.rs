//! The four fixed content regions

use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Size};

/// Identity of a content region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionId {
    Viewer,
    Toolbar,
    Console,
    SidePanel,
}

impl RegionId {
    /// All regions, in the order their geometry is assigned
    pub const ALL: [RegionId; 4] = [
        RegionId::Toolbar,
        RegionId::Viewer,
        RegionId::Console,
        RegionId::SidePanel,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RegionId::Viewer => "Viewer",
            RegionId::Toolbar => "Toolbar",
            RegionId::Console => "Console",
            RegionId::SidePanel => "Panel",
        }
    }

    /// The viewer cannot be hidden
    pub fn is_toggleable(&self) -> bool {
        !matches!(self, RegionId::Viewer)
    }
}

/// A content area placed by the container
#[derive(Debug, Clone)]
pub struct Region {
    pub id: RegionId,
    pub visible: bool,
    /// Smallest size the region's content accepts (only the viewer's is
    /// consulted by the solver)
    pub minimum_size: Size,
    /// Written on every relayout. Meaningless while hidden.
    pub geometry: Rect,
}

impl Region {
    pub fn new(id: RegionId) -> Self {
        Self {
            id,
            visible: true,
            minimum_size: Size::default(),
            geometry: Rect::EMPTY,
        }
    }
}
