//! Pane container - owns the four regions and the three dividers
//!
//! The topology is fixed: the toolbar divider sits on the toolbar's right
//! edge, the panel divider on the side panel's left edge, and the console
//! divider on the console's top edge. Dividers are addressed by
//! [`DividerId`]; they hold no reference back to the container.
//!
//! Every mutation that can move a boundary ends in [`PaneContainer::relayout`],
//! which recomputes all geometry from scratch. `relayout` takes `&mut self`
//! and divider setters never see the container, so it cannot be re-entered.

use serde::{Deserialize, Serialize};

use super::divider::{Divider, DividerEvent, DividerRequest, Edge};
use super::geometry::{Point, Size};
use super::region::{Region, RegionId};
use crate::solver::{solve, Boundaries, DividerPlacement, LayoutInput, LayoutOutput, LengthBounds};
use crate::tracing::LayoutSnapshot;

/// Fixed width of the toolbar column
pub const TOOLBAR_LENGTH: i32 = 68;

/// Initial (and minimum) width of the side panel
pub const PANEL_LENGTH: i32 = 200;

/// Initial height of the console
pub const CONSOLE_LENGTH: i32 = 200;

/// Smallest console height reachable by dragging
pub const CONSOLE_MINIMUM_LENGTH: i32 = 50;

/// Preferred container size
pub const SIZE_HINT: Size = Size::new(1920, 1080);

/// Handle for one of the three dividers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DividerId {
    Toolbar,
    Panel,
    Console,
}

impl DividerId {
    /// Hit-test priority order
    pub const ALL: [DividerId; 3] = [DividerId::Toolbar, DividerId::Panel, DividerId::Console];

    /// The region this divider resizes
    pub fn region(&self) -> RegionId {
        match self {
            DividerId::Toolbar => RegionId::Toolbar,
            DividerId::Panel => RegionId::SidePanel,
            DividerId::Console => RegionId::Console,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaneContainer {
    size: Size,
    margin: i32,

    viewer: Region,
    toolbar: Region,
    console: Region,
    side_panel: Region,

    toolbar_divider: Divider,
    panel_divider: Divider,
    console_divider: Divider,

    /// Results of the last relayout
    boundaries: Boundaries,
    minimum_size: Size,
}

impl PaneContainer {
    /// Create the container and solve it once at `size`.
    ///
    /// Lengths are clamped by that first solve, so pass the real size: a
    /// zero-sized container would squeeze the console down to its minimum.
    pub fn new(size: Size) -> Self {
        let mut container = Self {
            size,
            margin: 0,
            viewer: Region::new(RegionId::Viewer),
            toolbar: Region::new(RegionId::Toolbar),
            console: Region::new(RegionId::Console),
            side_panel: Region::new(RegionId::SidePanel),
            toolbar_divider: Divider::new(
                Edge::Right,
                false,
                TOOLBAR_LENGTH,
                TOOLBAR_LENGTH,
                TOOLBAR_LENGTH,
            ),
            panel_divider: Divider::new(Edge::Left, true, PANEL_LENGTH, PANEL_LENGTH, PANEL_LENGTH),
            console_divider: Divider::new(
                Edge::Top,
                true,
                CONSOLE_LENGTH,
                CONSOLE_MINIMUM_LENGTH,
                i32::MAX,
            ),
            boundaries: Boundaries::default(),
            minimum_size: Size::default(),
        };
        container.relayout();
        container
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Minimum container size reported by the last relayout
    pub fn minimum_size(&self) -> Size {
        self.minimum_size
    }

    pub fn size_hint(&self) -> Size {
        SIZE_HINT
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    pub fn region(&self, id: RegionId) -> &Region {
        match id {
            RegionId::Viewer => &self.viewer,
            RegionId::Toolbar => &self.toolbar,
            RegionId::Console => &self.console,
            RegionId::SidePanel => &self.side_panel,
        }
    }

    fn region_mut(&mut self, id: RegionId) -> &mut Region {
        match id {
            RegionId::Viewer => &mut self.viewer,
            RegionId::Toolbar => &mut self.toolbar,
            RegionId::Console => &mut self.console,
            RegionId::SidePanel => &mut self.side_panel,
        }
    }

    pub fn is_region_visible(&self, id: RegionId) -> bool {
        self.region(id).visible
    }

    pub fn divider(&self, id: DividerId) -> &Divider {
        match id {
            DividerId::Toolbar => &self.toolbar_divider,
            DividerId::Panel => &self.panel_divider,
            DividerId::Console => &self.console_divider,
        }
    }

    /// Direct access for programmatic configuration. Length and bound
    /// changes take effect on the region geometry at the next
    /// [`relayout`](Self::relayout).
    pub fn divider_mut(&mut self, id: DividerId) -> &mut Divider {
        match id {
            DividerId::Toolbar => &mut self.toolbar_divider,
            DividerId::Panel => &mut self.panel_divider,
            DividerId::Console => &mut self.console_divider,
        }
    }

    pub fn dividers_mut(&mut self) -> impl Iterator<Item = &mut Divider> {
        [
            &mut self.toolbar_divider,
            &mut self.panel_divider,
            &mut self.console_divider,
        ]
        .into_iter()
    }

    /// The divider currently being dragged, if any
    pub fn pressed_divider(&self) -> Option<DividerId> {
        DividerId::ALL
            .into_iter()
            .find(|&id| self.divider(id).is_pressed())
    }

    /// The divider under the pointer (including one being dragged)
    pub fn hovered_divider(&self) -> Option<DividerId> {
        DividerId::ALL
            .into_iter()
            .find(|&id| self.divider(id).is_hovered())
    }

    /// Topmost divider whose capture rect contains `point`
    pub fn hit_test(&self, point: Point) -> Option<DividerId> {
        DividerId::ALL
            .into_iter()
            .find(|&id| self.divider(id).hit_test(point))
    }

    // =========================================================================
    // Mutations that end in a relayout
    // =========================================================================

    /// The container was resized by its parent
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.relayout();
    }

    pub fn set_margin(&mut self, margin: i32) {
        self.margin = margin.max(0);
        self.relayout();
    }

    /// Show or hide a region. The viewer is always visible.
    pub fn set_region_visible(&mut self, id: RegionId, visible: bool) {
        if !id.is_toggleable() {
            tracing::debug!("ignoring visibility change for {:?}", id);
            return;
        }
        let region = self.region_mut(id);
        if region.visible != visible {
            region.visible = visible;
            tracing::debug!(region = ?id, visible, "region visibility changed");
            self.relayout();
        }
    }

    pub fn toggle_console_visible(&mut self) {
        self.set_region_visible(RegionId::Console, !self.console.visible);
    }

    pub fn toggle_panel_visible(&mut self) {
        self.set_region_visible(RegionId::SidePanel, !self.side_panel.visible);
    }

    pub fn toggle_toolbar_visible(&mut self) {
        self.set_region_visible(RegionId::Toolbar, !self.toolbar.visible);
    }

    /// Record the minimum size reported by a region's content. Negative
    /// extents are floored at zero.
    pub fn set_region_minimum_size(&mut self, id: RegionId, size: Size) {
        self.region_mut(id).minimum_size = Size::new(size.width.max(0), size.height.max(0));
        self.relayout();
    }

    /// Feed a pointer event to one divider and relayout if its length moved
    pub fn handle_divider_event(
        &mut self,
        id: DividerId,
        event: DividerEvent,
    ) -> Option<DividerRequest> {
        let request = self.divider_mut(id).handle_event(event);
        if request == Some(DividerRequest::Relayout) {
            self.relayout();
        }
        request
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Snapshot of everything the solver reads
    pub fn layout_input(&self) -> LayoutInput {
        let bounds = |divider: &Divider| {
            LengthBounds::new(
                divider.length(),
                divider.minimum_length(),
                divider.maximum_length(),
            )
        };
        LayoutInput {
            size: self.size,
            margin: self.margin,
            toolbar_visible: self.toolbar.visible,
            console_visible: self.console.visible,
            panel_visible: self.side_panel.visible,
            toolbar: bounds(&self.toolbar_divider),
            panel: bounds(&self.panel_divider),
            console: bounds(&self.console_divider),
            viewer_minimum: self.viewer.minimum_size,
        }
    }

    /// Solve the layout and apply it to every region and divider
    pub fn relayout(&mut self) {
        let output = solve(&self.layout_input());
        self.apply(&output);
        tracing::trace!(
            size = ?self.size,
            viewer = ?self.viewer.geometry,
            minimum = ?self.minimum_size,
            "relayout"
        );
    }

    fn apply(&mut self, output: &LayoutOutput) {
        apply_placement(&mut self.toolbar_divider, &output.toolbar_divider);
        apply_placement(&mut self.panel_divider, &output.panel_divider);
        apply_placement(&mut self.console_divider, &output.console_divider);

        self.toolbar.geometry = output.toolbar;
        self.viewer.geometry = output.viewer;
        self.console.geometry = output.console;
        self.side_panel.geometry = output.side_panel;

        self.boundaries = output.boundaries;
        self.minimum_size = output.minimum_size;
    }

    /// Geometry of every visible region, in paint order
    pub fn visible_regions(&self) -> impl Iterator<Item = &Region> {
        RegionId::ALL
            .into_iter()
            .map(|id| self.region(id))
            .filter(|region| region.visible)
    }

    /// Serialisable copy of the current geometry
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_container(self)
    }
}

fn apply_placement(divider: &mut Divider, placement: &DividerPlacement) {
    divider.set_maximum_length(placement.maximum);
    divider.set_length(placement.length);
    match placement.centerline {
        Some((start, length)) => {
            divider.set_shown(true);
            divider.set_geometry_from_centerline(start, length);
        }
        None => divider.set_shown(false),
    }
}
