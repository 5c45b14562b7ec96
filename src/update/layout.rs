//! Layout message handlers (resize, visibility, margins)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{AppModel, RegionId};

use super::pointer::refresh_hover;

/// Handle layout messages. Every one ends in a relayout.
pub fn update_layout(model: &mut AppModel, msg: LayoutMsg) -> Option<Cmd> {
    let minimum_before = model.container.minimum_size();

    match msg {
        LayoutMsg::Resized(size) => model.container.resize(size),
        LayoutMsg::ToggleConsole => model.container.toggle_console_visible(),
        LayoutMsg::TogglePanel => model.container.toggle_panel_visible(),
        LayoutMsg::ToggleToolbar => model.container.toggle_toolbar_visible(),
        LayoutMsg::SetMargin(margin) => model.container.set_margin(margin),
        LayoutMsg::SetRegionMinimumSize(id, size) => {
            model.container.set_region_minimum_size(id, size)
        }
        LayoutMsg::Relayout => model.container.relayout(),
    }

    if matches!(
        msg,
        LayoutMsg::ToggleConsole | LayoutMsg::TogglePanel | LayoutMsg::ToggleToolbar
    ) {
        let visible: Vec<&str> = RegionId::ALL
            .into_iter()
            .filter(|&id| model.container.is_region_visible(id))
            .map(|id| id.display_name())
            .collect();
        tracing::info!("Visible regions: {}", visible.join(", "));
    }

    let mut cmds = vec![Cmd::Redraw];
    let minimum_after = model.container.minimum_size();
    if minimum_after != minimum_before {
        cmds.push(Cmd::SetMinimumSize(minimum_after));
    }
    cmds.extend(refresh_hover(model));
    Cmd::from_cmds(cmds)
}
