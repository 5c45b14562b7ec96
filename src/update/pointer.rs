//! Pointer routing: turns window pointer input into per-divider events
//!
//! A pressed divider grabs the pointer. While it holds the grab every move
//! goes to it and no Enter/Leave is generated for any divider. Otherwise the
//! hovered divider follows the container's hit test.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::{AppModel, CursorShape, DividerEvent, DividerId, DividerRequest, Point, Rect};

/// What the divider requests of one message add up to
#[derive(Debug, Default)]
struct Effects {
    relayout: bool,
    repaint: Vec<Rect>,
}

impl Effects {
    fn send(&mut self, model: &mut AppModel, id: DividerId, event: DividerEvent) {
        // Capture rect before the event: a relayout may move the divider
        let before = model.container.divider(id).capture_rect();
        match model.container.handle_divider_event(id, event) {
            Some(DividerRequest::Relayout) => self.relayout = true,
            Some(DividerRequest::Repaint) => {
                self.repaint.push(before);
                let after = model.container.divider(id).capture_rect();
                if after != before {
                    self.repaint.push(after);
                }
            }
            None => {}
        }
    }

    fn into_cmds(self) -> Vec<Cmd> {
        if self.relayout {
            vec![Cmd::Redraw]
        } else if !self.repaint.is_empty() {
            vec![Cmd::RedrawAreas(self.repaint)]
        } else {
            Vec::new()
        }
    }
}

/// Handle pointer messages (hover, press, drag, release)
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    let mut effects = Effects::default();

    match msg {
        PointerMsg::Moved(position) => {
            model.pointer = Some(position);
            match model.container.pressed_divider() {
                Some(id) => effects.send(model, id, DividerEvent::Move { position }),
                None => sync_hover(model, position, &mut effects),
            }
        }

        PointerMsg::Pressed(position, button) => {
            model.pointer = Some(position);
            if model.container.pressed_divider().is_none() {
                sync_hover(model, position, &mut effects);
                if let Some(id) = model.container.hovered_divider() {
                    effects.send(model, id, DividerEvent::Press { button, position });
                }
            }
        }

        PointerMsg::Released(position, button) => {
            // A release after the pointer left the window still ends the grab
            if model.pointer.is_some() {
                model.pointer = Some(position);
            }
            if let Some(id) = model.container.pressed_divider() {
                effects.send(model, id, DividerEvent::Release { button });
            }
            if model.container.pressed_divider().is_none() {
                settle_hover(model, &mut effects);
            }
        }

        PointerMsg::Left => {
            model.pointer = None;
            if model.container.pressed_divider().is_none() {
                settle_hover(model, &mut effects);
            }
        }
    }

    let mut cmds = effects.into_cmds();
    cmds.extend(sync_cursor(model));
    Cmd::from_cmds(cmds)
}

/// Re-evaluate hover after the layout moved dividers under a still pointer
pub(crate) fn refresh_hover(model: &mut AppModel) -> Option<Cmd> {
    let mut effects = Effects::default();
    if model.container.pressed_divider().is_none() {
        settle_hover(model, &mut effects);
    }
    let mut cmds = effects.into_cmds();
    cmds.extend(sync_cursor(model));
    Cmd::from_cmds(cmds)
}

/// Hover follows the pointer while it is inside the window, and nothing is
/// hovered once it has left
fn settle_hover(model: &mut AppModel, effects: &mut Effects) {
    match model.pointer {
        Some(position) => sync_hover(model, position, effects),
        None => {
            if let Some(id) = model.container.hovered_divider() {
                effects.send(model, id, DividerEvent::Leave);
            }
        }
    }
}

/// Move hover to whichever divider is under `position`
fn sync_hover(model: &mut AppModel, position: Point, effects: &mut Effects) {
    let target = model.container.hit_test(position);
    let current = model.container.hovered_divider();
    if target == current {
        return;
    }
    if let Some(id) = current {
        effects.send(model, id, DividerEvent::Leave);
    }
    if let Some(id) = target {
        effects.send(model, id, DividerEvent::Enter);
    }
}

/// Cursor for the divider holding the grab or hover, default elsewhere
fn sync_cursor(model: &mut AppModel) -> Option<Cmd> {
    let shape = model
        .container
        .pressed_divider()
        .or_else(|| model.container.hovered_divider())
        .map(|id| model.container.divider(id).cursor())
        .unwrap_or(CursorShape::Default);

    if shape == model.cursor {
        return None;
    }
    model.cursor = shape;
    Some(Cmd::SetCursor(shape))
}
