//! Pointer routing from window input to dividers

mod common;

use common::{drag, flatten, move_to, press, release, test_model};
use panekit::commands::Cmd;
use panekit::messages::{LayoutMsg, Msg, PointerMsg};
use panekit::model::{CursorShape, DividerId, Point, PointerButton, Rect, RegionId, Size};
use panekit::update::update;

// Reference layout: panel divider centerline at x=800, console divider at y=600
const PANEL_X: i32 = 800;
const CONSOLE_Y: i32 = 600;

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_enters_divider_and_sets_cursor() {
    let mut model = test_model();
    let cmds = flatten(move_to(&mut model, PANEL_X, 300));

    assert_eq!(model.container.hovered_divider(), Some(DividerId::Panel));
    assert!(cmds.contains(&Cmd::RedrawAreas(vec![Rect::new(795, 0, 10, 800)])));
    assert!(cmds.contains(&Cmd::SetCursor(CursorShape::ColResize)));
    assert_eq!(model.cursor, CursorShape::ColResize);
}

#[test]
fn test_hover_moves_between_dividers() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    let cmds = flatten(move_to(&mut model, 400, CONSOLE_Y));

    assert_eq!(model.container.hovered_divider(), Some(DividerId::Console));
    assert!(!model.container.divider(DividerId::Panel).is_hovered());
    assert!(cmds.contains(&Cmd::SetCursor(CursorShape::RowResize)));
}

#[test]
fn test_leaving_divider_restores_cursor() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    let cmds = flatten(move_to(&mut model, 400, 300));

    assert_eq!(model.container.hovered_divider(), None);
    assert!(cmds.contains(&Cmd::SetCursor(CursorShape::Default)));
}

#[test]
fn test_moving_over_empty_space_is_silent() {
    let mut model = test_model();
    assert_eq!(move_to(&mut model, 400, 300), None);
    // The fixed toolbar divider never reacts
    assert_eq!(move_to(&mut model, 68, 300), None);
}

#[test]
fn test_hover_within_divider_is_silent() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    assert_eq!(move_to(&mut model, PANEL_X + 2, 310), None);
}

#[test]
fn test_pointer_leaving_window_clears_hover() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    update(&mut model, Msg::Pointer(PointerMsg::Left));

    assert_eq!(model.container.hovered_divider(), None);
    assert_eq!(model.pointer, None);
    assert_eq!(model.cursor, CursorShape::Default);
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_panel_divider() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    press(&mut model, PANEL_X, 300);
    let cmds = flatten(move_to(&mut model, 750, 300));

    assert!(cmds.contains(&Cmd::Redraw));
    assert_eq!(model.container.divider(DividerId::Panel).length(), 250);
    assert_eq!(model.container.region(RegionId::SidePanel).geometry.x, 750);
    assert_eq!(model.container.region(RegionId::Viewer).geometry.width, 682);
}

#[test]
fn test_press_without_prior_move_still_hits() {
    let mut model = test_model();
    press(&mut model, PANEL_X, 300);
    assert_eq!(model.container.pressed_divider(), Some(DividerId::Panel));
}

#[test]
fn test_drag_grabs_pointer() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    press(&mut model, PANEL_X, 300);

    // Crossing the console divider does not steal the drag
    move_to(&mut model, 400, CONSOLE_Y);
    assert_eq!(model.container.pressed_divider(), Some(DividerId::Panel));
    assert!(!model.container.divider(DividerId::Console).is_hovered());
    assert_eq!(model.container.divider(DividerId::Panel).length(), 600);

    // Leaving the window does not end it either
    update(&mut model, Msg::Pointer(PointerMsg::Left));
    assert_eq!(model.container.pressed_divider(), Some(DividerId::Panel));
    assert_eq!(model.cursor, CursorShape::ColResize);
}

#[test]
fn test_release_outside_window_ends_drag() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    press(&mut model, PANEL_X, 300);
    move_to(&mut model, 700, 300);
    update(&mut model, Msg::Pointer(PointerMsg::Left));
    assert_eq!(model.container.pressed_divider(), Some(DividerId::Panel));

    let cmds = flatten(release(&mut model, 700, 300));
    assert_eq!(model.container.pressed_divider(), None);
    assert_eq!(model.container.hovered_divider(), None);
    assert_eq!(model.pointer, None);
    assert!(cmds.contains(&Cmd::SetCursor(CursorShape::Default)));

    // Later moves no longer resize
    move_to(&mut model, 600, 300);
    assert_eq!(model.container.divider(DividerId::Panel).length(), 300);
}

#[test]
fn test_pointer_returning_after_outside_release_hovers_again() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    press(&mut model, PANEL_X, 300);
    update(&mut model, Msg::Pointer(PointerMsg::Left));
    release(&mut model, PANEL_X, 300);

    move_to(&mut model, PANEL_X, 300);
    assert_eq!(model.container.hovered_divider(), Some(DividerId::Panel));
    assert_eq!(model.cursor, CursorShape::ColResize);
}

#[test]
fn test_release_over_divider_keeps_hover() {
    let mut model = test_model();
    drag(&mut model, (PANEL_X, 300), (700, 300));

    assert_eq!(model.container.divider(DividerId::Panel).length(), 300);
    assert_eq!(model.container.pressed_divider(), None);
    assert_eq!(model.container.hovered_divider(), Some(DividerId::Panel));
    assert_eq!(model.cursor, CursorShape::ColResize);
}

#[test]
fn test_release_away_from_clamped_divider_leaves_it() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    press(&mut model, PANEL_X, 300);
    move_to(&mut model, 0, 300);
    let panel = model.container.divider(DividerId::Panel);
    assert_eq!(panel.length(), panel.maximum_length());

    release(&mut model, 0, 300);
    assert_eq!(model.container.hovered_divider(), None);
    assert_eq!(model.cursor, CursorShape::Default);
}

#[test]
fn test_secondary_button_does_not_drag() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    update(
        &mut model,
        Msg::Pointer(PointerMsg::Pressed(
            Point::new(PANEL_X, 300),
            PointerButton::Secondary,
        )),
    );
    assert_eq!(model.container.pressed_divider(), None);

    move_to(&mut model, 700, 300);
    assert_eq!(model.container.divider(DividerId::Panel).length(), 200);
}

#[test]
fn test_console_drag_respects_maximum() {
    let mut model = test_model();
    drag(&mut model, (400, CONSOLE_Y), (400, -500));
    assert_eq!(model.container.divider(DividerId::Console).length(), 700);
    assert_eq!(model.container.region(RegionId::Viewer).geometry.height, 100);
}

// ============================================================================
// Layout changes under a still pointer
// ============================================================================

#[test]
fn test_hiding_hovered_region_resets_cursor() {
    let mut model = test_model();
    move_to(&mut model, PANEL_X, 300);
    let cmds = flatten(update(&mut model, Msg::Layout(LayoutMsg::TogglePanel)));

    assert!(cmds.contains(&Cmd::Redraw));
    assert!(cmds.contains(&Cmd::SetCursor(CursorShape::Default)));
    assert_eq!(model.container.hovered_divider(), None);
}

#[test]
fn test_toggle_reports_new_minimum_size() {
    let mut model = test_model();
    let cmds = flatten(update(&mut model, Msg::Layout(LayoutMsg::ToggleConsole)));
    assert!(cmds.contains(&Cmd::SetMinimumSize(Size::new(368, 100))));
}

#[test]
fn test_resize_without_minimum_change() {
    let mut model = test_model();
    let cmds = flatten(update(&mut model, Msg::resized(1200, 900)));
    assert_eq!(cmds, vec![Cmd::Redraw]);
    assert_eq!(model.container.size(), Size::new(1200, 900));
}
