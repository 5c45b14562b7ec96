//! Benchmarks for layout solving, pointer routing and painting
//!
//! Run with: cargo bench layout

use panekit::commands::Damage;
use panekit::config::LayoutConfig;
use panekit::messages::Msg;
use panekit::model::{AppModel, DividerId, PaneContainer, RegionId, Size};
use panekit::solver::solve;
use panekit::update::update;
use panekit::view::{paint, Frame};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_container(width: i32, height: i32) -> PaneContainer {
    let mut container = PaneContainer::new(Size::new(width, height));
    container.set_region_minimum_size(RegionId::Viewer, Size::new(100, 100));
    container.set_margin(4);
    container
}

fn make_model(width: i32, height: i32) -> AppModel {
    let config = LayoutConfig {
        window: Size::new(width, height),
        ..LayoutConfig::default()
    };
    AppModel::new(config, None)
}

// ============================================================================
// Solver
// ============================================================================

#[divan::bench]
fn solve_reference() {
    let container = make_container(1000, 800);
    let input = container.layout_input();
    divan::black_box(solve(divan::black_box(&input)));
}

#[divan::bench(args = [800, 1280, 1920, 2560])]
fn relayout(width: i32) {
    let mut container = make_container(width, width * 9 / 16);
    container.relayout();
    divan::black_box(container.boundaries());
}

#[divan::bench]
fn resize_sweep() {
    let mut container = make_container(1000, 800);
    for step in 0..100 {
        container.resize(Size::new(300 + step * 16, 200 + step * 9));
    }
    divan::black_box(container.boundaries());
}

#[divan::bench]
fn toggle_all_regions() {
    let mut container = make_container(1920, 1080);
    for _ in 0..10 {
        container.toggle_toolbar_visible();
        container.toggle_console_visible();
        container.toggle_panel_visible();
    }
    divan::black_box(container.minimum_size());
}

// ============================================================================
// Pointer routing
// ============================================================================

#[divan::bench(args = [10, 100, 500])]
fn drag_panel_divider(steps: i32) {
    let mut model = make_model(1920, 1080);
    let start = model.container.divider(DividerId::Panel).centerline().0;
    let (x, y) = (start.x, start.y + 100);

    update(&mut model, Msg::pointer_moved(x, y));
    update(&mut model, Msg::pointer_pressed(x, y));
    for i in 0..steps {
        divan::black_box(update(&mut model, Msg::pointer_moved(x - i, y)));
    }
    update(&mut model, Msg::pointer_released(x - steps, y));
}

#[divan::bench]
fn hover_sweep() {
    let mut model = make_model(1920, 1080);
    for x in (0..1920).step_by(4) {
        divan::black_box(update(&mut model, Msg::pointer_moved(x, 540)));
    }
}

// ============================================================================
// Painting
// ============================================================================

#[divan::bench(args = [800, 1280, 1920, 2560])]
fn paint_full_frame(bencher: divan::Bencher, width: i32) {
    let height = width * 9 / 16;
    let model = make_model(width, height);
    let mut buffer = vec![0u32; (width * height) as usize];

    bencher.bench_local(|| {
        let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
        paint(&mut frame, &model, &Damage::Full);
    });
}
