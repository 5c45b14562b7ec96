use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use panekit::cli::{solve_to_json, CliArgs};
use panekit::model::AppModel;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Headless mode prints and exits before any logging or window setup
    if let Some(size) = args.solve {
        let config = args.load_config();
        let json = solve_to_json(&config, size.0).map_err(anyhow::Error::msg)?;
        println!("{}", json);
        return Ok(());
    }

    panekit::tracing::init();

    // Command-line overrides shape this session only; saves merge into the
    // stored config
    let stored = args.load_stored_config();
    let mut launch = stored.clone();
    args.apply_overrides(&mut launch);
    let model = AppModel::with_overrides(stored, launch, args.config.clone());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model);

    event_loop.run_app(&mut app)?;

    Ok(())
}
