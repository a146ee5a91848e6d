use std::env;

use anyhow::Result;
use appraiser::AppConfig;

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(path) = env::args().nth(1) {
        config = config.with_bundle_path(path);
    }

    app::logging::init(&config.log_file)?;
    app::run::run(&config)
}
