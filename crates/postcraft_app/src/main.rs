use std::path::PathBuf;

use anyhow::Result;
use postcraft_app::{initialize_logging, load_config, run_app};

fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;
    initialize_logging(config.log_destination, &config.log_level);
    run_app(&config)
}
