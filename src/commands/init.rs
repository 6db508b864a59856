use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config;

pub fn run(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };

    config::write_default_config(&path, force)?;

    println!("{}", format!("  Created: {}", path.display()).green());
    println!("  Edit the names, phone number and event_start, then run `undangan info`.");

    Ok(())
}
