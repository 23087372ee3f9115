//! Load and save the simulation config
//!
//! Paths go straight to the filesystem, globalize `res://` and `user://`
//! paths on the GDScript side first.

use anyhow::Context;
use coaster_sim::config::SimConfig;

pub fn load(path: &str) -> anyhow::Result<SimConfig> {
    let s = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    SimConfig::from_json(&s).with_context(|| format!("parsing {path}"))
}

pub fn save(path: &str, config: &SimConfig) -> anyhow::Result<()> {
    let s = config.to_json_pretty()?;
    std::fs::write(path, s).with_context(|| format!("writing {path}"))?;
    Ok(())
}
