//! Config command: print the effective configuration.

use anyhow::Result;
use arrowkit_config::ArrowkitConfig;

pub fn show(config: &ArrowkitConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
