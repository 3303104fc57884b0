use anyhow::{Context, Result};
use bactalign_engine::driver::OptimizerConfig;
use std::path::Path;

/// Print or save the default optimizer configuration.
pub fn write_default_config(output: Option<&Path>) -> Result<()> {
    let json = OptimizerConfig::default().to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Default configuration written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
