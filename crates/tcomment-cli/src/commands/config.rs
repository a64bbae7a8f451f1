//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::Result;

use tcomment_ops::{Config, CONFIG_KEYS};

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("tComment CLI Configuration");
    println!("{:-<40}", "");

    println!("Throws Mode:         {}", config.throws_mode);
    println!("Workers:             {}", config.workers);
    println!("Output Directory:    {}", config.output_dir.display());

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save()?;
    println!(
        "Set {} to: {}",
        key,
        config.get(key).unwrap_or_else(|| value.to_string())
    );
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    match config.get(key) {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Unknown config key: {}. Valid keys: {}",
            key,
            CONFIG_KEYS.join(", ")
        ),
    }
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
