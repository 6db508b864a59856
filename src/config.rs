use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use undangan_core::{EventConfig, Invitation};

/// Get the config directory path (~/.config/undangan)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("undangan");
    Ok(config_dir)
}

/// Get the config file path (~/.config/undangan/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the event config.
///
/// An explicit path must exist. The default path is optional: when it is
/// missing the built-in invitation is used.
pub fn load_config(explicit: Option<&Path>) -> Result<EventConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(
                    "Config file not found at {}\n\n\
                    Create one with:\n  \
                    undangan --config {} init",
                    path.display(),
                    path.display()
                );
            }
            path.to_path_buf()
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                debug!(path = %path.display(), "no config file, using built-in invitation");
                return Ok(EventConfig::default());
            }
            path
        }
    };

    read_config(&path)
}

/// Load and validate the config into an `Invitation`.
pub fn load_invitation(explicit: Option<&Path>) -> Result<Invitation> {
    let config = load_config(explicit)?;
    Invitation::new(config).context("Invalid invitation config")
}

fn read_config(path: &Path) -> Result<EventConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: EventConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Write the built-in invitation as a starting config file.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}\n\
            Pass --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let body = toml::to_string_pretty(&EventConfig::default())
        .context("Failed to serialize default config")?;
    let contents = format!(
        "# undangan configuration\n\
         # event_start accepts any RFC 3339 offset, e.g. \"2026-02-25T10:00:00+07:00\"\n\n{body}"
    );

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;

    Ok(())
}
