//! Configuration file management for deckforge.
//!
//! Provides a TOML-based config file at `~/.config/deckforge/config.toml`
//! and a resolution chain for the generator command:
//! CLI flag > `DECKFORGE_GENERATOR` env var > config file.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Command to spawn for each generation stage.
    pub command: String,
    /// Arguments passed before the stage name.
    #[serde(default)]
    pub args: Vec<String>,
    /// Wall-time limit per invocation, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeneratorSection {
    /// Build a section from a single command-line string, first token the
    /// command and the rest its arguments.
    pub fn from_command_line(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let command = parts
            .next()
            .context("generator command line is empty")?
            .to_string();
        Ok(Self {
            command,
            args: parts.map(str::to_string).collect(),
            timeout_secs: default_timeout_secs(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    120
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the deckforge config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/deckforge` or
/// `~/.config/deckforge`.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("deckforge");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("deckforge")
}

/// Return the path to the deckforge config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

// -----------------------------------------------------------------------
// Resolution
// -----------------------------------------------------------------------

/// Resolve the generator to use: CLI flag > env var > config file.
pub fn resolve_generator(cli_override: Option<&str>) -> Result<GeneratorSection> {
    if let Some(line) = cli_override {
        return GeneratorSection::from_command_line(line);
    }
    if let Ok(line) = std::env::var("DECKFORGE_GENERATOR") {
        return GeneratorSection::from_command_line(&line);
    }
    match load_config() {
        Ok(config) => Ok(config.generator),
        Err(_) => bail!(
            "no generator configured\n\
             Pass --generator, set DECKFORGE_GENERATOR, or run `deckforge init`."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_line_into_command_and_args() {
        let section = GeneratorSection::from_command_line("llm -m gpt-4o").unwrap();
        assert_eq!(section.command, "llm");
        assert_eq!(section.args, vec!["-m", "gpt-4o"]);
        assert_eq!(section.timeout_secs, 120);
    }

    #[test]
    fn rejects_empty_command_line() {
        assert!(GeneratorSection::from_command_line("   ").is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ConfigFile {
            generator: GeneratorSection {
                command: "llm".to_string(),
                args: vec!["-m".to_string(), "gpt-4o".to_string()],
                timeout_secs: 60,
            },
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: ConfigFile = toml::from_str(&text).unwrap();
        assert_eq!(parsed.generator.command, "llm");
        assert_eq!(parsed.generator.timeout_secs, 60);
    }

    #[test]
    fn timeout_defaults_when_absent() {
        let parsed: ConfigFile = toml::from_str("[generator]\ncommand = \"llm\"\n").unwrap();
        assert_eq!(parsed.generator.timeout_secs, 120);
        assert!(parsed.generator.args.is_empty());
        assert_eq!(parsed.generator.timeout(), Duration::from_secs(120));
    }
}
