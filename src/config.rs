//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.hopstats.toml` files. The defaults reproduce the fixed-name contract:
//! read `log.txt`, write `search_performance.log`, plot with gnuplot.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input log settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// Plotter settings.
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Input log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path of the input log.
    #[serde(default = "default_input")]
    pub path: String,

    /// Marker substring that selects lines of interest.
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input(),
            marker: default_marker(),
        }
    }
}

fn default_input() -> String {
    "log.txt".to_string()
}

fn default_marker() -> String {
    "key_found".to_string()
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path of the output summary file.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "search_performance.log".to_string()
}

/// Plotter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Whether to invoke the plotter after writing the report.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program to run.
    #[serde(default = "default_plot_command")]
    pub command: String,

    /// Script file passed to the program.
    #[serde(default = "default_plot_script")]
    pub script: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_plot_command(),
            script: default_plot_script(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_plot_command() -> String {
    "gnuplot".to_string()
}

fn default_plot_script() -> String {
    "search_performance.gp".to_string()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".hopstats.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; only values
    /// the user explicitly provided override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.input.path = input.display().to_string();
        }
        if let Some(ref marker) = args.marker {
            self.input.marker = marker.clone();
        }
        if let Some(ref output) = args.output {
            self.report.output = output.display().to_string();
        }
        if let Some(ref command) = args.plot_command {
            self.plot.command = command.clone();
        }
        if let Some(ref script) = args.plot_script {
            self.plot.script = script.clone();
        }
        if args.no_plot {
            self.plot.enabled = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_fixed_names() {
        let config = Config::default();
        assert_eq!(config.input.path, "log.txt");
        assert_eq!(config.input.marker, "key_found");
        assert_eq!(config.report.output, "search_performance.log");
        assert_eq!(config.plot.command, "gnuplot");
        assert_eq!(config.plot.script, "search_performance.gp");
        assert!(config.plot.enabled);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[input]
path = "runs/search.log"
marker = "hit"

[report]
output = "runs/summary.log"

[plot]
enabled = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.path, "runs/search.log");
        assert_eq!(config.input.marker, "hit");
        assert_eq!(config.report.output, "runs/summary.log");
        assert!(!config.plot.enabled);
        // Unset fields keep their defaults.
        assert_eq!(config.plot.command, "gnuplot");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = toml::from_str("[input]\nmarker = \"found\"\n").unwrap();
        assert_eq!(config.input.marker, "found");
        assert_eq!(config.input.path, "log.txt");
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("[plot]"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(Config::load(Path::new("/nonexistent/.hopstats.toml")).is_err());
    }
}
