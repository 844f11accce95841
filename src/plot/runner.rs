//! External plotter invocation.
//!
//! After the report is written, the plotting tool is launched as a separate
//! process. Its output and exit status are not surfaced to the caller: a
//! failed plot never fails the run. The invocation lives behind
//! [`PlotOptions`] so tests can point it at a harmless command.

use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Options for launching the external plotting tool.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Program to run, e.g. `gnuplot`.
    pub command: String,
    /// Script file passed as the single argument, if any. The script is
    /// expected to live in the working directory.
    pub script: Option<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            command: "gnuplot".to_string(),
            script: Some("search_performance.gp".to_string()),
        }
    }
}

/// Invoke the plotting tool and wait for it to finish.
///
/// Spawn failures and non-zero exits are logged at warn level and otherwise
/// ignored; the process exits as if the plot succeeded.
pub fn invoke_plotter(options: &PlotOptions) {
    let mut command = Command::new(&options.command);
    if let Some(ref script) = options.script {
        command.arg(script);
    }
    command.stdout(Stdio::null()).stderr(Stdio::null());

    debug!(
        "Invoking plotter: {} {}",
        options.command,
        options.script.as_deref().unwrap_or("")
    );

    match command.status() {
        Ok(status) if status.success() => {
            debug!("Plotter finished successfully");
        }
        Ok(status) => {
            warn!("Plot command {:?} exited with {}", options.command, status);
        }
        Err(e) => {
            warn!("Failed to launch plot command {:?}: {}", options.command, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_options_default() {
        let opts = PlotOptions::default();
        assert_eq!(opts.command, "gnuplot");
        assert_eq!(opts.script.as_deref(), Some("search_performance.gp"));
    }

    #[test]
    fn test_invoke_plotter_success() {
        let opts = PlotOptions {
            command: "true".to_string(),
            script: None,
        };
        // Must not panic or propagate anything.
        invoke_plotter(&opts);
    }

    #[test]
    fn test_invoke_plotter_nonzero_exit_is_ignored() {
        let opts = PlotOptions {
            command: "false".to_string(),
            script: None,
        };
        invoke_plotter(&opts);
    }

    #[test]
    fn test_invoke_plotter_missing_command_is_ignored() {
        let opts = PlotOptions {
            command: "hopstats-no-such-plotter".to_string(),
            script: Some("search_performance.gp".to_string()),
        };
        invoke_plotter(&opts);
    }
}
