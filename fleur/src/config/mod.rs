//! Configuration management for FLEUR resource planning
//!
//! This module handles the YAML configuration, its defaults, and the
//! merge with command-line overrides.

mod args;
#[cfg(test)]
mod tests;

pub use args::Args;

use fleur_rs::QueueDefaults;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub kpoints: Option<usize>,
    #[serde(default)]
    pub options: OptionsParams,
    /// Extra queue defaults, overriding built-in entries with the same key
    #[serde(default)]
    pub queues: Vec<QueueDefaults>,
    pub sweep: Option<SweepParams>,
}

/// Scheduler options as given by the user; unset values come from the
/// queue defaults or the built-in fallbacks.
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct OptionsParams {
    pub queue: Option<String>,
    pub computer: Option<String>,
    pub num_machines: Option<usize>,
    pub num_mpiprocs_per_machine: Option<usize>,
    pub max_wallclock_seconds: Option<u64>,
    pub custom_scheduler_commands: Option<String>,
}

impl OptionsParams {
    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(queue) = &args.queue {
            self.queue = Some(queue.clone());
        }
        if let Some(computer) = &args.computer {
            self.computer = Some(computer.clone());
        }
        if let Some(machines) = args.machines {
            self.num_machines = Some(machines);
        }
        if let Some(cores) = args.cores {
            self.num_mpiprocs_per_machine = Some(cores);
        }
        if let Some(walltime) = args.walltime {
            self.max_wallclock_seconds = Some(walltime);
        }
        self
    }
}

/// Sweep over requested rank counts
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SweepParams {
    pub enabled: Option<bool>,
    /// Largest rank count to report; defaults to the requested ranks
    pub max_cores: Option<usize>,
}

impl Default for SweepParams {
    fn default() -> Self {
        SweepParams {
            enabled: Some(false),
            max_cores: None,
        }
    }
}

impl SweepParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if let Some(sweep) = self.sweep.take() {
            self.sweep = Some(sweep.with_defaults());
        }
        self
    }

    /// Check if the sweep table is requested by either source
    pub fn is_sweep_enabled(&self, args: &Args) -> bool {
        args.sweep || self.sweep.as_ref().and_then(|s| s.enabled).unwrap_or(false)
    }

    pub fn sweep_max_cores(&self) -> Option<usize> {
        self.sweep.as_ref().and_then(|s| s.max_cores)
    }

    pub fn kpoints(&self, args: &Args) -> Option<usize> {
        args.kpoints.or(self.kpoints)
    }
}
