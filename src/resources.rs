//! Scheduler options attached to a FLEUR calculation
//!
//! Field names follow the option dictionary the workflow engine hands to the
//! scheduler, so the structures serialize straight into a submission
//! options block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::balance::BalanceError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResourceError {
    #[error("invalid compute options: {0}")]
    InvalidOptions(String),

    #[error("no queue defaults for queue '{queue}'{}", computer_suffix(.computer))]
    UnknownQueue {
        queue: String,
        computer: Option<String>,
    },

    #[error(transparent)]
    Balance(#[from] BalanceError),
}

fn computer_suffix(computer: &Option<String>) -> String {
    match computer {
        Some(name) => format!(" on computer '{}'", name),
        None => String::new(),
    }
}

/// Node and rank allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub num_machines: usize,
    pub num_mpiprocs_per_machine: usize,
}

impl Resources {
    pub fn new(num_machines: usize, num_mpiprocs_per_machine: usize) -> Self {
        Self {
            num_machines,
            num_mpiprocs_per_machine,
        }
    }

    /// Callers pass options through [`ComputeOptions::validate`] first, which
    /// rejects allocations whose product overflows.
    pub fn total_mpiprocs(&self) -> usize {
        self.num_machines * self.num_mpiprocs_per_machine
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeOptions {
    pub resources: Resources,
    pub max_wallclock_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_scheduler_commands: Option<String>,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        ComputeOptions {
            resources: Resources::default(),
            max_wallclock_seconds: 3600,
            queue_name: None,
            custom_scheduler_commands: None,
        }
    }
}

impl ComputeOptions {
    pub fn new(resources: Resources, max_wallclock_seconds: u64) -> Self {
        Self {
            resources,
            max_wallclock_seconds,
            ..Self::default()
        }
    }

    pub fn with_queue(mut self, queue_name: impl Into<String>) -> Self {
        self.queue_name = Some(queue_name.into());
        self
    }

    /// Reject allocations the scheduler could never satisfy
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.resources.num_machines == 0 {
            return Err(ResourceError::InvalidOptions(
                "num_machines must be at least 1".to_string(),
            ));
        }
        if self.resources.num_mpiprocs_per_machine == 0 {
            return Err(ResourceError::InvalidOptions(
                "num_mpiprocs_per_machine must be at least 1".to_string(),
            ));
        }
        if self
            .resources
            .num_machines
            .checked_mul(self.resources.num_mpiprocs_per_machine)
            .is_none()
        {
            return Err(ResourceError::InvalidOptions(format!(
                "{} machines x {} MPI ranks overflows the total rank count",
                self.resources.num_machines, self.resources.num_mpiprocs_per_machine
            )));
        }
        if self.max_wallclock_seconds == 0 {
            return Err(ResourceError::InvalidOptions(
                "max_wallclock_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
