//! Default resources for known HPC queues
//!
//! Lookups prefer an entry registered for the exact computer and fall back
//! to a computer-agnostic entry with the same queue name.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resources::{ComputeOptions, ResourceError, Resources};

/// Default allocation for one queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueDefaults {
    /// `None` matches any computer
    #[serde(default)]
    pub computer: Option<String>,
    pub queue_name: String,
    pub resources: Resources,
    pub walltime_sec: u64,
}

impl QueueDefaults {
    pub fn new(
        computer: Option<&str>,
        queue_name: &str,
        num_machines: usize,
        num_mpiprocs_per_machine: usize,
        walltime_sec: u64,
    ) -> Self {
        Self {
            computer: computer.map(str::to_string),
            queue_name: queue_name.to_string(),
            resources: Resources::new(num_machines, num_mpiprocs_per_machine),
            walltime_sec,
        }
    }

    pub fn to_options(&self) -> ComputeOptions {
        ComputeOptions::new(self.resources, self.walltime_sec).with_queue(self.queue_name.clone())
    }

    fn same_key(&self, other: &QueueDefaults) -> bool {
        self.computer == other.computer && self.queue_name == other.queue_name
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueueRegistry {
    entries: Vec<QueueDefaults>,
}

impl QueueRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues of the in-house cluster plus generic development/batch queues
    pub fn builtin() -> Self {
        let entries = vec![
            QueueDefaults::new(Some("iff003"), "th1", 1, 12, 24 * 3600),
            QueueDefaults::new(Some("iff003"), "th1_small", 1, 12, 20 * 60),
            QueueDefaults::new(Some("iff003"), "th123_node", 1, 24, 24 * 3600),
            QueueDefaults::new(None, "devel", 1, 24, 30 * 60),
            QueueDefaults::new(None, "batch", 2, 24, 6 * 3600),
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[QueueDefaults] {
        &self.entries
    }

    /// Add entries, replacing any with the same computer and queue name
    pub fn extend<I: IntoIterator<Item = QueueDefaults>>(&mut self, entries: I) {
        for entry in entries {
            match self.entries.iter_mut().find(|e| e.same_key(&entry)) {
                Some(existing) => {
                    debug!(
                        "Overriding queue defaults for {} ({:?})",
                        entry.queue_name, entry.computer
                    );
                    *existing = entry;
                }
                None => self.entries.push(entry),
            }
        }
    }

    pub fn lookup(&self, queue_name: &str, computer: Option<&str>) -> Option<&QueueDefaults> {
        let exact = computer.and_then(|name| {
            self.entries
                .iter()
                .find(|e| e.queue_name == queue_name && e.computer.as_deref() == Some(name))
        });

        exact.or_else(|| {
            self.entries
                .iter()
                .find(|e| e.queue_name == queue_name && e.computer.is_none())
        })
    }

    /// Like [`lookup`](Self::lookup) but unknown queues are an error
    pub fn require(&self, queue_name: &str, computer: Option<&str>) -> Result<&QueueDefaults, ResourceError> {
        self.lookup(queue_name, computer)
            .ok_or_else(|| ResourceError::UnknownQueue {
                queue: queue_name.to_string(),
                computer: computer.map(str::to_string),
            })
    }
}
