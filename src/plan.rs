//! Apply core-count balancing to a set of compute options

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::balance::resolve_core_count;
use crate::resources::{ComputeOptions, ResourceError};

/// Compute options adjusted so every MPI rank on a machine gets the same
/// number of k-points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub nkpoints: usize,
    pub requested_mpiprocs_per_machine: usize,
    pub resolved_mpiprocs_per_machine: usize,
    pub idle_cores_per_machine: usize,
    pub kpoints_per_rank: usize,
    pub options: ComputeOptions,
}

impl ResourcePlan {
    pub fn balance(options: &ComputeOptions, nkpoints: usize) -> Result<Self, ResourceError> {
        options.validate()?;

        let requested = options.resources.num_mpiprocs_per_machine;
        let resolved = resolve_core_count(nkpoints, requested)?;
        if resolved < requested {
            debug!(
                "Lowering MPI ranks per machine from {} to {} for {} k-points",
                requested, resolved, nkpoints
            );
        }

        let mut adjusted = options.clone();
        adjusted.resources.num_mpiprocs_per_machine = resolved;

        Ok(Self {
            nkpoints,
            requested_mpiprocs_per_machine: requested,
            resolved_mpiprocs_per_machine: resolved,
            idle_cores_per_machine: requested - resolved,
            kpoints_per_rank: nkpoints / resolved,
            options: adjusted,
        })
    }

    pub fn was_adjusted(&self) -> bool {
        self.resolved_mpiprocs_per_machine != self.requested_mpiprocs_per_machine
    }

    pub fn total_mpiprocs(&self) -> usize {
        self.options.resources.total_mpiprocs()
    }
}
