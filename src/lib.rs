// Resource helpers for FLEUR calculations on HPC queues

pub mod balance;
pub mod plan;
pub mod queue;
pub mod resources;

pub use balance::{gcd, resolve_core_count, sweep, BalanceEntry, BalanceError};
pub use plan::ResourcePlan;
pub use queue::{QueueDefaults, QueueRegistry};
pub use resources::{ComputeOptions, ResourceError, Resources};
