use crate::config::OptionsParams;
use color_eyre::eyre::Result;
use fleur_rs::{ComputeOptions, QueueRegistry};
use tracing::info;

/// Build compute options from queue defaults and explicit values.
///
/// Explicit values win over the queue defaults, which win over the
/// built-in fallbacks of [`ComputeOptions::default`].
pub fn resolve_options(params: &OptionsParams, registry: &QueueRegistry) -> Result<ComputeOptions> {
    let mut options = match &params.queue {
        Some(queue) => {
            let defaults = registry.require(queue, params.computer.as_deref())?;
            info!(
                "Using defaults of queue {}: {} machine(s) x {} ranks, {} s",
                queue,
                defaults.resources.num_machines,
                defaults.resources.num_mpiprocs_per_machine,
                defaults.walltime_sec
            );
            defaults.to_options()
        }
        None => ComputeOptions::default(),
    };

    if let Some(machines) = params.num_machines {
        options.resources.num_machines = machines;
    }
    if let Some(cores) = params.num_mpiprocs_per_machine {
        options.resources.num_mpiprocs_per_machine = cores;
    }
    if let Some(walltime) = params.max_wallclock_seconds {
        options.max_wallclock_seconds = walltime;
    }
    if let Some(commands) = &params.custom_scheduler_commands {
        options.custom_scheduler_commands = Some(commands.clone());
    }

    options.validate()?;
    Ok(options)
}
