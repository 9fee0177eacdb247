use fleur_rs::{BalanceEntry, QueueRegistry, ResourcePlan};
use tracing::info;

pub fn report_plan(plan: &ResourcePlan) {
    let resources = &plan.options.resources;

    info!("\nResource plan for {} k-points:", plan.nkpoints);
    if let Some(queue) = &plan.options.queue_name {
        info!("  Queue:                  {}", queue);
    }
    info!("  Machines:               {}", resources.num_machines);
    info!(
        "  MPI ranks per machine:  {} (requested {})",
        plan.resolved_mpiprocs_per_machine, plan.requested_mpiprocs_per_machine
    );
    info!("  Total MPI ranks:        {}", plan.total_mpiprocs());
    info!("  K-points per rank:      {}", plan.kpoints_per_rank);
    info!("  Walltime:               {} s", plan.options.max_wallclock_seconds);

    if plan.was_adjusted() {
        info!(
            "  {} core(s) per machine left idle to keep the k-point load even",
            plan.idle_cores_per_machine
        );
    }
}

pub fn report_sweep(nkpoints: usize, rows: &[BalanceEntry]) {
    info!("\nBalancing sweep for {} k-points:", nkpoints);
    info!("{:>10} {:>10} {:>6} {:>10}", "Requested", "Resolved", "Idle", "K/rank");
    info!("{}", "-".repeat(39));
    for row in rows {
        info!(
            "{:>10} {:>10} {:>6} {:>10}",
            row.requested_cores, row.resolved_cores, row.idle_cores, row.kpoints_per_rank
        );
    }
}

pub fn report_queues(registry: &QueueRegistry) {
    info!("\nKnown queue defaults:");
    for entry in registry.entries() {
        info!(
            "  {:<12} {:<10} {} x {:>3} ranks, {:>6} s",
            entry.queue_name,
            entry.computer.as_deref().unwrap_or("*"),
            entry.resources.num_machines,
            entry.resources.num_mpiprocs_per_machine,
            entry.walltime_sec
        );
    }
}
