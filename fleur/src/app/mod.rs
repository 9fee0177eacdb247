mod options;
mod report;
#[cfg(test)]
mod tests;

pub use options::resolve_options;

use self::report::{report_plan, report_queues, report_sweep};
use crate::config::{Args, Config};
use crate::io::{setup_output, write_plan};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use fleur_rs::{sweep, BalanceEntry, QueueRegistry, ResourcePlan};
use std::fs::{self, File};
use tracing::info;

pub struct FleurApplication {
    args: Args,
    config: Config,
}

impl FleurApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref())?;
        execute(&self.args, self.config)?;
        Ok(())
    }
}

/// What a run produced; `None` from [`execute`] means only the queue list
/// was requested.
#[derive(Debug)]
pub struct RunOutcome {
    pub plan: ResourcePlan,
    pub sweep: Option<Vec<BalanceEntry>>,
}

/// Resolve options, balance them and emit the reports and plan file
pub fn execute(args: &Args, mut config: Config) -> Result<Option<RunOutcome>> {
    let mut registry = QueueRegistry::builtin();
    registry.extend(std::mem::take(&mut config.queues));

    if args.list_queues {
        report_queues(&registry);
        return Ok(None);
    }

    let nkpoints = config.kpoints(args).ok_or_else(|| {
        eyre!("Number of k-points not given; use --kpoints or set `kpoints` in the configuration")
    })?;

    let params = config.options.clone().with_overrides(args);
    let options = resolve_options(&params, &registry)?;
    let plan = ResourcePlan::balance(&options, nkpoints)
        .wrap_err("Unable to balance MPI ranks against k-points")?;
    report_plan(&plan);

    let rows = if config.is_sweep_enabled(args) {
        let max_cores = config
            .sweep_max_cores()
            .unwrap_or(plan.requested_mpiprocs_per_machine);
        let rows = sweep(nkpoints, max_cores)?;
        report_sweep(nkpoints, &rows);
        Some(rows)
    } else {
        None
    };

    if let Some(ref path) = args.plan_output {
        let mut file =
            File::create(path).wrap_err_with(|| format!("Unable to create plan file: {}", path))?;
        write_plan(&mut file, &plan)?;
        info!("Plan written to {}", path);
    }

    Ok(Some(RunOutcome { plan, sweep: rows }))
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config_file else {
        return Ok(Config::default());
    };

    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
