//! Command-line argument parsing for FLEUR resource planning

use clap::Parser;

/// Balance MPI ranks against k-points before submitting a FLEUR calculation
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Number of k-points of the calculation
    #[arg(short, long)]
    pub kpoints: Option<usize>,

    /// Requested MPI ranks per machine
    #[arg(long)]
    pub cores: Option<usize>,

    /// Number of machines (nodes)
    #[arg(long)]
    pub machines: Option<usize>,

    /// Queue whose defaults seed the compute options
    #[arg(short, long)]
    pub queue: Option<String>,

    /// Computer the queue belongs to
    #[arg(long)]
    pub computer: Option<String>,

    /// Maximum wallclock time in seconds
    #[arg(long)]
    pub walltime: Option<u64>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the balanced plan as YAML to this file
    #[arg(long)]
    pub plan_output: Option<String>,

    /// Log the balancing result for every rank count up to the request
    #[arg(long)]
    pub sweep: bool,

    /// Log the known queue defaults and exit
    #[arg(long)]
    pub list_queues: bool,
}
