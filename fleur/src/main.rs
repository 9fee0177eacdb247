//! FLEUR resource planning command-line interface
//!
//! Balances the MPI ranks of a calculation against its k-points, starting
//! from queue defaults and a YAML configuration.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::FleurApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    FleurApplication::from_cli()?.run()
}
