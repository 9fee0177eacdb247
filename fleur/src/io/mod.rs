//! Input/Output operations for resource planning
//!
//! This module handles logging setup and plan serialization.

mod output;

pub use output::{setup_output, write_plan};
