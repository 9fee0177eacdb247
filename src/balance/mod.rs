//! Core-count balancing for k-point parallel FLEUR runs
//!
//! FLEUR distributes k-points over MPI ranks. A rank count that does not
//! divide the number of k-points leaves some ranks idle for part of every
//! iteration, so before submission the requested rank count is lowered to
//! the largest value that divides the k-points evenly.
//!
//! # Usage
//!
//! ```
//! use fleur_rs::balance::resolve_core_count;
//!
//! // 100 k-points on a 16-core node: 10 ranks get exactly 10 k-points each
//! assert_eq!(resolve_core_count(100, 16).unwrap(), 10);
//! ```


use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when balancing inputs are out of range
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("invalid argument: {name} must be at least 1, got {value}")]
    InvalidArgument { name: &'static str, value: usize },
}

/// Greatest common divisor by iterative Euclidean reduction.
///
/// `gcd(a, 0) == a`, so `gcd(0, 0) == 0`.
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Largest core count in `[gcd(work_units, requested_cores), requested_cores]`
/// that divides `work_units` evenly.
///
/// The gcd is always a divisor of `work_units`, so the range is never empty
/// of candidates and the gcd is returned when nothing larger qualifies.
pub fn resolve_core_count(work_units: usize, requested_cores: usize) -> Result<usize, BalanceError> {
    check_positive("work_units", work_units)?;
    check_positive("requested_cores", requested_cores)?;

    let lower = gcd(work_units, requested_cores);
    let resolved = (lower..=requested_cores)
        .rev()
        .find(|cores| work_units % cores == 0)
        .unwrap_or(lower);

    Ok(resolved)
}

/// One row of a balancing sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub requested_cores: usize,
    pub resolved_cores: usize,
    pub idle_cores: usize,
    pub kpoints_per_rank: usize,
}

impl BalanceEntry {
    fn compute(work_units: usize, requested_cores: usize) -> Result<Self, BalanceError> {
        let resolved_cores = resolve_core_count(work_units, requested_cores)?;
        Ok(Self {
            requested_cores,
            resolved_cores,
            idle_cores: requested_cores - resolved_cores,
            kpoints_per_rank: work_units / resolved_cores,
        })
    }
}

/// Balance `work_units` against every request in `1..=max_cores`.
///
/// Rows are computed in parallel and returned in ascending request order.
pub fn sweep(work_units: usize, max_cores: usize) -> Result<Vec<BalanceEntry>, BalanceError> {
    check_positive("work_units", work_units)?;
    check_positive("max_cores", max_cores)?;

    (1..=max_cores)
        .into_par_iter()
        .map(|requested| BalanceEntry::compute(work_units, requested))
        .collect()
}

fn check_positive(name: &'static str, value: usize) -> Result<(), BalanceError> {
    if value < 1 {
        return Err(BalanceError::InvalidArgument { name, value });
    }
    Ok(())
}
