//! Tests for the resource planning run flow

use super::{execute, load_config};
use crate::config::{Args, Config};
use fleur_rs::{ResourcePlan, Resources};
use std::fs;
use std::path::PathBuf;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fleur-{}-{}", std::process::id(), name))
}

#[test]
fn test_missing_kpoints_is_an_error() {
    let err = execute(&Args::default(), Config::default()).unwrap_err();
    assert!(err.to_string().contains("Number of k-points not given"));
}

#[test]
fn test_list_queues_returns_before_planning() {
    let plan_path = scratch_path("list-queues-plan.yaml");
    let args = Args {
        list_queues: true,
        kpoints: Some(10),
        plan_output: Some(plan_path.to_string_lossy().into_owned()),
        ..Args::default()
    };

    let outcome = execute(&args, Config::default()).unwrap();
    assert!(outcome.is_none());
    assert!(!plan_path.exists());
}

#[test]
fn test_sweep_defaults_to_requested_ranks() {
    let args = Args {
        kpoints: Some(12),
        cores: Some(8),
        sweep: true,
        ..Args::default()
    };

    let outcome = execute(&args, Config::default()).unwrap().unwrap();
    let rows = outcome.sweep.unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows.last().unwrap().resolved_cores, 6);
    assert_eq!(outcome.plan.resolved_mpiprocs_per_machine, 6);
}

#[test]
fn test_no_sweep_unless_requested() {
    let args = Args {
        kpoints: Some(12),
        cores: Some(8),
        ..Args::default()
    };

    let outcome = execute(&args, Config::default()).unwrap().unwrap();
    assert!(outcome.sweep.is_none());
}

#[test]
fn test_command_line_over_config_over_queue_defaults() {
    let config = serde_yml::from_str::<Config>(
        r#"
kpoints: 48
options:
  queue: th1
  computer: iff003
  num_machines: 3
  num_mpiprocs_per_machine: 12
"#,
    )
    .unwrap()
    .with_defaults();
    let args = Args {
        kpoints: Some(100),
        cores: Some(8),
        ..Args::default()
    };

    let plan = execute(&args, config).unwrap().unwrap().plan;
    assert_eq!(plan.nkpoints, 100);
    assert_eq!(plan.requested_mpiprocs_per_machine, 8);
    assert_eq!(plan.options.resources, Resources::new(3, 5));
    assert_eq!(plan.options.max_wallclock_seconds, 86400);
    assert_eq!(plan.options.queue_name.as_deref(), Some("th1"));
}

#[test]
fn test_config_queue_entries_extend_registry() {
    let config = serde_yml::from_str::<Config>(
        r#"
kpoints: 56
options:
  queue: booster
  computer: jureca
queues:
  - computer: jureca
    queue_name: booster
    resources:
      num_machines: 1
      num_mpiprocs_per_machine: 48
    walltime_sec: 3600
"#,
    )
    .unwrap();

    let plan = execute(&Args::default(), config).unwrap().unwrap().plan;
    assert_eq!(plan.resolved_mpiprocs_per_machine, 28);
    assert_eq!(plan.idle_cores_per_machine, 20);
}

#[test]
fn test_plan_output_written_and_read_back() {
    let plan_path = scratch_path("plan.yaml");
    let args = Args {
        kpoints: Some(100),
        cores: Some(16),
        plan_output: Some(plan_path.to_string_lossy().into_owned()),
        ..Args::default()
    };

    let plan = execute(&args, Config::default()).unwrap().unwrap().plan;
    let text = fs::read_to_string(&plan_path).unwrap();
    let _ = fs::remove_file(&plan_path);

    let written: ResourcePlan = serde_yml::from_str(&text).unwrap();
    assert_eq!(written, plan);
    assert_eq!(written.resolved_mpiprocs_per_machine, 10);
}

#[test]
fn test_load_config_from_file() {
    let config_path = scratch_path("config.yaml");
    fs::write(&config_path, "kpoints: 20\nsweep:\n  max_cores: 4\n").unwrap();
    let args = Args {
        config_file: Some(config_path.to_string_lossy().into_owned()),
        ..Args::default()
    };

    let config = load_config(&args).unwrap();
    let _ = fs::remove_file(&config_path);

    assert_eq!(config.kpoints, Some(20));
    assert_eq!(config.sweep.as_ref().unwrap().enabled, Some(false));
    assert_eq!(config.sweep_max_cores(), Some(4));
}

#[test]
fn test_load_config_without_file() {
    let config = load_config(&Args::default()).unwrap();
    assert!(config.kpoints.is_none());
}
