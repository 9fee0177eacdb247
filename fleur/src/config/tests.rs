//! Tests for configuration parsing and overrides

use super::{Args, Config};

const FULL_CONFIG: &str = r#"
kpoints: 100
options:
  queue: th1
  computer: iff003
  num_mpiprocs_per_machine: 16
queues:
  - computer: iff003
    queue_name: th1
    resources:
      num_machines: 1
      num_mpiprocs_per_machine: 16
    walltime_sec: 7200
sweep:
  max_cores: 32
"#;

#[test]
fn test_parse_full_config() {
    let config = serde_yml::from_str::<Config>(FULL_CONFIG)
        .unwrap()
        .with_defaults();

    assert_eq!(config.kpoints, Some(100));
    assert_eq!(config.options.queue.as_deref(), Some("th1"));
    assert_eq!(config.options.num_mpiprocs_per_machine, Some(16));
    assert_eq!(config.options.num_machines, None);
    assert_eq!(config.queues.len(), 1);
    assert_eq!(config.queues[0].walltime_sec, 7200);
    assert_eq!(config.sweep_max_cores(), Some(32));
    assert_eq!(config.sweep.as_ref().unwrap().enabled, Some(false));
}

#[test]
fn test_parse_minimal_config() {
    let config = serde_yml::from_str::<Config>("kpoints: 8\n")
        .unwrap()
        .with_defaults();

    assert_eq!(config.kpoints, Some(8));
    assert!(config.queues.is_empty());
    assert!(config.sweep.is_none());
    assert!(!config.is_sweep_enabled(&Args::default()));
}

#[test]
fn test_command_line_overrides() {
    let config = serde_yml::from_str::<Config>(FULL_CONFIG).unwrap();
    let args = Args {
        kpoints: Some(64),
        cores: Some(24),
        queue: Some("devel".to_string()),
        sweep: true,
        ..Args::default()
    };

    let options = config.options.clone().with_overrides(&args);
    assert_eq!(options.queue.as_deref(), Some("devel"));
    assert_eq!(options.computer.as_deref(), Some("iff003"));
    assert_eq!(options.num_mpiprocs_per_machine, Some(24));
    assert_eq!(config.kpoints(&args), Some(64));
    assert!(config.is_sweep_enabled(&args));
}
