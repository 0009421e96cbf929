//! End-to-end tests of the worker-pool dispatcher against the real
//! `mdaf-worker` binary.

use ndarray::Array1;

use mdaf_benchmarks::{ObjectiveFunction, ParallelOptions};

fn worker_options() -> ParallelOptions {
    ParallelOptions {
        worker_bin: Some(env!("CARGO_BIN_EXE_mdaf-worker").into()),
        ..Default::default()
    }
}

#[test]
fn parallel_matches_serial_and_counts_calls() {
    let sphere = ObjectiveFunction::new("sphere").unwrap();
    let positions: Vec<Array1<f64>> = (0..17)
        .map(|i| Array1::from_vec(vec![i as f64 * 0.25, -(i as f64) * 0.5]))
        .collect();

    let parallel = sphere
        .parallel_evaluate(&positions, &worker_options())
        .unwrap();
    assert_eq!(parallel.len(), positions.len());
    assert_eq!(sphere.call_count(), positions.len() as u64);

    let serial = ObjectiveFunction::new("sphere").unwrap();
    for (position, &value) in positions.iter().zip(&parallel) {
        assert_eq!(value, serial.evaluate(position).unwrap());
    }
}

#[test]
fn results_are_index_stable_with_one_worker() {
    let sphere = ObjectiveFunction::new("sphere").unwrap();
    let positions: Vec<Array1<f64>> = (0..5)
        .map(|i| Array1::from_vec(vec![i as f64, 0.0]))
        .collect();

    let options = worker_options().with_max_workers(1);
    let values = sphere.parallel_evaluate(&positions, &options).unwrap();
    assert_eq!(values, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
}

#[test]
fn workers_apply_shift_and_deterministic_noise() {
    let mut sphere = ObjectiveFunction::new("sphere").unwrap();
    sphere.apply_shift(Array1::from_vec(vec![1.0, 1.0])).unwrap();
    sphere.apply_noise(2.5, 0.0).unwrap();

    let positions = vec![
        Array1::from_vec(vec![1.0, 1.0]),
        Array1::from_vec(vec![2.0, 1.0]),
    ];
    let values = sphere
        .parallel_evaluate(&positions, &worker_options())
        .unwrap();
    assert_eq!(values, vec![2.5, 3.5]);
}

#[test]
fn one_failing_task_degrades_only_its_own_slot() {
    // alpine_n2 takes a square root per coordinate, so a negative
    // coordinate produces NaN and the worker reports the task as failed.
    let alpine = ObjectiveFunction::new("alpine_n2").unwrap();
    let positions = vec![
        Array1::from_vec(vec![2.0, 2.0]),
        Array1::from_vec(vec![-1.0, 3.0]),
        Array1::from_vec(vec![3.0, 3.0]),
    ];

    let values = alpine
        .parallel_evaluate(&positions, &worker_options())
        .unwrap();
    assert!(values[0].is_finite());
    assert!(values[1].is_nan());
    assert!(values[2].is_finite());
    // The failing task still invoked the formula once.
    assert_eq!(alpine.call_count(), 3);
}

#[test]
fn overflowing_results_degrade_to_the_sentinel() {
    // Sphere overflows to infinity at extreme coordinates. Serial
    // evaluation returns the infinity; a worker cannot transmit it over
    // the JSON protocol and reports the task as failed instead.
    let sphere = ObjectiveFunction::new("sphere").unwrap();
    let positions = vec![
        Array1::from_vec(vec![1.0, 1.0]),
        Array1::from_vec(vec![1e308, 1e308]),
    ];

    let serial = ObjectiveFunction::new("sphere").unwrap();
    assert_eq!(
        serial.evaluate(&positions[1]).unwrap(),
        f64::INFINITY
    );

    let values = sphere
        .parallel_evaluate(&positions, &worker_options())
        .unwrap();
    assert_eq!(values[0], 2.0);
    assert!(values[1].is_nan());
    // The overflowing task still ran the formula.
    assert_eq!(sphere.call_count(), 2);
}

#[test]
fn staging_artifact_is_removed_after_each_batch() {
    let staging_dir = tempfile::tempdir().unwrap();
    let options = ParallelOptions {
        staging_dir: Some(staging_dir.path().to_path_buf()),
        ..worker_options()
    };

    let sphere = ObjectiveFunction::new("sphere").unwrap();
    let positions = vec![Array1::zeros(2), Array1::from_vec(vec![1.0, 1.0])];
    for _ in 0..2 {
        sphere.parallel_evaluate(&positions, &options).unwrap();
        let leftover = std::fs::read_dir(staging_dir.path()).unwrap().count();
        assert_eq!(leftover, 0);
    }
}

#[test]
fn batch_larger_than_the_pool_completes() {
    let rastrigin = ObjectiveFunction::builder("rastrigin")
        .ndim(4)
        .build()
        .unwrap();
    let positions: Vec<Array1<f64>> = (0..50)
        .map(|i| Array1::from_vec(vec![i as f64 * 0.1; 4]))
        .collect();

    let options = worker_options().with_max_workers(3);
    let values = rastrigin.parallel_evaluate(&positions, &options).unwrap();

    let serial = ObjectiveFunction::builder("rastrigin")
        .ndim(4)
        .build()
        .unwrap();
    for (position, &value) in positions.iter().zip(&values) {
        let expected = serial.evaluate(position).unwrap();
        assert!((value - expected).abs() < 1e-12);
    }
}
