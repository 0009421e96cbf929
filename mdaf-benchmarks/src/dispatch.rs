//! Worker-pool dispatcher: parallel batch evaluation across independent
//! worker processes.
//!
//! Each batch stages its snapshot under a call-scoped unique temporary
//! file, spawns a bounded pool of `mdaf-worker` processes, and drives one
//! task per position over a newline-delimited JSON protocol. No memory is
//! shared with the workers; a failing task degrades only its own result
//! slot to the NaN sentinel.

use std::io::{BufRead, BufReader, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, ChildStdout, Command, Stdio};
use std::thread;

use ndarray::Array1;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::registry;
use crate::snapshot::EvaluationSnapshot;
use crate::worker_protocol::{TaskRequest, TaskResponse};

/// Environment variable overriding the worker binary location.
pub const WORKER_BIN_ENV: &str = "MDAF_WORKER_BIN";

/// Name of the worker binary searched for next to the current executable.
pub const WORKER_BIN_NAME: &str = "mdaf-worker";

/// Sentinel marking a failed task in a results vector.
pub const FAILED_TASK: f64 = f64::NAN;

/// Options for a parallel batch evaluation.
#[derive(Debug, Clone, Default)]
pub struct ParallelOptions {
    /// Upper bound on concurrent worker processes; defaults to the
    /// system's available parallelism.
    pub max_workers: Option<usize>,
    /// Explicit worker binary; defaults to `MDAF_WORKER_BIN`, then a
    /// binary named `mdaf-worker` next to the current executable.
    pub worker_bin: Option<PathBuf>,
    /// Directory for the staging artifact; defaults to the system temp
    /// directory.
    pub staging_dir: Option<PathBuf>,
}

impl ParallelOptions {
    /// Caps the number of concurrent worker processes.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = Some(max_workers);
        self
    }
}

/// Outcome of a parallel batch.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// One result per input position, in input order; failed tasks hold
    /// the NaN sentinel.
    pub values: Vec<f64>,
    /// Formula invocations reported by workers, for call-count
    /// aggregation in the caller. Failed tasks that still ran the
    /// formula (a panic, a non-finite result) are included.
    pub formula_calls: u64,
    /// Number of slots left at the sentinel.
    pub failed_tasks: usize,
}

enum TaskOutcome {
    Completed { value: f64, calls: u64 },
    Failed { message: String, calls: u64 },
}

/// Evaluates every position against the snapshot across a pool of worker
/// processes.
///
/// Validation failures, an unresolvable formula, a missing worker binary,
/// and staging I/O failures are fatal and abort before any task is
/// submitted. Per-task failures are logged and leave the sentinel at that
/// index only. The call blocks until every worker has been joined and the
/// staging artifact is removed on every exit path.
pub fn evaluate_batch(
    positions: &[Array1<f64>],
    snapshot: &EvaluationSnapshot,
    options: &ParallelOptions,
) -> Result<BatchReport> {
    if positions.is_empty() {
        return Err(Error::EmptyBatch);
    }
    for position in positions {
        if position.len() != snapshot.ndim {
            return Err(Error::PositionDimension {
                expected: snapshot.ndim,
                got: position.len(),
            });
        }
    }
    // The formula must resolve in this process before anything is staged;
    // an unknown id is fatal for the whole call.
    registry::resolve(&snapshot.formula)?;

    let worker_bin = locate_worker(options)?;
    let staging = stage_snapshot(snapshot, options)?;

    let max_workers = options.max_workers.unwrap_or_else(default_workers).max(1);
    let nworkers = max_workers.min(positions.len());

    // Worker w owns indices w, w + nworkers, w + 2*nworkers, ...
    let worker_outputs: Vec<Vec<(usize, TaskOutcome)>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..nworkers)
            .map(|w| {
                let worker_bin = worker_bin.as_path();
                let staging_path = staging.path();
                scope.spawn(move || {
                    let assigned: Vec<usize> =
                        (w..positions.len()).step_by(nworkers).collect();
                    run_worker(worker_bin, staging_path, &assigned, positions)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(outcomes) => outcomes,
                Err(_) => {
                    log::error!("worker manager thread panicked");
                    Vec::new()
                }
            })
            .collect()
    });

    let mut values = vec![FAILED_TASK; positions.len()];
    let mut formula_calls = 0u64;
    for (index, outcome) in worker_outputs.into_iter().flatten() {
        match outcome {
            TaskOutcome::Completed { value, calls } => {
                values[index] = value;
                formula_calls += calls;
            }
            TaskOutcome::Failed { message, calls } => {
                formula_calls += calls;
                log::error!("position at index {index} failed in worker: {message}");
            }
        }
    }
    let failed_tasks = values.iter().filter(|v| !v.is_finite()).count();

    // Close and remove the staging artifact before returning. Fatal exits
    // above remove it through the same RAII drop.
    staging.close()?;

    Ok(BatchReport {
        values,
        formula_calls,
        failed_tasks,
    })
}

/// Drives one worker process over its assigned indices, one task in
/// flight at a time. A dead or garbled worker ends its run early; unsent
/// and in-flight tasks keep the sentinel.
fn run_worker(
    worker_bin: &Path,
    staging: &Path,
    assigned: &[usize],
    positions: &[Array1<f64>],
) -> Vec<(usize, TaskOutcome)> {
    let mut outcomes = Vec::with_capacity(assigned.len());
    let mut child = match Command::new(worker_bin)
        .arg(staging)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            log::error!(
                "failed to spawn worker {}: {err}; {} tasks degraded",
                worker_bin.display(),
                assigned.len()
            );
            return outcomes;
        }
    };

    let mut stdin = child.stdin.take();
    let mut reader = child.stdout.take().map(BufReader::new);

    for &index in assigned {
        match exchange(&mut stdin, &mut reader, index, &positions[index]) {
            Some(outcome) => outcomes.push((index, outcome)),
            None => {
                log::error!(
                    "worker process exited early; tasks from index {index} degraded"
                );
                break;
            }
        }
    }

    // EOF on stdin tells the worker to exit; then reap it.
    drop(stdin);
    drop(reader);
    if let Err(err) = child.wait() {
        log::error!("failed to reap worker process: {err}");
    }

    outcomes
}

/// One request/response round trip. `None` means the worker is unusable
/// (pipe closed, process dead); a protocol-level problem for this task
/// only yields a `Failed` outcome.
fn exchange(
    stdin: &mut Option<ChildStdin>,
    reader: &mut Option<BufReader<ChildStdout>>,
    index: usize,
    position: &Array1<f64>,
) -> Option<TaskOutcome> {
    let stdin = stdin.as_mut()?;
    let reader = reader.as_mut()?;

    let request = TaskRequest {
        index,
        position: position.to_vec(),
    };
    let mut line = serde_json::to_string(&request).ok()?;
    line.push('\n');
    stdin.write_all(line.as_bytes()).ok()?;
    stdin.flush().ok()?;

    let mut response_line = String::new();
    let read = reader.read_line(&mut response_line).ok()?;
    if read == 0 {
        return None;
    }
    let response: TaskResponse = match serde_json::from_str(response_line.trim()) {
        Ok(response) => response,
        Err(err) => {
            return Some(TaskOutcome::Failed {
                message: format!("garbled worker response: {err}"),
                calls: 0,
            })
        }
    };
    if response.index != index {
        return Some(TaskOutcome::Failed {
            message: format!(
                "worker response index mismatch: expected {index}, got {}",
                response.index
            ),
            calls: response.calls,
        });
    }
    Some(match response.value {
        Some(value) => TaskOutcome::Completed {
            value,
            calls: response.calls,
        },
        None => TaskOutcome::Failed {
            message: response
                .error
                .unwrap_or_else(|| "unspecified worker error".to_string()),
            calls: response.calls,
        },
    })
}

/// Writes the snapshot to a call-scoped unique staging file.
fn stage_snapshot(
    snapshot: &EvaluationSnapshot,
    options: &ParallelOptions,
) -> Result<NamedTempFile> {
    let dir = options
        .staging_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    let staging = tempfile::Builder::new()
        .prefix("mdaf-snapshot-")
        .suffix(".json")
        .tempfile_in(dir)?;
    serde_json::to_writer(staging.as_file(), snapshot)
        .map_err(|source| Error::SnapshotEncode { source })?;
    Ok(staging)
}

fn locate_worker(options: &ParallelOptions) -> Result<PathBuf> {
    if let Some(path) = &options.worker_bin {
        if path.is_file() {
            return Ok(path.clone());
        }
        return Err(Error::WorkerNotFound { path: path.clone() });
    }
    if let Ok(path) = std::env::var(WORKER_BIN_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Ok(path);
        }
        return Err(Error::WorkerNotFound { path });
    }

    // Next to the current executable, then one directory up: test
    // binaries live in target/<profile>/deps while bins land in
    // target/<profile>.
    let exe = std::env::current_exe()?;
    let name = format!("{WORKER_BIN_NAME}{}", std::env::consts::EXE_SUFFIX);
    let mut candidates = Vec::new();
    if let Some(dir) = exe.parent() {
        candidates.push(dir.join(&name));
        if let Some(updir) = dir.parent() {
            candidates.push(updir.join(&name));
        }
    }
    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }
    Err(Error::WorkerNotFound {
        path: candidates.pop().unwrap_or_else(|| PathBuf::from(name)),
    })
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
