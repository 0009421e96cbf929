//! Worker process for parallel batch evaluation.
//!
//! Loads an evaluation snapshot from the staging file given as the single
//! command-line argument, then serves tasks over stdin/stdout: one JSON
//! task request per input line, one JSON task response per output line,
//! until stdin closes. Failures are reported per task; the process only
//! exits non-zero when the snapshot itself is unusable.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use ndarray::Array1;

use mdaf_benchmarks::snapshot::{evaluate_wrapped, EvaluationSnapshot};
use mdaf_benchmarks::worker_protocol::{TaskRequest, TaskResponse};

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: mdaf-worker <snapshot-file>");
        return ExitCode::from(2);
    };
    let path = std::path::PathBuf::from(path);

    let snapshot: EvaluationSnapshot = match File::open(&path) {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                eprintln!("mdaf-worker: malformed snapshot {}: {err}", path.display());
                return ExitCode::from(3);
            }
        },
        Err(err) => {
            eprintln!("mdaf-worker: cannot open snapshot {}: {err}", path.display());
            return ExitCode::from(3);
        }
    };
    // Resolve once up front so a formula unknown to this process fails the
    // whole worker instead of every task in turn.
    if let Err(err) = mdaf_benchmarks::registry::resolve(&snapshot.formula) {
        eprintln!("mdaf-worker: {err}");
        return ExitCode::from(3);
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    for line in stdin.lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        let response = handle(&line, &snapshot);
        if write_response(&mut stdout, &response).is_err() {
            break;
        }
    }
    ExitCode::SUCCESS
}

fn handle(line: &str, snapshot: &EvaluationSnapshot) -> TaskResponse {
    let request: TaskRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => return TaskResponse::failed(0, format!("malformed task request: {err}"), 0),
    };
    let position = Array1::from_vec(request.position);
    match panic::catch_unwind(AssertUnwindSafe(|| evaluate_wrapped(&position, snapshot))) {
        Ok(Ok(value)) if value.is_finite() => TaskResponse::completed(request.index, value, 1),
        // The formula ran, so the call counts, but a non-finite result is
        // a failed task.
        Ok(Ok(value)) => TaskResponse::failed(
            request.index,
            format!("non-finite evaluation result: {value}"),
            1,
        ),
        Ok(Err(err)) => TaskResponse::failed(request.index, err.to_string(), 0),
        Err(_) => TaskResponse::failed(request.index, "formula panicked", 1),
    }
}

fn write_response(stdout: &mut impl Write, response: &TaskResponse) -> io::Result<()> {
    match serde_json::to_string(response) {
        Ok(line) => writeln!(stdout, "{line}")?,
        // Responses hold only primitives, so encoding cannot realistically
        // fail; keep the protocol alive anyway.
        Err(err) => writeln!(
            stdout,
            "{{\"index\":{},\"error\":\"response encoding failed: {err}\",\"calls\":0}}",
            response.index
        )?,
    }
    stdout.flush()
}
