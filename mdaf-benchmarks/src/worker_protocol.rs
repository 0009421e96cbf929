//! Wire types for the dispatcher/worker line protocol.
//!
//! One JSON object per line in each direction: the dispatcher writes a
//! [`TaskRequest`] to the worker's stdin and reads one [`TaskResponse`]
//! from its stdout before sending the next request. Values are only ever
//! transmitted when finite, so the JSON never needs to carry NaN.

use serde::{Deserialize, Serialize};

/// One evaluation task: a position and its slot in the results vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Index of the position in the submitted batch.
    pub index: usize,
    /// The position to evaluate.
    pub position: Vec<f64>,
}

/// Worker answer for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Index copied from the request.
    pub index: usize,
    /// The finite evaluation result, absent on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Failure description, absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of formula invocations this task consumed, reported so the
    /// dispatcher can aggregate call counts across processes.
    #[serde(default)]
    pub calls: u64,
}

impl TaskResponse {
    /// A successful evaluation.
    pub fn completed(index: usize, value: f64, calls: u64) -> Self {
        Self {
            index,
            value: Some(value),
            error: None,
            calls,
        }
    }

    /// A failed task.
    pub fn failed(index: usize, error: impl Into<String>, calls: u64) -> Self {
        Self {
            index,
            value: None,
            error: Some(error.into()),
            calls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_as_single_lines() {
        let request = TaskRequest {
            index: 7,
            position: vec![1.0, -2.5],
        };
        let line = serde_json::to_string(&request).unwrap();
        assert!(!line.contains('\n'));
        let decoded: TaskRequest = serde_json::from_str(&line).unwrap();
        assert_eq!(request, decoded);

        let response = TaskResponse::completed(7, 3.5, 1);
        let line = serde_json::to_string(&response).unwrap();
        assert!(!line.contains("error"));
        let decoded: TaskResponse = serde_json::from_str(&line).unwrap();
        assert_eq!(response, decoded);
    }

    #[test]
    fn failure_carries_the_message() {
        let response = TaskResponse::failed(3, "formula panicked", 1);
        let line = serde_json::to_string(&response).unwrap();
        let decoded: TaskResponse = serde_json::from_str(&line).unwrap();
        assert_eq!(decoded.error.as_deref(), Some("formula panicked"));
        assert!(decoded.value.is_none());
        assert_eq!(decoded.calls, 1);
    }
}
