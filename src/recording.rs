//! Call recording for stub operations.
//!
//! Every stub invocation, deprecated aliases included, is appended to the
//! client's [`CallLog`] before its behavior runs, so tests can assert on
//! what the code under test actually called and with which arguments.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

/// One recorded stub invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedCall {
    /// Dotted operation name, e.g. `repos.create_commit_status`.
    pub operation: String,
    /// JSON rendering of the call's arguments.
    pub args: Value,
}

/// Append-only log of stub invocations for one client.
///
/// Records persist for the client's lifetime; there is no way to clear the
/// log short of discarding the client through the registry.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: Mutex<Vec<RecordedCall>>,
}

impl CallLog {
    pub(crate) fn record(&self, installation_id: u64, operation: &str, args: Value) {
        tracing::debug!(installation_id, operation, %args, "stub invoked");
        self.calls
            .lock()
            .expect("call log lock poisoned")
            .push(RecordedCall {
                operation: operation.to_string(),
                args,
            });
    }

    /// All recorded calls, in invocation order.
    pub fn snapshot(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log lock poisoned").clone()
    }

    /// Argument payloads recorded for one operation, in invocation order.
    pub fn calls_for(&self, operation: &str) -> Vec<Value> {
        self.snapshot()
            .into_iter()
            .filter(|call| call.operation == operation)
            .map(|call| call.args)
            .collect()
    }

    /// Number of times an operation was invoked.
    pub fn count(&self, operation: &str) -> usize {
        self.calls_for(operation).len()
    }

    pub fn was_called(&self, operation: &str) -> bool {
        self.count(operation) > 0
    }
}
