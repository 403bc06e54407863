//! Line-delimited JSON wire format for the reference host.
//!
//! One request per line in, one response per line out. The `id` is an
//! opaque caller token echoed back untouched, so callers can match
//! responses to in-flight requests.

use crate::context::AppContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named call: `{"id": 7, "method": "getAllTodos", "args": []}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// The answer to one request: exactly one of `result` or `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// A successful answer.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    /// A failed answer.
    #[must_use]
    pub fn failure(id: Value, error: String) -> Self {
        Self {
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// Parses one request line and dispatches it. A line that is not valid
/// JSON gets an error response with a `null` id, since no caller token
/// could be recovered.
pub async fn handle_line(context: &AppContext, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => match context.invoke(&request.method, &request.args).await {
            Ok(result) => Response::success(request.id, result),
            Err(err) => Response::failure(request.id, err.to_string()),
        },
        Err(err) => Response::failure(Value::Null, format!("malformed request: {err}")),
    }
}
