//! JSON request handling for services that expose the translator over HTTP.
//!
//! The handler is transport-agnostic: it takes a request body and returns a
//! reply with a status code and a serializable payload. Mounting it on a
//! route is left to the caller's framework.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::convert::translate;
use crate::options::Options;

pub const MISSING_FIELD: &str = "Missing 'cron_expression' in request body";

/// Request body: `{"cron_expression": "0 12 * * 1,3,5"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub cron_expression: String,
}

/// Success body: `{"rfc5545_rule": "RRULE:..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub rfc5545_rule: String,
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Outcome of handling one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Converted(ConvertResponse),
    BadRequest(ErrorResponse),
}

impl Reply {
    fn bad_request(message: impl Into<String>) -> Self {
        Reply::BadRequest(ErrorResponse {
            error: message.into(),
        })
    }

    /// HTTP status code for this reply.
    pub fn status(&self) -> u16 {
        match self {
            Reply::Converted(_) => 200,
            Reply::BadRequest(_) => 400,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Converted(_))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Handle a raw JSON request body.
pub fn handle_request(body: &str, options: &Options) -> Reply {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => handle_value(&value, options),
        Err(e) => {
            tracing::debug!(error = %e, "request body is not valid JSON");
            Reply::bad_request(format!("Invalid JSON in request body: {e}"))
        }
    }
}

/// Handle an already decoded JSON request body.
pub fn handle_value(value: &Value, options: &Options) -> Reply {
    let expression = match value.get("cron_expression") {
        Some(Value::String(s)) => s,
        Some(_) => return Reply::bad_request("'cron_expression' must be a string"),
        None => return Reply::bad_request(MISSING_FIELD),
    };
    handle(
        &ConvertRequest {
            cron_expression: expression.clone(),
        },
        options,
    )
}

/// Handle a typed request.
pub fn handle(request: &ConvertRequest, options: &Options) -> Reply {
    match translate(&request.cron_expression, options) {
        Ok(rule) => Reply::Converted(ConvertResponse {
            rfc5545_rule: rule.to_string(),
        }),
        Err(e) => Reply::bad_request(e.to_string()),
    }
}
