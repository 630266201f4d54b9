use serde::Deserialize;
use serde_json::Value;

const UNKNOWN_MESSAGE: &str = "Unknown";

/// Status code(s) an operation treats as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    Status(u16),
    /// Any 2xx: sending returns 200, 201 or 204 depending on immediate, scheduled
    /// or recurring delivery.
    AnySuccess,
}

impl Expect {
    pub const OK: Self = Self::Status(200);
    pub const CREATED: Self = Self::Status(201);
    pub const NO_CONTENT: Self = Self::Status(204);

    pub fn matches(self, status: u16) -> bool {
        match self {
            Self::Status(expected) => status == expected,
            Self::AnySuccess => (200..=299).contains(&status),
        }
    }
}

/// Unexpected status or undecodable body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
    pub errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<Value>,
}

/// Interpret a response against the operation's expectation.
///
/// 204 never carries a body and yields `true`; other successes yield the decoded JSON
/// (`null` for an empty body).
pub fn interpret(status: u16, body: &str, expect: Expect) -> Result<Value, ApiFailure> {
    if !expect.matches(status) {
        return Err(failure_from_body(status, body));
    }

    if status == 204 {
        return Ok(Value::Bool(true));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|_| ApiFailure {
        status,
        message: UNKNOWN_MESSAGE.to_owned(),
        errors: None,
    })
}

fn failure_from_body(status: u16, body: &str) -> ApiFailure {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let (message, errors) = match parsed {
        Some(ErrorBody { message, errors }) => (message, errors),
        None => (None, None),
    };

    ApiFailure {
        status,
        message: message.unwrap_or_else(|| UNKNOWN_MESSAGE.to_owned()),
        errors,
    }
}
