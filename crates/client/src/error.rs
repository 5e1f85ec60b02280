//! Error type for every request made through [`ApiClient`](crate::http::ApiClient).
//!
//! Non-2xx responses are turned into a display-ready message here, once:
//! the backend's `detail` field when it has one (validation lists are
//! flattened to `loc.joined: msg` lines), otherwise the HTTP reason text.

use serde::Deserialize;

/// Marker the backend puts in the `detail` of a club delete that is
/// blocked by players still assigned to the club.
const HAS_DEPENDENTS_MARKER: &str = "jugadores asociados";

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network, DNS, TLS or timeout failure; no response was received.
    Transport,
    /// `404 Not Found`.
    NotFound,
    /// `422 Unprocessable Entity`.
    Validation,
    /// Delete refused because other records still reference the entity.
    HasDependents,
    /// Any other non-2xx status.
    Status,
    /// The response body could not be read as the expected JSON.
    Decode,
}

/// Errors from the backend HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed.
    #[error("Could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status {
        kind: ApiErrorKind,
        status: u16,
        /// Display-ready message.
        message: String,
        /// `true` when `message` came from the backend's `detail` field.
        from_detail: bool,
    },

    /// A 2xx body that is not the expected JSON.
    #[error("Unexpected response from the server: {0}")]
    Decode(#[from] serde_json::Error),

    /// A 204 where a body was required.
    #[error("Empty response from {path}")]
    EmptyResponse { path: String },
}

impl ApiError {
    /// Build the error for a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        let (message, from_detail) = match detail_message(body) {
            Some(detail) => (detail, true),
            None => (
                reason
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {status}")),
                false,
            ),
        };

        Self::Status {
            kind: classify(status, &message, from_detail),
            status,
            message,
            from_detail,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Transport(_) => ApiErrorKind::Transport,
            Self::Status { kind, .. } => *kind,
            Self::Decode(_) | Self::EmptyResponse { .. } => ApiErrorKind::Decode,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The backend's own `detail` text, when the response carried one.
    pub fn backend_detail(&self) -> Option<&str> {
        match self {
            Self::Status {
                message,
                from_detail: true,
                ..
            } => Some(message),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ApiErrorKind::NotFound
    }
}

fn classify(status: u16, message: &str, from_detail: bool) -> ApiErrorKind {
    match status {
        404 => ApiErrorKind::NotFound,
        422 => ApiErrorKind::Validation,
        400 | 409 if from_detail && message.contains(HAS_DEPENDENTS_MARKER) => {
            ApiErrorKind::HasDependents
        }
        _ => ApiErrorKind::Status,
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Deserialize)]
struct ValidationIssue {
    #[serde(default)]
    loc: Vec<serde_json::Value>,
    msg: String,
}

impl ValidationIssue {
    fn line(&self) -> String {
        if self.loc.is_empty() {
            return self.msg.clone();
        }
        let loc = self
            .loc
            .iter()
            .map(|part| match part {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");
        format!("{loc}: {}", self.msg)
    }
}

/// Extract a display message from an error body of the form
/// `{"detail": "..."}` or `{"detail": [{"loc": [...], "msg": "..."}]}`.
///
/// Returns `None` for anything else, including empty details.
pub fn detail_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.detail? {
        ErrorDetail::Message(message) => message,
        ErrorDetail::Issues(issues) => issues
            .iter()
            .map(ValidationIssue::line)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let message = message.trim().to_string();
    (!message.is_empty()).then_some(message)
}
