//! Error types for the todo view-model.
//!
//! # Design
//! Three layers. `TransportError` means no response came back at all.
//! `ApiError` is what `TodoClient::parse_*` reports about a response that
//! did come back. `ActionError` is what a user-facing action returns; its
//! `Display` text is the exact message a host shows the user.

use thiserror::Error;
use uuid::Uuid;

/// The request could not be completed (connection refused, DNS, I/O).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{method} {path} failed: {reason}")]
pub struct TransportError {
    pub method: &'static str,
    pub path: String,
    pub reason: String,
}

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Status code of a rejected response, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Outcome of a failed user action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please enter a todo")]
    EmptyInput,

    #[error("Todo text cannot be empty")]
    EmptyEdit,

    #[error("Failed to load todos")]
    LoadRejected { status: u16 },

    #[error("Failed to add todo")]
    AddRejected { status: u16 },

    #[error("Failed to update todo")]
    ToggleRejected { status: u16 },

    #[error("Failed to delete todo")]
    DeleteRejected { status: u16 },

    #[error("Failed to save todo")]
    SaveRejected { status: u16 },

    /// The id does not name an item in the current list.
    #[error("todo {0} is not in the list")]
    UnknownTodo(Uuid),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A success response whose body did not parse, or a request body that
    /// could not be encoded.
    #[error(transparent)]
    Api(ApiError),
}

impl ActionError {
    /// True for errors caught before any request was issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ActionError::EmptyInput | ActionError::EmptyEdit | ActionError::UnknownTodo(_)
        )
    }

    /// True when the server answered with a non-2xx status.
    pub fn is_rejection(&self) -> bool {
        self.status().is_some()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ActionError::LoadRejected { status }
            | ActionError::AddRejected { status }
            | ActionError::ToggleRejected { status }
            | ActionError::DeleteRejected { status }
            | ActionError::SaveRejected { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_messages_are_the_user_facing_alerts() {
        assert_eq!(ActionError::EmptyInput.to_string(), "Please enter a todo");
        assert_eq!(ActionError::EmptyEdit.to_string(), "Todo text cannot be empty");
        assert_eq!(ActionError::AddRejected { status: 500 }.to_string(), "Failed to add todo");
        assert_eq!(
            ActionError::ToggleRejected { status: 500 }.to_string(),
            "Failed to update todo"
        );
        assert_eq!(
            ActionError::DeleteRejected { status: 404 }.to_string(),
            "Failed to delete todo"
        );
        assert_eq!(ActionError::SaveRejected { status: 400 }.to_string(), "Failed to save todo");
    }

    #[test]
    fn transport_error_is_transparent() {
        let err = ActionError::from(TransportError {
            method: "GET",
            path: "http://localhost:3000/api/todos".to_string(),
            reason: "connection refused".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "GET http://localhost:3000/api/todos failed: connection refused"
        );
        assert!(!err.is_rejection());
        assert!(!err.is_validation());
    }

    #[test]
    fn classification() {
        assert!(ActionError::EmptyInput.is_validation());
        assert!(ActionError::UnknownTodo(Uuid::nil()).is_validation());
        assert_eq!(ActionError::SaveRejected { status: 503 }.status(), Some(503));
        assert_eq!(ApiError::NotFound.status(), Some(404));
        assert_eq!(ApiError::Deserialization("x".into()).status(), None);
    }
}
