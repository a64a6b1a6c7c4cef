//! Display implementation for taskboard messages.
//!
//! The texts returned to HTTP clients (validation, not-found and the generic
//! server errors) are stable: the front-end and the integration tests match
//! on them. Log-only texts may change freely.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskDeleted => "Task deleted".to_string(),
            Message::TaskNotFound => "Task not found".to_string(),
            Message::TaskCreatedWithId(id, name) => format!("Created task: ID={}, name=\"{}\"", id, name),
            Message::TaskCreatedFromFormWithId(id, name) => {
                format!("Created task from form submission: ID={}, name=\"{}\"", id, name)
            }
            Message::TaskUpdatedWithId(id) => format!("Updated task: ID={}", id),
            Message::TaskDeletedWithId(id) => format!("Deleted task: ID={}", id),
            Message::TaskCompletedWithId(id) => format!("Marked task as completed: ID={}", id),

            // === VALIDATION MESSAGES ===
            Message::RequestMustBeJson => "Request must be JSON".to_string(),
            Message::InvalidRequestData => "Invalid request data".to_string(),
            Message::TaskNameRequired => "Task name is required".to_string(),
            Message::TaskNameEmpty => "Task name cannot be empty".to_string(),
            Message::TaskNameTooLong(max) => format!("Task name is too long (max {} characters)", max),
            Message::TaskNameNotText => "Task name must be text".to_string(),
            Message::TaskDescriptionNotText => "Task description must be text".to_string(),
            Message::TaskCompletedInvalid => "Task completion flag must be true/false or 0/1".to_string(),

            // === SERVER ERROR MESSAGES ===
            Message::DatabaseOperationFailed => "Database operation failed".to_string(),
            Message::InternalServerError => "Internal server error".to_string(),
            Message::DatabaseError(error) => format!("Database error: {}", error),
            Message::UnexpectedError(error) => format!("Unexpected error while handling request: {}", error),
            Message::ConnectionCloseFailed(error) => format!("Failed to close database connection: {}", error),

            // === SCHEMA MESSAGES ===
            Message::SchemaEnsured(path) => format!("Task table ready in {}", path),
            Message::SchemaReset(path) => format!("Database initialized from schema: {}", path),
            Message::SchemaFileRead(path) => format!("Loaded schema definition from {}", path),
            Message::SchemaFileEmpty(path) => format!("Schema definition {} is empty", path),
            Message::StoreFileRemoved(path) => format!("Removed existing database file {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ProfileSelected(name) => format!("Using '{}' configuration profile", name),
            Message::UnknownProfile(name) => format!("Unknown profile '{}', falling back to development", name),
            Message::DefaultSecretKeyInProduction => {
                "SECRET_KEY is not set, production is running with the placeholder key".to_string()
            }
            Message::InvalidPort(value) => format!("Invalid PORT value '{}', using the default", value),

            // === SERVER MESSAGES ===
            Message::ServerStarting => "Starting taskboard".to_string(),
            Message::ServerListening(address) => format!("Listening on http://{}", address),
            Message::InvalidServerAddress(host, port) => format!("Invalid server address {}:{}", host, port),
            Message::ServerStopped => "Server shutdown complete".to_string(),
            Message::ShutdownSignalFailed(error) => format!("Failed to install shutdown signal handler: {}", error),
        };
        write!(f, "{}", text)
    }
}
