//! Response envelopes and request forms.
//!
//! Payloads are always wrapped under a named key; the API never answers with
//! a bare array or object.

use crate::libs::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct CreatedTaskResponse {
    pub task: Task,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: String,
}

/// Fields posted by the HTML form on the index page.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    #[serde(rename = "taskName")]
    pub task_name: Option<String>,
    #[serde(rename = "taskDescription")]
    pub task_description: Option<String>,
}
