//! HTTP handlers for the task resource.
//!
//! Every handler follows the same shape: validate the input, take the
//! request's storage handle, run the repository call, wrap the result. Errors
//! are returned as [`ApiError`] and rendered by its `IntoResponse` impl, so no
//! failure escapes the handler boundary.
//!
//! SQLite calls run synchronously on the runtime's worker threads; each is a
//! single short statement against a local file.

use super::dto::{CreatedTaskResponse, ResultResponse, TaskForm, TaskResponse, TasksResponse};
use super::error::ApiError;
use super::extract::{RequestDb, TaskId};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{NewTask, TaskPatch};
use crate::{msg_debug, msg_info};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::Form;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

/// `GET /api/tasks`
pub async fn list_tasks(db: RequestDb) -> Result<Json<TasksResponse>, ApiError> {
    let tasks = Tasks::new(db.connect()?).list()?;
    Ok(Json(TasksResponse { tasks }))
}

/// `GET /api/tasks/{id}`
pub async fn get_task(TaskId(id): TaskId, db: RequestDb) -> Result<Json<TaskResponse>, ApiError> {
    let task = Tasks::new(db.connect()?).get_by_id(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(TaskResponse { task }))
}

/// `POST /api/tasks`
///
/// Rejects a body that is not JSON before looking at any field, then applies
/// the name rules in order: present, text, non-empty, at most 100 characters.
pub async fn create_task(
    db: RequestDb,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedTaskResponse>), ApiError> {
    let Json(body) = body.map_err(|_| ApiError::Validation(Message::RequestMustBeJson))?;
    let new_task = NewTask::from_json(&body)?;

    let task = Tasks::new(db.connect()?).insert(&new_task)?;
    msg_info!(Message::TaskCreatedWithId(task.id, task.name.clone()));

    Ok((
        StatusCode::CREATED,
        Json(CreatedTaskResponse {
            task,
            message: Message::TaskCreated.to_string(),
        }),
    ))
}

/// `POST /submit-task`
///
/// Form-encoded twin of [`create_task`] used by the HTML page.
pub async fn submit_task(
    db: RequestDb,
    form: Result<Form<TaskForm>, FormRejection>,
) -> Result<(StatusCode, Json<CreatedTaskResponse>), ApiError> {
    // A body that is not a form carries no task name either.
    let Form(form) = form.map_err(|_| ApiError::Validation(Message::TaskNameRequired))?;
    let new_task = NewTask::from_form(form.task_name.as_deref(), form.task_description.as_deref())?;

    let task = Tasks::new(db.connect()?).insert(&new_task)?;
    msg_info!(Message::TaskCreatedFromFormWithId(task.id, task.name.clone()));

    Ok((
        StatusCode::CREATED,
        Json(CreatedTaskResponse {
            task,
            message: Message::TaskCreated.to_string(),
        }),
    ))
}

/// `PUT /api/tasks/{id}`
///
/// Partial update: fields missing from the body keep their stored values.
pub async fn update_task(
    TaskId(id): TaskId,
    db: RequestDb,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TaskResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::Validation(Message::InvalidRequestData))?;
    let patch = TaskPatch::from_json(&body)?;

    let task = Tasks::new(db.connect()?).update(id, patch)?.ok_or(ApiError::NotFound)?;
    msg_debug!(Message::TaskUpdatedWithId(id));

    Ok(Json(TaskResponse { task }))
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(TaskId(id): TaskId, db: RequestDb) -> Result<Json<ResultResponse>, ApiError> {
    if !Tasks::new(db.connect()?).delete(id)? {
        return Err(ApiError::NotFound);
    }
    msg_debug!(Message::TaskDeletedWithId(id));

    Ok(Json(ResultResponse {
        result: Message::TaskDeleted.to_string(),
    }))
}

/// `PATCH /api/tasks/{id}/complete`
///
/// Idempotent: completing a completed task answers exactly like the first call.
pub async fn complete_task(TaskId(id): TaskId, db: RequestDb) -> Result<Json<TaskResponse>, ApiError> {
    let task = Tasks::new(db.connect()?).complete(id)?.ok_or(ApiError::NotFound)?;
    msg_debug!(Message::TaskCompletedWithId(id));

    Ok(Json(TaskResponse { task }))
}
