//! Task model and input validation.
//!
//! [`Task`] is the row as stored and as returned to clients. [`NewTask`] and
//! [`TaskPatch`] are the validated inputs of the create and update paths; they
//! can only be built through their parsing constructors, so anything reaching
//! the repository already satisfies the name rules.

use crate::libs::messages::Message;
use chrono::Local;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Maximum task name length, counted in characters after trimming.
pub const MAX_NAME_LENGTH: usize = 100;

/// Timestamp layout of `created_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_flag")]
    pub completed: bool,
    pub created_at: String,
}

/// Writes booleans the way SQLite stores them: `0` or `1`.
fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// A trimmed, non-empty task name of at most [`MAX_NAME_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskName(String);

impl TaskName {
    pub fn parse(raw: &str) -> Result<Self, Message> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(Message::TaskNameEmpty);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(Message::TaskNameTooLong(MAX_NAME_LENGTH));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated input of the create paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: TaskName,
    pub description: String,
    pub created_at: String,
}

impl NewTask {
    pub fn new(name: TaskName, description: &str) -> Self {
        Self {
            name,
            description: description.trim().to_string(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Validates a JSON create body.
    ///
    /// Checks run in a fixed order so the first failing rule decides the
    /// message: object shape, `name` presence, `name` type, emptiness, length.
    pub fn from_json(body: &Value) -> Result<Self, Message> {
        let fields = body.as_object().ok_or(Message::RequestMustBeJson)?;
        let name = match fields.get("name") {
            None => return Err(Message::TaskNameRequired),
            Some(Value::String(name)) => TaskName::parse(name)?,
            Some(_) => return Err(Message::TaskNameNotText),
        };
        let description = optional_description(fields)?.unwrap_or_default();

        Ok(Self::new(name, &description))
    }

    /// Validates the `taskName` / `taskDescription` form fields.
    pub fn from_form(name: Option<&str>, description: Option<&str>) -> Result<Self, Message> {
        let name = TaskName::parse(name.ok_or(Message::TaskNameRequired)?)?;
        Ok(Self::new(name, description.unwrap_or_default()))
    }
}

/// Validated input of the update path. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<TaskName>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Validates an update body. An empty object carries no update and is
    /// rejected like a missing body.
    pub fn from_json(body: &Value) -> Result<Self, Message> {
        let fields = body
            .as_object()
            .filter(|fields| !fields.is_empty())
            .ok_or(Message::InvalidRequestData)?;
        let name = match fields.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(TaskName::parse(name)?),
            Some(_) => return Err(Message::TaskNameNotText),
        };
        let description = optional_description(fields)?.map(|text| text.trim().to_string());
        let completed = match fields.get("completed") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(Value::Number(number)) => match number.as_i64() {
                Some(0) => Some(false),
                Some(1) => Some(true),
                _ => return Err(Message::TaskCompletedInvalid),
            },
            Some(_) => return Err(Message::TaskCompletedInvalid),
        };

        Ok(Self { name, description, completed })
    }

    /// Merges the patch over the stored task; absent fields keep their values.
    pub fn apply(self, current: &Task) -> Task {
        Task {
            id: current.id,
            name: self.name.map_or_else(|| current.name.clone(), |name| name.0),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            completed: self.completed.unwrap_or(current.completed),
            created_at: current.created_at.clone(),
        }
    }
}

fn optional_description(fields: &Map<String, Value>) -> Result<Option<String>, Message> {
    match fields.get("description") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(Message::TaskDescriptionNotText),
    }
}
