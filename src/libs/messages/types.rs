/// All messages known to the application.
///
/// Variants without data are the fixed texts returned to HTTP clients;
/// variants carrying data are used for log lines and CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskDeleted,
    TaskNotFound,
    TaskCreatedWithId(i64, String),         // id, name
    TaskCreatedFromFormWithId(i64, String), // id, name
    TaskUpdatedWithId(i64),
    TaskDeletedWithId(i64),
    TaskCompletedWithId(i64),

    // === VALIDATION MESSAGES ===
    RequestMustBeJson,
    InvalidRequestData,
    TaskNameRequired,
    TaskNameEmpty,
    TaskNameTooLong(usize), // max length
    TaskNameNotText,
    TaskDescriptionNotText,
    TaskCompletedInvalid,

    // === SERVER ERROR MESSAGES ===
    DatabaseOperationFailed,
    InternalServerError,
    DatabaseError(String),   // error message
    UnexpectedError(String), // error message
    ConnectionCloseFailed(String),

    // === SCHEMA MESSAGES ===
    SchemaEnsured(String),   // database path
    SchemaReset(String),     // database path
    SchemaFileRead(String),   // schema path
    SchemaFileEmpty(String),  // schema path
    StoreFileRemoved(String), // database path

    // === CONFIGURATION MESSAGES ===
    ProfileSelected(String), // profile name
    UnknownProfile(String),  // requested name
    DefaultSecretKeyInProduction,
    InvalidPort(String), // raw value

    // === SERVER MESSAGES ===
    ServerStarting,
    ServerListening(String),           // address
    InvalidServerAddress(String, u16), // host, port
    ServerStopped,
    ShutdownSignalFailed(String),
}
