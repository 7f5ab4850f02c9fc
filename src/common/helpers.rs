use anyhow::Error;
use sqlx::error::DatabaseError;
use sqlx::sqlite::SqliteError;

pub fn print_error_chain(err: &Error) {
    // Concatenate the main context message along with its chain of errors
    let error_message = err
        .chain()
        .enumerate()
        .map(|(index, cause)| {
            if index == 0 {
                cause.to_string()
            } else {
                format!("       └> {}", cause)
            }
        })
        .collect::<Vec<String>>()
        .join("\n");

    // Print the error message
    error!("{}", error_message);
}

/// Text of the innermost error, as reported to the user. Database errors
/// report SQLite's own message without the result code.
pub fn root_cause_message(err: &Error) -> String {
    for cause in err.chain() {
        if let Some(sqlx::Error::Database(db_err)) = cause.downcast_ref::<sqlx::Error>() {
            return db_err.message().to_string();
        }
        if let Some(db_err) = cause.downcast_ref::<SqliteError>() {
            return db_err.message().to_string();
        }
    }

    err.root_cause().to_string()
}
