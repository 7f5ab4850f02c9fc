use std::fmt;
use std::path::PathBuf;

use crate::check::format::format_name_list;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NotFound { path: PathBuf },
    Success { column: String },
    Failure { column: String, existing: Vec<String> },
    Error { message: String },
}

impl Outcome {
    /// Only a missing database changes the process status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NotFound { .. } => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::NotFound { path } => write!(f, "Database not found at {}", path.display()),
            Outcome::Success { column } => write!(f, "SUCCESS: '{}' column found.", column),
            Outcome::Failure { column, existing } => write!(
                f,
                "FAILURE: '{}' column NOT found. Existing columns: {}",
                column,
                format_name_list(existing)
            ),
            Outcome::Error { message } => write!(f, "Error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_shape() {
        let not_found = Outcome::NotFound {
            path: PathBuf::from("/srv/prisma/dev.db"),
        };
        assert_eq!(not_found.to_string(), "Database not found at /srv/prisma/dev.db");
        assert_eq!(not_found.exit_code(), 1);

        let success = Outcome::Success {
            column: "allowRegistration".to_string(),
        };
        assert_eq!(success.to_string(), "SUCCESS: 'allowRegistration' column found.");
        assert_eq!(success.exit_code(), 0);

        let failure = Outcome::Failure {
            column: "allowRegistration".to_string(),
            existing: vec!["id".to_string(), "theme".to_string()],
        };
        assert_eq!(
            failure.to_string(),
            "FAILURE: 'allowRegistration' column NOT found. Existing columns: ['id', 'theme']"
        );
        assert_eq!(failure.exit_code(), 0);

        let error = Outcome::Error {
            message: "database is locked".to_string(),
        };
        assert_eq!(error.to_string(), "Error: database is locked");
        assert_eq!(error.exit_code(), 0);
    }
}
