//! Store error type and sqlx error classification

/// SQLSTATE for `undefined_table`
const UNDEFINED_TABLE: &str = "42P01";

/// SQLSTATE class 08: connection exception
const CONNECTION_EXCEPTION_CLASS: &str = "08";

/// Database error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("table missing: {message}")]
    MissingTable { message: String },

    #[error("connection failed: {message}")]
    Connection { message: String },

    #[error("database misconfigured: {message}")]
    Configuration { message: String },

    #[error("query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// Short, credential-free description suitable for health reports.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::MissingTable { .. } => "feedback table does not exist",
            Self::Connection { .. } => "database connection failed",
            Self::Configuration { .. } => "database is not configured",
            Self::Query { .. } => "database query failed",
        }
    }

    pub fn is_missing_table(&self) -> bool {
        matches!(self, Self::MissingTable { .. })
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let message = err.to_string();
        match &err {
            // Server-reported errors are classified by SQLSTATE alone
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some(UNDEFINED_TABLE) => Self::MissingTable { message },
                Some(code) if code.starts_with(CONNECTION_EXCEPTION_CLASS) => {
                    Self::Connection { message }
                }
                _ => Self::Query { message },
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connection { message },
            sqlx::Error::Configuration(_) => Self::Configuration { message },
            _ if mentions_missing_relation(&message) => Self::MissingTable { message },
            _ => Self::Query { message },
        }
    }
}

/// Fallback for drivers or proxies that surface only the message text.
///
/// Matches `relation "<name>" does not exist` but not the missing-column form
/// `column "<col>" of relation "<name>" does not exist`.
fn mentions_missing_relation(message: &str) -> bool {
    let Some((before, rest)) = message.split_once("relation \"") else {
        return false;
    };
    if before.trim_end().ends_with(" of") {
        return false;
    }
    rest.split_once('"')
        .is_some_and(|(name, tail)| !name.is_empty() && tail.starts_with(" does not exist"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_timeout_is_connection_error() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Connection { .. }));
        assert_eq!(err.summary(), "database connection failed");
    }

    #[test]
    fn io_error_is_connection_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StoreError::from(sqlx::Error::Io(io));
        assert!(matches!(err, StoreError::Connection { .. }));
    }

    #[test]
    fn missing_relation_message_is_detected() {
        let err = StoreError::from(sqlx::Error::Protocol(
            r#"relation "feedback" does not exist"#.into(),
        ));
        assert!(err.is_missing_table());
        assert_eq!(err.summary(), "feedback table does not exist");
    }

    #[test]
    fn missing_column_is_not_missing_table() {
        let err = StoreError::from(sqlx::Error::Protocol(
            r#"column "valuable_topic" of relation "feedback" does not exist"#.into(),
        ));
        assert!(!err.is_missing_table());
        assert_eq!(err.summary(), "database query failed");
    }

    #[test]
    fn relation_message_must_name_a_relation() {
        assert!(mentions_missing_relation(
            r#"error returned from database: relation "feedback" does not exist"#
        ));
        assert!(!mentions_missing_relation("relation does not exist"));
        assert!(!mentions_missing_relation(r#"relation "feedback" already exists"#));
    }

    #[test]
    fn other_errors_are_query_errors() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Query { .. }));
    }
}
