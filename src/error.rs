use thiserror::Error;

/// Errors raised while building the column catalogue or validating input.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed column expression
    #[error("invalid expression '{0}': {1}")]
    Parse(String, String),

    /// Function called with the wrong number of arguments
    #[error("{func} expects {expected} arguments, found {found}")]
    Arity {
        func:     &'static str,
        expected: &'static str,
        found:    usize,
    },

    /// Column references form a cycle
    #[error("column reference cycle: {0}")]
    Cycle(String),

    /// Reference to a column that does not exist
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// Two columns share an id
    #[error("duplicate column '{0}'")]
    Duplicate(String),

    /// Structurally invalid column definition
    #[error("column '{0}': {1}")]
    Definition(String, String),

    /// Column id collides with a reserved query parameter
    #[error("column '{0}' collides with a reserved query parameter")]
    Reserved(String),

    /// User supplied filter value rejected
    #[error("{0}")]
    Invalid(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn invalid<T, S: Into<String>>(msg: S) -> Result<T> {
    Err(Error::Invalid(msg.into()))
}
