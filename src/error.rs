use thiserror::Error;

use crate::value::{unwords, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Every way reading or evaluating an expression can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Expected {0} args; found values {values}", values = unwords(.1))]
    WrongArgumentCount(usize, Vec<Value>),

    #[error("Invalid type: expected {0}, found {1}")]
    TypeMismatch(&'static str, Value),

    #[error("Parse error at {0}")]
    ParseFailure(String),

    #[error("{0}: {1}")]
    UnrecognizedForm(String, Value),

    #[error("{0}: {1}")]
    UnknownProcedure(String, String),

    #[error("{0}: {1}")]
    UnboundName(String, String),

    #[error("{0}")]
    Generic(String),
}

impl Error {
    pub(crate) fn unrecognized_form(form: &Value) -> Self {
        Self::UnrecognizedForm("Unrecognized special form".to_string(), form.clone())
    }
}

pub fn render_error(error: &Error) -> String {
    error.to_string()
}
