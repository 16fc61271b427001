use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise from invalid arguments to the data structures and algorithms.
#[derive(Debug, Clone, PartialEq)]
pub enum ClavisError {
    IndexOutOfRange(String),
    EmptyContainer(String),
    WrongDimension(String),
    InvalidWeight(String),
}

impl Error for ClavisError {}

impl Display for ClavisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ClavisError::IndexOutOfRange(msg) => format!("Index out of range: {msg}"),
            ClavisError::EmptyContainer(msg) => format!("Container is empty: {msg}"),
            ClavisError::WrongDimension(msg) =>
                format!("Input has mismatched dimensions: {msg}"),
            ClavisError::InvalidWeight(msg) => format!("Invalid edge weight: {msg}"),
        };
        write!(f, "{message}")
    }
}
