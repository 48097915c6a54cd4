use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidNumber { input: String },
    InvalidEndpoint { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { input } => write!(f, "Invalid number: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint URL: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
