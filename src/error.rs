use thiserror::Error;

/// Robots matcher error types
#[derive(Error, Debug)]
pub enum RobotsError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid rule kind: {0}")]
    InvalidRuleKind(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RobotsError>;
