use std::fmt;
use std::fmt::{Display, Formatter};
use serde_json::error::Category;

#[derive(Debug, Clone, PartialEq)]
pub enum LabError {
    // The runtime type of an input does not match the declared type. Rust signatures make
    // this unreachable for in-process calls, so it only comes out of deserialization.
    TypeMismatch {
        message: String,
        field: Option<String>,
    },
    // A correctly typed value breaks a sign, range or capacity rule.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LabError {
    pub fn type_mismatch(message: &str, field: Option<String>) -> LabError {
        LabError::TypeMismatch { message: message.to_string(), field }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LabError {
        LabError::Validation { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LabError {
        LabError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LabError {
        LabError::DuplicateKey { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LabError {
        LabError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LabError {
        LabError::Runtime { message: message.to_string(), reason_code }
    }

    /// Domain errors are the ones a caller can fix by passing a different value.
    pub fn is_domain(&self) -> bool {
        matches!(self, LabError::Validation { .. })
    }

    pub fn reason_code(&self) -> Option<&str> {
        match self {
            LabError::Validation { reason_code, .. } => { reason_code.as_deref() }
            LabError::Runtime { reason_code, .. } => { reason_code.as_deref() }
            _ => { None }
        }
    }
}

impl From<std::io::Error> for LabError {
    fn from(err: std::io::Error) -> Self {
        LabError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LabError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => {
                LabError::type_mismatch(
                    format!("json data does not match expected type: {}", err).as_str(), None)
            }
            Category::Io => {
                LabError::runtime(format!("json io {}", err).as_str(), None)
            }
            Category::Syntax | Category::Eof => {
                LabError::serialization(format!("json parsing {}", err).as_str())
            }
        }
    }
}

impl Display for LabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LabError::TypeMismatch { message, field: Some(field) } => {
                write!(f, "{} (field `{}`)", message, field)
            }
            LabError::TypeMismatch { message, field: None } => {
                write!(f, "{}", message)
            }
            LabError::Validation { message, reason_code: Some(code) } => {
                write!(f, "{} [{}]", message, code)
            }
            LabError::Validation { message, reason_code: None } => {
                write!(f, "{}", message)
            }
            LabError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LabError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LabError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LabError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LabError {}

/// A specialized Result type for the lab entities.
pub type LabResult<T> = Result<T, LabError>;
