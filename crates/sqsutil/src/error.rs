use std::fmt;

/// Exit status for a lookup or send failure.
pub const EXIT_SEND_FAILURE: u8 = 254;
/// Exit status for a missing or invalid flag.
pub const EXIT_INVALID_ARGUMENT: u8 = 255;

#[derive(Debug, Clone, PartialEq)]
pub enum SqsUtilError {
    InvalidArgument {
        field: String,
        message: String,
    },
    /// Defaults file could not be read or parsed.
    Config {
        context: String,
        reason: String,
    },
    QueueLookup {
        queue: String,
        reason: String,
    },
    SendFailed {
        queue: String,
        reason: String,
    },
}

impl fmt::Display for SqsUtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqsUtilError::InvalidArgument { field, message } => {
                write!(f, "missing or invalid {field}: {message}")
            }
            SqsUtilError::Config { context, reason } => {
                write!(f, "Configuration error in {context}: {reason}")
            }
            SqsUtilError::QueueLookup { queue, reason } => {
                write!(f, "Could not resolve queue '{queue}': {reason}")
            }
            SqsUtilError::SendFailed { queue, reason } => {
                write!(f, "Could not send message to queue '{queue}': {reason}")
            }
        }
    }
}

impl std::error::Error for SqsUtilError {}

impl SqsUtilError {
    /// Errors caused by the caller's input rather than the remote service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SqsUtilError::InvalidArgument { .. } | SqsUtilError::Config { .. }
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_client_error() {
            EXIT_INVALID_ARGUMENT
        } else {
            EXIT_SEND_FAILURE
        }
    }

    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        SqsUtilError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn from_io_error(e: std::io::Error, context: &str) -> Self {
        SqsUtilError::Config {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_parse_error(e: impl fmt::Display, context: &str) -> Self {
        SqsUtilError::Config {
            context: context.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_lookup_error(e: impl fmt::Display, queue: &str) -> Self {
        SqsUtilError::QueueLookup {
            queue: queue.to_string(),
            reason: e.to_string(),
        }
    }

    pub fn from_send_error(e: impl fmt::Display, queue: &str) -> Self {
        SqsUtilError::SendFailed {
            queue: queue.to_string(),
            reason: e.to_string(),
        }
    }
}
