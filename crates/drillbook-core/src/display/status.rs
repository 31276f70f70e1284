//! Status lines for operations that have no resource to echo back.

use std::fmt;

/// A one-line success or failure message, e.g. after an editor operation.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}
