/// Outcome of validating one field's current value.
///
/// The message is non-empty exactly when the verdict is invalid; the
/// constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationVerdict {
    valid: bool,
    message: String,
}

impl ValidationVerdict {
    /// Message used when an invalid verdict is built from an empty message.
    pub const FALLBACK_MESSAGE: &'static str = "Invalid value";

    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            Self::FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error message, for invalid verdicts.
    pub fn message(&self) -> Option<&str> {
        if self.valid {
            None
        } else {
            Some(&self.message)
        }
    }
}

impl Default for ValidationVerdict {
    fn default() -> Self {
        Self::valid()
    }
}
