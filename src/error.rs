//! Application error type.
//!
//! Every failure surfaced to the user carries the process exit code it maps to:
//!
//! - `2`: invalid input (flags, query strings, dates) or file I/O
//! - `4`: internal/terminal failures

/// Exit code for invalid input and file I/O failures.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for internal and terminal failures.
pub const EXIT_INTERNAL: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for an input/I-O error (exit code 2).
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    /// Shorthand for an internal/terminal error (exit code 4).
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(EXIT_INTERNAL, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors_set_exit_codes() {
        assert_eq!(AppError::input("bad").exit_code(), EXIT_INPUT);
        assert_eq!(AppError::internal("boom").exit_code(), EXIT_INTERNAL);
        assert_eq!(AppError::input("bad flag").to_string(), "bad flag");
    }
}
