//! Application-level error carrying the process exit code.
//!
//! Exit codes:
//! - `2`: usage or file I/O
//! - `3`: malformed fee schedule
//! - `4`: access validation failed

use crate::schedule::ScheduleError;

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

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        AppError::new(3, format!("Invalid fee schedule: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_errors_map_to_exit_code_3() {
        let err: AppError = ScheduleError::NoTiers.into();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().starts_with("Invalid fee schedule:"));
    }
}
