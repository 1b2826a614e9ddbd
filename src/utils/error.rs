use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Task {task} failed: {message}")]
    TaskFailed { task: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Display error: {message}")]
    DisplayError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Execution,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::InvalidRange { .. } => ErrorCategory::Input,
            RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::TaskFailed { .. } | RosterError::DisplayError { .. } => {
                ErrorCategory::Execution
            }
            RosterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 顯示失敗不影響主流程
            RosterError::DisplayError { .. } => ErrorSeverity::Low,
            RosterError::TaskFailed { .. } => ErrorSeverity::Medium,
            RosterError::InvalidRange { .. }
            | RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RosterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Make sure every range has min <= max",
            ErrorCategory::Configuration => {
                "Check the scenario TOML file and command line overrides"
            }
            ErrorCategory::Execution => "Re-run the scenario; use --verbose for details",
            ErrorCategory::System => "Check that stdout and the config file are accessible",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::InvalidRange { min, max } => {
                format!("Cannot pick a number between {} and {}", min, max)
            }
            RosterError::TaskFailed { task, message } => {
                format!("Async operation #{} did not complete: {}", task + 1, message)
            }
            RosterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RosterError::ConfigValidationError { message, .. } => {
                format!("Could not read configuration: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_classification() {
        let err = RosterError::InvalidRange { min: 10, max: 1 };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.to_string().contains("min 10"));
        assert!(err.user_friendly_message().contains("between 10 and 1"));
    }

    #[test]
    fn test_display_error_is_low_severity() {
        let err = RosterError::DisplayError {
            message: "surface closed".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Execution);
    }

    #[test]
    fn test_task_failed_names_the_operation() {
        let err = RosterError::TaskFailed {
            task: 2,
            message: "task panicked".to_string(),
        };
        assert_eq!(err.to_string(), "Task 2 failed: task panicked");
        assert!(err.user_friendly_message().starts_with("Async operation #3"));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: RosterError = io.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
