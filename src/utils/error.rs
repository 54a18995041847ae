use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("UTF-8 decode error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Invalid {field}: {input:?} ({reason})")]
    ParseError {
        field: String,
        input: String,
        reason: String,
    },

    #[error("Key not found: {key}")]
    KeyError { key: String },

    #[error("Index {index} out of range for length {len}")]
    IndexError { index: isize, len: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLesson { name: String },

    #[error("Lesson '{lesson}' failed: {details}")]
    LessonFailed { lesson: String, details: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Lookup,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::ParseError { .. } => ErrorCategory::Input,
            LessonError::KeyError { .. }
            | LessonError::IndexError { .. }
            | LessonError::LessonFailed { .. } => ErrorCategory::Lookup,
            LessonError::ConfigError { .. }
            | LessonError::InvalidConfigValueError { .. }
            | LessonError::UnknownLesson { .. } => ErrorCategory::Configuration,
            LessonError::IoError(_)
            | LessonError::SerializationError(_)
            | LessonError::Utf8Error(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Lookup | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::ParseError { field, input, .. } => {
                format!("'{}' is not a valid {}", input, field)
            }
            LessonError::KeyError { key } => format!("Nothing is stored under '{}'", key),
            LessonError::IndexError { index, len } => {
                format!("Position {} does not exist (only {} items)", index, len)
            }
            LessonError::UnknownLesson { name } => format!("There is no lesson called '{}'", name),
            LessonError::LessonFailed { lesson, .. } => format!("Lesson '{}' stopped early", lesson),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter a whole number such as 250 or 450",
            ErrorCategory::Lookup => "Check the key or index against the container's contents",
            ErrorCategory::Configuration => {
                "Run `chai-lessons list` for lesson names and check the config file values"
            }
            ErrorCategory::System => "Check file permissions and that stdin/stdout are available",
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
