use thiserror::Error;

/// Result type alias using RegisterError
pub type Result<T> = std::result::Result<T, RegisterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the register can report falls into one of these kinds. Each
/// kind maps to a stable error code usable by front-ends and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// The database file is missing at access time
    StorageUnavailable,
    /// Statement execution failed (syntax, constraint, driver error)
    QueryFailed,
    /// A required input field is blank
    ValidationError,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::StorageUnavailable => "ERR_STORAGE_UNAVAILABLE",
            ExErrorKind::QueryFailed => "ERR_QUERY_FAILED",
            ExErrorKind::ValidationError => "ERR_VALIDATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the kind for programmatic handling plus optional context
/// (operation name, entity id) and the underlying message for display.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for register operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegisterError {
    /// The database file does not exist
    #[error("Database not found: {path}")]
    StorageUnavailable { path: String },

    /// A statement failed to execute
    #[error("Query failed: {message}")]
    QueryFailed { message: String },

    /// A required field is blank
    #[error("Invalid {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

impl From<RegisterError> for ExError {
    fn from(err: RegisterError) -> Self {
        match err {
            RegisterError::StorageUnavailable { path } => {
                ExError::new(ExErrorKind::StorageUnavailable)
                    .with_entity_id(path)
                    .with_message("Database file not found")
            }
            RegisterError::QueryFailed { message } => {
                ExError::new(ExErrorKind::QueryFailed).with_message(message)
            }
            RegisterError::ValidationError { field, reason } => {
                ExError::new(ExErrorKind::ValidationError)
                    .with_op("validate")
                    .with_message(format!("{}: {}", field, reason))
            }
        }
    }
}
