use crate::db::schema::SchemaError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// The request body could not be read as a generate request.
    InvalidBody(String),
    NotFound(String),
    /// Metadata lookup failed; the database diagnostic is reported alongside.
    SchemaLookup(SchemaError),
    Internal { message: String, detail: Option<String> },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn invalid_body(rejection: impl Into<String>) -> Self {
        Self::InvalidBody(rejection.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: None,
        }
    }

    /// Generic 500 carrying a diagnostic for the client.
    pub fn unexpected(detail: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: "Internal server error".to_string(),
            detail: Some(detail.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => message.as_str(),
            Self::InvalidBody(_) => "Invalid request body",
            Self::SchemaLookup(_) => "Failed to get table schema",
            Self::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Self::SchemaLookup(err) => Some(err.to_string()),
            Self::InvalidBody(rejection) => Some(rejection.clone()),
            Self::Internal { detail, .. } => detail.clone(),
            Self::BadRequest(_) | Self::NotFound(_) => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {}", self.message(), detail),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl From<SchemaError> for AppError {
    fn from(err: SchemaError) -> Self {
        AppError::SchemaLookup(err)
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::unexpected(err)
    }
}
