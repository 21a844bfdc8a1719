use serde::Serialize;
use thiserror::Error;

use crate::modules::zoo::domain::errors::DomainError;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(#[from] DomainError),

    #[error("Repository failure: {0}")]
    RepositoryFailure(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Event delivery error: {0}")]
    EventDeliveryError(String),

    #[error("Operation cancelled before {0}")]
    Cancelled(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Wrap this error with the step that was running when it happened
    pub fn with_context(self, context: impl Into<String>) -> Self {
        AppError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every context layer
    pub fn root(&self) -> &AppError {
        let mut current = self;
        while let AppError::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// Context annotations from outermost to innermost
    pub fn contexts(&self) -> Vec<&str> {
        let mut steps = Vec::new();
        let mut current = self;
        while let AppError::Context { context, source } = current {
            steps.push(context.as_str());
            current = source;
        }
        steps
    }

    pub fn domain_error(&self) -> Option<&DomainError> {
        match self.root() {
            AppError::InvariantViolation(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), AppError::NotFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), AppError::Cancelled(_))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::ValidationError(format!("Invalid date/time: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::RepositoryFailure(format!("Serialization failed: {}", err))
    }
}

/// Step annotation for results, mirroring `AppError::with_context`
pub trait ResultExt<T> {
    fn context(self, context: &str) -> AppResult<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, context: &str) -> AppResult<T> {
        self.map_err(|err| err.into().with_context(context))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_layers_keep_the_root_cause() {
        let err = AppError::from(DomainError::EnclosureFull)
            .with_context("adding animal to enclosure")
            .with_context("transferring animal");

        assert_eq!(err.domain_error(), Some(&DomainError::EnclosureFull));
        assert_eq!(
            err.contexts(),
            vec!["transferring animal", "adding animal to enclosure"]
        );
        assert_eq!(
            err.to_string(),
            "transferring animal: adding animal to enclosure: Invariant violation: enclosure is full"
        );
    }

    #[test]
    fn result_ext_wraps_domain_errors() {
        let result: Result<(), DomainError> = Err(DomainError::AlreadyDone);
        let err = result.context("marking feeding schedule as done").unwrap_err();

        assert_eq!(err.domain_error(), Some(&DomainError::AlreadyDone));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected_through_context() {
        let err = AppError::NotFound("animal 42".to_string()).with_context("getting animal");
        assert!(err.is_not_found());
        assert!(err.domain_error().is_none());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(AppError::NotFound("x".to_string())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "x");
    }
}
