pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Location context reported with validation failures. All entity payloads
/// arrive in the request body, so this is currently the only location.
pub const BODY: &str = "body";

/// A single violated schema rule, tagged with the offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{location}.{field} is required")]
    MissingRequiredField {
        field: &'static str,
        location: &'static str,
    },

    #[error("{location}.{field}: {value:?} is not one of {allowed:?}")]
    InvalidEnumValue {
        field: &'static str,
        location: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl ValidationError {
    pub fn required(field: &'static str) -> Self {
        ValidationError::MissingRequiredField {
            field,
            location: BODY,
        }
    }

    pub fn enum_value(
        field: &'static str,
        value: impl Into<String>,
        allowed: &'static [&'static str],
    ) -> Self {
        ValidationError::InvalidEnumValue {
            field,
            location: BODY,
            value: value.into(),
            allowed,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredField { field, .. } => field,
            ValidationError::InvalidEnumValue { field, .. } => field,
        }
    }
}

/// Union of every rule a record violated. Checks never short-circuit, so the
/// caller sees all problems at once.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", list_violations(.violations))]
pub struct CompositeValidationError {
    violations: Vec<ValidationError>,
}

fn list_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl CompositeValidationError {
    pub fn new(violations: Vec<ValidationError>) -> Self {
        Self { violations }
    }

    /// Ok when no rule was violated, otherwise the composite error.
    pub fn check(violations: Vec<ValidationError>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] CompositeValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Invalid entity id: {0}")]
    InvalidEntityId(String),
}
