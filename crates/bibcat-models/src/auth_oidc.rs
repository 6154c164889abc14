use bibcat_types::{CompositeValidationError, Entity, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Link between an editor account and an external OIDC identity. Every
/// field is required.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthOidc {
    pub provider: Option<String>,
    pub sub: Option<String>,
    pub iss: Option<String>,
    pub preferred_username: Option<String>,
}

impl Entity for AuthOidc {
    fn validate(&self) -> Result<(), CompositeValidationError> {
        let mut violations = Vec::new();

        if self.provider.is_none() {
            violations.push(ValidationError::required("provider"));
        }
        if self.sub.is_none() {
            violations.push(ValidationError::required("sub"));
        }
        if self.iss.is_none() {
            violations.push(ValidationError::required("iss"));
        }
        if self.preferred_username.is_none() {
            violations.push(ValidationError::required("preferred_username"));
        }

        if !violations.is_empty() {
            debug!("Invalid OIDC payload, {} violations", violations.len());
        }
        CompositeValidationError::check(violations)
    }
}
