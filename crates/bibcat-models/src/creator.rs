use bibcat_types::{CompositeValidationError, Entity, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifecycle state "wip" - record is work in progress.
pub const STATE_WIP: &str = "wip";
/// Lifecycle state "active" - record is live in the catalog.
pub const STATE_ACTIVE: &str = "active";
/// Lifecycle state "redirect" - record was superseded by another ident.
pub const STATE_REDIRECT: &str = "redirect";
/// Lifecycle state "deleted" - record was removed.
pub const STATE_DELETED: &str = "deleted";

/// Closed set of allowed lifecycle states, frozen at compile time.
pub const STATE_ENUM: &[&str] = &[STATE_WIP, STATE_ACTIVE, STATE_REDIRECT, STATE_DELETED];

/// A creator (person or organization) record in the catalog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatorEntity {
    /// Stable external identifier, distinct from the revision token.
    /// Required; serialized as null when absent.
    pub ident: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub orcid: String,

    /// Ident of the superseding record, populated only when state is
    /// "redirect".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub redirect: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub revision: String,

    /// Lifecycle state, one of [`STATE_ENUM`]. Required; serialized as null
    /// when absent.
    pub state: Option<String>,
}

impl Entity for CreatorEntity {
    fn validate(&self) -> Result<(), CompositeValidationError> {
        let mut violations = Vec::new();

        if self.ident.is_none() {
            violations.push(ValidationError::required("ident"));
        }

        match self.state.as_deref() {
            None => violations.push(ValidationError::required("state")),
            Some(state) if !STATE_ENUM.contains(&state) => {
                violations.push(ValidationError::enum_value("state", state, STATE_ENUM));
            }
            Some(_) => {}
        }

        if !violations.is_empty() {
            debug!("Invalid creator entity, {} violations", violations.len());
        }
        CompositeValidationError::check(violations)
    }
}
