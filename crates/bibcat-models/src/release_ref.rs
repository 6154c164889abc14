use bibcat_types::{CompositeValidationError, Entity};
use serde::{Deserialize, Serialize};

/// Citation from a release to another release or an external work. All
/// fields are optional and omitted from the wire form when unset.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReleaseRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_release_id: Option<String>,

    /// Free-form citation metadata carried through unmodified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
}

impl Entity for ReleaseRef {
    // no required fields and no enumerations
    fn validate(&self) -> Result<(), CompositeValidationError> {
        Ok(())
    }
}
