pub mod auth_oidc;
pub mod creator;
pub mod release_ref;

pub use auth_oidc::AuthOidc;
pub use creator::CreatorEntity;
pub use release_ref::ReleaseRef;

pub use bibcat_types::{CompositeValidationError, Entity, Error, ValidationError};
