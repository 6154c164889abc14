pub mod entity;
pub mod error;
pub mod ident;

pub use entity::Entity;
pub use error::{CompositeValidationError, Error, Result, ValidationError};
pub use ident::EntityIdent;
