//! Domain value objects and validation.
//!
//! Each field of a record is its own type that can only be constructed
//! through validation, so invalid data cannot reach the models layer.

mod birthday;
mod errors;
mod name;
mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
