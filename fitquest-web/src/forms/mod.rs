//! Form plumbing shared by every create/auth screen.

pub mod async_form;
pub mod fields;
pub mod validation;

pub use async_form::{AsyncForm, FormFields, FormMessages, submit};
pub use fields::FieldValue;
pub use validation::ValidationError;
