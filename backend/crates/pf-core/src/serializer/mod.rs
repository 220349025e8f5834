//! Mapping between [`Project`](crate::Project) records and their JSON form.
//!
//! Outbound, a record becomes a [`ProjectDto`](crate::ProjectDto). Inbound,
//! a client document is run through the declared [`CharField`]s and becomes a
//! [`ProjectPayload`] holding only the writable fields.

pub mod char_field;
pub mod field_errors;
pub mod project_payload;
pub mod write_mode;

pub use char_field::CharField;
pub use field_errors::FieldErrors;
pub use project_payload::ProjectPayload;
pub use write_mode::WriteMode;
