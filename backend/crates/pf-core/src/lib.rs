pub mod error;
pub mod models;
pub mod serializer;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::new_project::NewProject;
pub use models::project::{Project, current_timestamp};
pub use models::project_dto::{ProjectDto, format_timestamp};
pub use serializer::char_field::CharField;
pub use serializer::field_errors::{FieldErrors, NON_FIELD_ERRORS};
pub use serializer::project_payload::{
    DESCRIPTION_FIELD, MAX_TITLE_LENGTH, ProjectPayload, TITLE_FIELD,
};
pub use serializer::write_mode::WriteMode;
