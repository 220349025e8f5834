pub mod new_project;
pub mod project;
pub mod project_dto;
