pub mod api;
pub mod app_state;
pub mod docs;
pub mod error;
pub mod health;
pub mod logger;
pub mod pages;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    api_root::api_root,
    error::ApiError,
    error::Result as ApiResult,
    projects::projects::{
        create_project, delete_project, get_project, list_projects, partial_update_project,
        update_project,
    },
};
pub use app_state::AppState;
pub use docs::{docs_page::docs_page, openapi::openapi_json};
pub use error::ServerError;
pub use pages::project_list_page::project_list;

pub use crate::routes::build_router;
