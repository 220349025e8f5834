pub mod api_root;
pub mod error;
pub mod projects;
