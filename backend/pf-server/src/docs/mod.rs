//! Generated API documentation.

pub mod docs_page;
pub mod openapi;
