//! Server-rendered HTML pages.

pub mod html;
pub mod project_list_page;
