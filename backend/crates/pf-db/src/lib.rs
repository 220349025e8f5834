pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{MIGRATOR, open_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
