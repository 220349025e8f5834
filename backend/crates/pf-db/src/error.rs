use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::migrate::MigrateError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// Statement or connection failure reported by SQLite
    #[error("Query failed: {source} {location}")]
    Query {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// A stored value that cannot be mapped back onto the model
    #[error("Invalid row: {message} {location}")]
    InvalidRow {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration failed: {source} {location}")]
    Migration {
        source: MigrateError,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        DbError::Query {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<MigrateError> for DbError {
    #[track_caller]
    fn from(source: MigrateError) -> Self {
        DbError::Migration {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
