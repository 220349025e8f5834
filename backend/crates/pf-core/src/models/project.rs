//! Project entity - the single record type exposed by the API.

use crate::ProjectPayload;

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// A persisted project.
///
/// `id`, `created_at` and `updated_at` are owned by the storage layer and
/// are never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Overwrite the fields carried by `payload` and refresh `updated_at`.
    pub fn apply(&mut self, payload: ProjectPayload) {
        if let Some(title) = payload.title {
            self.title = title;
        }
        if let Some(description) = payload.description {
            self.description = description;
        }
        self.touch(current_timestamp());
    }

    /// Move `updated_at` forward. The new value is always strictly later
    /// than the old one, even if the clock has not advanced.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Current time truncated to the microsecond precision used in storage.
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
