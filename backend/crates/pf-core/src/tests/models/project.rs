use crate::{Project, ProjectPayload, current_timestamp};

use chrono::{Duration, Timelike};

fn sample_project() -> Project {
    let now = current_timestamp();
    Project {
        id: 7,
        title: "Portfolio".to_string(),
        description: "Personal site".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_current_timestamp_has_microsecond_precision() {
    let now = current_timestamp();
    assert_eq!(now.nanosecond() % 1_000, 0);
}

#[test]
fn test_apply_full_payload_overwrites_fields() {
    let mut project = sample_project();
    let created_at = project.created_at;

    project.apply(ProjectPayload {
        title: Some("Renamed".to_string()),
        description: Some("New text".to_string()),
    });

    assert_eq!(project.id, 7);
    assert_eq!(project.title, "Renamed");
    assert_eq!(project.description, "New text");
    assert_eq!(project.created_at, created_at);
    assert!(project.updated_at > created_at);
}

#[test]
fn test_apply_partial_payload_keeps_missing_fields() {
    let mut project = sample_project();

    project.apply(ProjectPayload {
        title: None,
        description: Some("Only this".to_string()),
    });

    assert_eq!(project.title, "Portfolio");
    assert_eq!(project.description, "Only this");
}

#[test]
fn test_touch_with_stale_clock_still_moves_forward() {
    let mut project = sample_project();
    let before = project.updated_at;

    project.touch(before - Duration::seconds(30));

    assert_eq!(project.updated_at, before + Duration::microseconds(1));
}

#[test]
fn test_touch_with_later_clock_uses_clock() {
    let mut project = sample_project();
    let later = project.updated_at + Duration::seconds(5);

    project.touch(later);

    assert_eq!(project.updated_at, later);
}
