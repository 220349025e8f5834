use crate::ApiError;

use pf_core::{FieldErrors, NON_FIELD_ERRORS};
use pf_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::project_not_found("42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project 42 not found");
    assert!(json["error"].get("field").is_none());
    assert!(json["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_validation_error_with_single_field_sets_field() {
    let mut errors = FieldErrors::new();
    errors.add("title", "This field may not be blank.");
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
    assert_eq!(
        json["error"]["message"],
        "title: This field may not be blank."
    );
    assert_eq!(
        json["error"]["fields"]["title"][0],
        "This field may not be blank."
    );
}

#[tokio::test]
async fn test_validation_error_with_many_fields_omits_field() {
    let mut errors = FieldErrors::new();
    errors.add("title", "This field is required.");
    errors.add("description", "This field is required.");
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].get("field").is_none());
    assert_eq!(json["error"]["fields"].as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_query_error_is_hidden_from_client() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[tokio::test]
async fn test_row_not_found_from_database_is_a_server_error() {
    // Missing projects are detected by the handlers, not by error mapping
    let error = ApiError::from(DbError::from(sqlx::Error::RowNotFound));

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_row_maps_to_500_with_generic_message() {
    let error = ApiError::from(DbError::InvalidRow {
        message: "created_at out of range".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Stored data could not be read");
}

#[tokio::test]
async fn test_non_field_error_alone_omits_field() {
    let mut errors = FieldErrors::new();
    errors.add(
        NON_FIELD_ERRORS,
        "Invalid data. Expected a dictionary, but got list.",
    );
    let error = ApiError::Validation {
        errors,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].get("field").is_none());
    assert_eq!(
        json["error"]["fields"][NON_FIELD_ERRORS][0],
        "Invalid data. Expected a dictionary, but got list."
    );
}

#[tokio::test]
async fn test_core_validation_error_maps_to_400() {
    let mut errors = FieldErrors::new();
    errors.add("description", "This field is required.");
    let core_error = errors.into_result().unwrap_err();

    let error = ApiError::from(core_error);

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(error, ApiError::Validation { .. }));
}
