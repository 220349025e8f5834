use crate::api_root;

use axum::http::{HeaderMap, HeaderValue, header::HOST};

#[tokio::test]
async fn test_api_root_uses_host_header() {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("example.com:8000"));

    let json = api_root(headers).await.0;

    assert_eq!(json["projects"], "http://example.com:8000/api/projects/");
}

#[tokio::test]
async fn test_api_root_without_host_is_relative() {
    let json = api_root(HeaderMap::new()).await.0;

    assert_eq!(json["projects"], "/api/projects/");
}

#[tokio::test]
async fn test_api_root_follows_forwarded_proto() {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("example.com"));
    headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));

    let json = api_root(headers).await.0;

    assert_eq!(json["projects"], "https://example.com/api/projects/");
}

#[tokio::test]
async fn test_api_root_ignores_unknown_forwarded_proto() {
    let mut headers = HeaderMap::new();
    headers.insert(HOST, HeaderValue::from_static("example.com"));
    headers.insert("x-forwarded-proto", HeaderValue::from_static("gopher"));

    let json = api_root(headers).await.0;

    assert_eq!(json["projects"], "http://example.com/api/projects/");
}
