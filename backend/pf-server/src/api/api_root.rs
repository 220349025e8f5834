use axum::{
    Json,
    http::{HeaderMap, header::HOST},
};
use serde_json::{Map, Value};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resources mounted under `/api/`, by name.
pub const API_RESOURCES: &[(&str, &str)] = &[("projects", "/api/projects/")];

/// GET /api/
///
/// Map of resource names to their collection URLs. URLs are absolute when
/// the request carried a Host header; the scheme follows `X-Forwarded-Proto`.
pub async fn api_root(headers: HeaderMap) -> Json<Value> {
    let base = headers
        .get(HOST)
        .and_then(|host| host.to_str().ok())
        .map(|host| format!("{}://{}", request_scheme(&headers), host))
        .unwrap_or_default();

    let resources = API_RESOURCES
        .iter()
        .map(|(name, path)| (name.to_string(), Value::String(format!("{}{}", base, path))))
        .collect::<Map<String, Value>>();

    Json(Value::Object(resources))
}

/// First hop of `X-Forwarded-Proto`, else `http`.
fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|scheme| matches!(*scheme, "http" | "https"))
        .unwrap_or("http")
}
