use crate::{
    AppState, api_root, create_project, delete_project, docs_page, get_project, health,
    list_projects, openapi_json, partial_update_project, project_list, update_project,
};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let collection = get(list_projects).post(create_project);
    let detail = get(get_project)
        .put(update_project)
        .patch(partial_update_project)
        .delete(delete_project);

    Router::new()
        // Listing page
        .route("/", get(project_list))
        // REST API
        .route("/api/", get(api_root))
        .route("/api", get(api_root))
        .route("/api/projects/", collection.clone())
        .route("/api/projects", collection)
        .route("/api/projects/{id}/", detail.clone())
        .route("/api/projects/{id}", detail)
        // Documentation
        .route("/docs/", get(docs_page))
        .route("/docs", get(docs_page))
        .route("/docs/openapi.json", get(openapi_json))
        // Health check
        .route("/health", get(health::health_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (frontend may be served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
