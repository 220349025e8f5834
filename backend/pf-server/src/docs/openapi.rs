use pf_core::MAX_TITLE_LENGTH;

use axum::Json;
use serde_json::{Value, json};

pub const OPENAPI_VERSION: &str = "3.0.3";

/// OpenAPI description of every route under `/api/`.
#[must_use]
pub fn openapi_document() -> Value {
    json!({
      "openapi": OPENAPI_VERSION,
      "info": {
        "title": "Projects API",
        "version": env!("CARGO_PKG_VERSION")
      },
      "paths": {
        "/api/": api_root_path(),
        "/api/projects/": project_collection_path(),
        "/api/projects/{id}/": project_detail_path()
      },
      "components": {
        "schemas": schemas()
      }
    })
}

fn api_root_path() -> Value {
    json!({
      "get": {
        "summary": "API root",
        "description": "Links to every resource collection.",
        "responses": {"200": {"description": "resource name to collection URL"}}
      }
    })
}

fn project_collection_path() -> Value {
    json!({
      "get": {
        "summary": "List projects",
        "description": "Every stored project, ordered by id.",
        "responses": {
          "200": {
            "description": "all projects",
            "content": {"application/json": {"schema": {
              "type": "array",
              "items": schema_ref("Project")
            }}}
          }
        }
      },
      "post": {
        "summary": "Create a project",
        "requestBody": request_body("ProjectInput"),
        "responses": {
          "201": json_response("the created project", "Project"),
          "400": json_response("validation failed or body unreadable", "ApiError")
        }
      }
    })
}

fn project_detail_path() -> Value {
    let id_parameter = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "A unique integer value identifying this project.",
        "schema": {"type": "integer"}
    });
    let project = json_response("the project", "Project");
    let invalid = json_response("validation failed or body unreadable", "ApiError");
    let not_found = json_response("no project with this id", "ApiError");

    json!({
      "get": {
        "summary": "Retrieve a project",
        "parameters": [id_parameter],
        "responses": {"200": project, "404": not_found}
      },
      "put": {
        "summary": "Update a project",
        "description": "Every writable field is required.",
        "parameters": [id_parameter],
        "requestBody": request_body("ProjectInput"),
        "responses": {"200": project, "400": invalid, "404": not_found}
      },
      "patch": {
        "summary": "Partially update a project",
        "description": "Only the writable fields present in the body are changed.",
        "parameters": [id_parameter],
        "requestBody": request_body("PatchedProjectInput"),
        "responses": {"200": project, "400": invalid, "404": not_found}
      },
      "delete": {
        "summary": "Delete a project",
        "parameters": [id_parameter],
        "responses": {"204": {"description": "deleted"}, "404": not_found}
      }
    })
}

fn schemas() -> Value {
    let writable = json!({
        "title": {"type": "string", "minLength": 1, "maxLength": MAX_TITLE_LENGTH},
        "description": {"type": "string", "minLength": 1}
    });

    json!({
      "Project": {
        "type": "object",
        "required": ["id", "title", "description", "created_at", "updated_at"],
        "properties": {
          "id": {"type": "integer", "readOnly": true},
          "title": {"type": "string", "maxLength": MAX_TITLE_LENGTH},
          "description": {"type": "string"},
          "created_at": {"type": "string", "format": "date-time", "readOnly": true},
          "updated_at": {"type": "string", "format": "date-time", "readOnly": true}
        }
      },
      "ProjectInput": {
        "type": "object",
        "required": ["title", "description"],
        "properties": writable
      },
      "PatchedProjectInput": {
        "type": "object",
        "properties": writable
      },
      "ApiError": {
        "type": "object",
        "required": ["error"],
        "properties": {
          "error": {
            "type": "object",
            "required": ["code", "message"],
            "properties": {
              "code": {
                "type": "string",
                "enum": ["NOT_FOUND", "VALIDATION_ERROR", "BAD_REQUEST", "INTERNAL_ERROR"]
              },
              "message": {"type": "string"},
              "field": {"type": "string"},
              "fields": {
                "type": "object",
                "additionalProperties": {"type": "array", "items": {"type": "string"}}
              }
            }
          }
        }
      }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": schema_ref(schema)}}
    })
}

fn request_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": {"application/json": {"schema": schema_ref(schema)}}
    })
}

/// GET /docs/openapi.json
pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}
