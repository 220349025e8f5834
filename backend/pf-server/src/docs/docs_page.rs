//! Human-readable rendering of the OpenAPI document.

use crate::docs::openapi::openapi_document;
use crate::pages::html::{document, escape};

use std::fmt::Write;

use axum::response::Html;
use serde_json::Value;

const METHODS: &[&str] = &["get", "post", "put", "patch", "delete"];

/// GET /docs/
pub async fn docs_page() -> Html<String> {
    Html(render_docs(&openapi_document()))
}

pub fn render_docs(spec: &Value) -> String {
    let title = spec["info"]["title"].as_str().unwrap_or("API");
    let version = spec["info"]["version"].as_str().unwrap_or("");

    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(title));
    let _ = writeln!(
        body,
        "<p class=\"meta\">Version {} · <a href=\"/docs/openapi.json\">openapi.json</a></p>",
        escape(version)
    );

    if let Some(paths) = spec["paths"].as_object() {
        for (path, operations) in paths {
            for method in METHODS {
                if let Some(operation) = operations.get(*method) {
                    render_operation(&mut body, path, method, operation);
                }
            }
        }
    }

    if let Some(schemas) = spec["components"]["schemas"].as_object() {
        body.push_str("<h2>Schemas</h2>\n");
        for (name, schema) in schemas {
            render_schema(&mut body, name, schema);
        }
    }

    document(&format!("{} documentation", title), &body)
}

fn render_operation(body: &mut String, path: &str, method: &str, operation: &Value) {
    let _ = writeln!(
        body,
        "<section class=\"card\">\n<h3><code>{} {}</code></h3>",
        method.to_uppercase(),
        escape(path)
    );

    if let Some(summary) = operation["summary"].as_str() {
        let _ = writeln!(body, "<p><strong>{}</strong></p>", escape(summary));
    }
    if let Some(description) = operation["description"].as_str() {
        let _ = writeln!(body, "<p>{}</p>", escape(description));
    }

    if let Some(parameters) = operation["parameters"].as_array() {
        body.push_str("<p>Parameters:</p>\n<ul>\n");
        for parameter in parameters {
            let _ = writeln!(
                body,
                "<li><code>{}</code> ({}) {}</li>",
                escape(parameter["name"].as_str().unwrap_or("")),
                escape(parameter["in"].as_str().unwrap_or("")),
                escape(parameter["description"].as_str().unwrap_or(""))
            );
        }
        body.push_str("</ul>\n");
    }

    if let Some(schema) = operation["requestBody"]["content"]["application/json"]["schema"]
        ["$ref"]
        .as_str()
    {
        let _ = writeln!(
            body,
            "<p>Request body: <code>{}</code></p>",
            escape(schema_name(schema))
        );
    }

    if let Some(responses) = operation["responses"].as_object() {
        body.push_str("<table>\n<tr><th>Status</th><th>Description</th></tr>\n");
        for (status, response) in responses {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td></tr>",
                escape(status),
                escape(response["description"].as_str().unwrap_or(""))
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("</section>\n");
}

fn render_schema(body: &mut String, name: &str, schema: &Value) {
    let _ = writeln!(body, "<section class=\"card\">\n<h3>{}</h3>", escape(name));

    let required: Vec<&str> = schema["required"]
        .as_array()
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if let Some(properties) = schema["properties"].as_object() {
        body.push_str("<table>\n<tr><th>Field</th><th>Type</th><th>Notes</th></tr>\n");
        for (field, property) in properties {
            let mut notes = Vec::new();
            if required.contains(&field.as_str()) {
                notes.push("required".to_string());
            }
            if property["readOnly"].as_bool() == Some(true) {
                notes.push("read-only".to_string());
            }
            if let Some(max_length) = property["maxLength"].as_u64() {
                notes.push(format!("max {} characters", max_length));
            }
            let _ = writeln!(
                body,
                "<tr><td><code>{}</code></td><td>{}</td><td>{}</td></tr>",
                escape(field),
                escape(property["type"].as_str().unwrap_or("")),
                escape(&notes.join(", "))
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("</section>\n");
}

fn schema_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
