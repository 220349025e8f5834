use crate::pages::html::{document, escape};
use crate::{ApiResult, AppState};

use pf_core::{Project, format_timestamp};

use std::fmt::Write;

use axum::{extract::State, response::Html};

/// GET /
///
/// Plain HTML listing of every project
pub async fn project_list(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let projects = state.projects().find_all().await?;

    Ok(Html(render_project_list(&projects)))
}

pub fn render_project_list(projects: &[Project]) -> String {
    let mut body = String::from("<h1>Projects</h1>\n");

    if projects.is_empty() {
        body.push_str("<p>No projects yet.</p>\n");
    }

    for project in projects {
        let _ = write!(
            body,
            concat!(
                "<article class=\"card\" id=\"project-{id}\">\n",
                "<h2>{title}</h2>\n",
                "<p>{description}</p>\n",
                "<p class=\"meta\">Created {created_at}</p>\n",
                "</article>\n"
            ),
            id = project.id,
            title = escape(&project.title),
            description = escape(&project.description),
            created_at = format_timestamp(&project.created_at),
        );
    }

    body.push_str("<p class=\"meta\"><a href=\"/api/\">API</a> · <a href=\"/docs/\">Docs</a></p>\n");

    document("Projects", &body)
}
