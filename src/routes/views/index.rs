use std::{path::PathBuf, sync::Arc};

use askama::Template;
use axum::{Router, extract::State, http::StatusCode, response::Html, routing::get};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::{routes::API_PREFIX, state::AppState};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    now: String,
    project_name: String,
    api_prefix: &'a str,
    default_namespace: &'a str,
    ignore_last_char: bool,
}

// Not `APP_`: that prefix only carries config keys.
const PUBLIC_DIR_VAR: &str = "CQRS_FORGE_PUBLIC_DIR";

type HtmlError = (StatusCode, Html<String>);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(state)
        .route_service("/{*file}", ServeDir::new(resolve_public_dir()))
}

fn resolve_public_dir() -> PathBuf {
    if let Some(path) = std::env::var_os(PUBLIC_DIR_VAR) {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, HtmlError> {
    let generator = &state.config.generator;
    let rendered = IndexTemplate {
        now: Local::now().to_rfc3339(),
        project_name: project_name(),
        api_prefix: API_PREFIX,
        default_namespace: &generator.default_namespace,
        ignore_last_char: generator.ignore_last_char,
    }
    .render()
    .map_err(|err| {
        tracing::error!(error = %err, "failed to render index");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to render index")
    })?;
    Ok(Html(rendered))
}

fn html_error(status: StatusCode, message: &'static str) -> HtmlError {
    (status, Html(message.to_string()))
}

/// `cqrs_forge` → `Cqrs Forge`.
pub(crate) fn project_name() -> String {
    let name = env!("CARGO_PKG_NAME")
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    if name.is_empty() {
        "Project".to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::project_name;

    #[test]
    fn project_name_is_title_cased() {
        assert_eq!(project_name(), "Cqrs Forge");
    }
}
