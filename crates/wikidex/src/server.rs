//! HTTP server for the search frontend.
//!
//! Two surfaces:
//! - `GET /search?q=...` renders the results page
//! - every other path is served from the static root, behind a
//!   canonicalization-based directory-traversal guard
//!
//! Each search request opens its own index handle; concurrent requests are
//! safe because the index supports concurrent readers.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use wikidex_index::search_pages;

use crate::page::render_results;

/// Shared server configuration.
pub struct ServerState {
    /// Root directory for static files.
    pub static_root: PathBuf,
    /// Index directory.
    pub index_dir: PathBuf,
    /// Stemmer language name.
    pub language: String,
    /// Base URL prefixed to page ids in result links.
    pub base_url: String,
}

/// Query-string parameters for the search endpoint.
#[derive(Deserialize)]
struct SearchParams {
    /// The raw user query.
    q: Option<String>,
}

/// Builds the application router.
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback(handle_static)
        .with_state(state)
}

/// Binds the listener and serves until shutdown.
pub async fn serve(state: Arc<ServerState>, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state)).await
}

/// Handles `GET /search`.
///
/// A missing `q` parameter is an empty query: the page renders with zero
/// results rather than erroring.
async fn handle_search(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.q.unwrap_or_default();

    let outcome = {
        let state = Arc::clone(&state);
        let query = query.clone();
        tokio::task::spawn_blocking(move || {
            search_pages(&state.index_dir, &state.language, &query)
        })
        .await
        .unwrap_or_default()
    };

    Html(render_results(&query, &state.base_url, &outcome))
}

/// Serves a static file from the configured root.
///
/// The request path is percent-decoded before the filesystem lookup, so
/// files with spaces or accented names resolve.
///
/// Blocks directory traversal: the decoded path is joined onto the root
/// and canonicalized, and anything resolving outside the root is refused
/// with a plain 404 - no error escalation, no hint about why.
async fn handle_static(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let requested = match urlencoding::decode(uri.path()) {
        Ok(path) => path.trim_start_matches('/').to_string(),
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    let root = match tokio::fs::canonicalize(&state.static_root).await {
        Ok(root) => root,
        Err(e) => {
            warn!(error = %e, "static root unavailable");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let resolved = match tokio::fs::canonicalize(root.join(&requested)).await {
        Ok(path) => path,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    if !resolved.starts_with(&root) {
        warn!(path = %requested, "refused path outside static root");
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read(&resolved).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&resolved).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn state(dir: &std::path::Path) -> Arc<ServerState> {
        Arc::new(ServerState {
            static_root: dir.join("www"),
            index_dir: dir.join("index"),
            language: "english".to_string(),
            base_url: "https://example.org/wiki/".to_string(),
        })
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn search_without_index_renders_zero_results() {
        let temp = tempfile::tempdir().unwrap();
        let (status, body) = get_body(router(state(temp.path())), "/search?q=paris").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0 results"));
    }

    #[tokio::test]
    async fn search_without_q_parameter_renders() {
        let temp = tempfile::tempdir().unwrap();
        let (status, body) = get_body(router(state(temp.path())), "/search").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0 results"));
    }

    #[tokio::test]
    async fn serves_file_inside_root() {
        let temp = tempfile::tempdir().unwrap();
        let www = temp.path().join("www");
        fs::create_dir_all(&www).unwrap();
        fs::write(www.join("style.css"), "body {}").unwrap();

        let (status, body) = get_body(router(state(temp.path())), "/style.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn serves_file_with_encoded_name() {
        let temp = tempfile::tempdir().unwrap();
        let www = temp.path().join("www");
        fs::create_dir_all(&www).unwrap();
        fs::write(www.join("año nuevo.html"), "<p>feliz</p>").unwrap();

        let (status, body) =
            get_body(router(state(temp.path())), "/a%C3%B1o%20nuevo.html").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<p>feliz</p>");
    }

    #[tokio::test]
    async fn refuses_encoded_traversal_outside_root() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("www")).unwrap();
        fs::write(temp.path().join("secret.txt"), "secret").unwrap();

        let (status, body) =
            get_body(router(state(temp.path())), "/%2E%2E/secret.txt").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn refuses_traversal_outside_root() {
        let temp = tempfile::tempdir().unwrap();
        let www = temp.path().join("www");
        fs::create_dir_all(&www).unwrap();
        fs::write(temp.path().join("secret.txt"), "secret").unwrap();

        let (status, body) =
            get_body(router(state(temp.path())), "/../secret.txt").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.contains("secret"));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("www")).unwrap();

        let (status, _) = get_body(router(state(temp.path())), "/absent.html").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
