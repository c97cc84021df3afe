pub mod render;
mod routes;
mod ui;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context as _;
use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use self::render::Render;

pub use self::ui::Templates;

/// Server context.
#[derive(Clone)]
pub struct Ctx {
    renderer: Arc<dyn Render>,
}

impl Ctx {
    pub fn new(renderer: impl Render + 'static) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }

    pub async fn run_server(self, addr: SocketAddr) -> Result<(), anyhow::Error> {
        run_server(addr, self).await
    }
}

impl Default for Ctx {
    fn default() -> Self {
        Self::new(Templates)
    }
}

pub const DEFAULT_PORT: u16 = 3333;

fn build_router(ctx: Ctx) -> Router {
    Router::new()
        .route(routes::home::PATH_HOME, get(routes::home::handler_home))
        .route(routes::about::PATH_ABOUT, get(routes::about::handler_about))
        .with_state(ctx)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    tower_http::trace::DefaultMakeSpan::new().level(tracing::Level::INFO),
                )
                .on_response(
                    tower_http::trace::DefaultOnResponse::new().level(tracing::Level::INFO),
                ),
        )
        .layer(
            // Graceful shutdown waits for outstanding requests.
            tower_http::timeout::TimeoutLayer::new(Duration::from_secs(30)),
        )
}

async fn run_server(addr: SocketAddr, ctx: Ctx) -> Result<(), anyhow::Error> {
    tracing::info!("starting server: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("could not bind port")?;

    let app = build_router(ctx);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("received shutdown signal");
}

#[derive(Debug)]
struct HtmlError {
    message: String,
    status: StatusCode,
    source: Option<anyhow::Error>,
}

impl From<anyhow::Error> for HtmlError {
    fn from(source: anyhow::Error) -> Self {
        Self {
            message: source.to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: Some(source),
        }
    }
}

/// Error rendered as a full page, inside the regular layout.
#[derive(Debug)]
struct HtmlErrorPage(HtmlError);

impl From<anyhow::Error> for HtmlErrorPage {
    fn from(source: anyhow::Error) -> Self {
        Self(HtmlError::from(source))
    }
}

impl axum::response::IntoResponse for HtmlErrorPage {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(status = %self.0.status, "render failed: {}", self.0.message);

        let body = ui::render_html_error_page(&self.0);

        (
            self.0.status,
            [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
async fn test_client_with_ctx(ctx: Ctx) -> axum_test_helper::TestClient {
    let app = build_router(ctx);
    axum_test_helper::TestClient::new(app).await
}

#[cfg(test)]
async fn test_client() -> axum_test_helper::TestClient {
    test_client_with_ctx(Ctx::default()).await
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        http::{request::Parts, Request, StatusCode},
        response::Html,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::server::render::Context;

    #[derive(Debug, Clone)]
    pub struct RenderCall {
        pub path: String,
        pub template: String,
        pub context: Context,
    }

    /// Renderer that records every call and echoes the template name.
    #[derive(Clone, Default)]
    pub struct RecordingRenderer {
        calls: Arc<Mutex<Vec<RenderCall>>>,
    }

    impl RecordingRenderer {
        pub fn ctx() -> (Self, Ctx) {
            let renderer = Self::default();
            let ctx = Ctx::new(renderer.clone());
            (renderer, ctx)
        }

        pub fn request(uri: &str) -> Parts {
            Self::request_with_headers(uri, &[])
        }

        pub fn request_with_headers(uri: &str, headers: &[(&str, &str)]) -> Parts {
            let mut builder = Request::builder().uri(uri);
            for (name, value) in headers {
                builder = builder.header(*name, *value);
            }
            let (parts, _) = builder.body(()).unwrap().into_parts();
            parts
        }

        pub fn calls(&self) -> Vec<RenderCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Render for RecordingRenderer {
        fn render(
            &self,
            request: &Parts,
            template: &str,
            context: Context,
        ) -> Result<Html<String>, anyhow::Error> {
            self.calls.lock().unwrap().push(RenderCall {
                path: request.uri.path().to_string(),
                template: template.to_string(),
                context,
            });
            Ok(Html(template.to_string()))
        }
    }

    struct FailingRenderer;

    impl Render for FailingRenderer {
        fn render(
            &self,
            _request: &Parts,
            template: &str,
            _context: Context,
        ) -> Result<Html<String>, anyhow::Error> {
            anyhow::bail!("template '{template}' does not exist")
        }
    }

    #[tokio::test]
    async fn test_dispatch_routes_to_handlers() {
        let (renderer, ctx) = RecordingRenderer::ctx();
        let client = test_client_with_ctx(ctx).await;

        let res = client.get("/").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await, "people/home.html");

        let res = client.get("/about/").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await, "people/about.html");

        let calls = renderer.calls();
        let paths: Vec<&str> = calls.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/about/"]);
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (renderer, ctx) = RecordingRenderer::ctx();
        let client = test_client_with_ctx(ctx).await;

        let res = client.get("/posts/1").send().await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(renderer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_render_failure_becomes_error_page() {
        let client = test_client_with_ctx(Ctx::new(FailingRenderer)).await;

        let res = client.get("/about/").send().await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = res.text().await;
        assert!(body.contains("does not exist"));
        assert!(body.contains("notification is-danger"));
    }

    #[tokio::test]
    async fn test_home_page_lists_posts_in_order() {
        let client = test_client().await;

        let res = client.get("/").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.text().await;

        let positions: Vec<usize> = crate::people::POSTS
            .iter()
            .map(|post| {
                body.find(post.title.as_ref())
                    .unwrap_or_else(|| panic!("missing post '{}'", post.title))
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);

        assert!(body.contains("Axel-Cleris Gailloty"));
        assert!(body.contains("There are quite of good libraries for data science in Python"));
    }

    #[tokio::test]
    async fn test_about_page() {
        let client = test_client().await;

        let res = client.get("/about/").send().await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = res.text().await;
        assert!(body.contains("About"));
        assert!(!body.contains("Learning Python"));
    }
}
