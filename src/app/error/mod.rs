use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be returned in a `Result` from a handler
/// function.
///
/// Carries the debug flag captured at construction: with debug enabled the
/// rendered 500 page includes the full error chain, otherwise the client only
/// sees a generic failure page. The chain is logged either way.
#[derive(thiserror::Error, Debug)]
#[error("{source}")]
pub struct AppError {
    #[source]
    source: anyhow::Error,
    debug: bool,
}

impl AppError {
    pub fn new(source: anyhow::Error, debug: bool) -> Self {
        Self { source, debug }
    }
}

#[derive(Template)]
#[template(path = "500.html")]
struct ServerErrorTemplate {
    detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{:?}", self.source);

        let detail = self.debug.then(|| format!("{:?}", self.source));
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ServerErrorTemplate { detail },
        )
            .into_response()
    }
}
