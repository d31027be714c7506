use std::{io, net::IpAddr};

use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Settings;

mod asset;
pub mod error;
mod health;
mod home;
mod not_found;

/// Shared state handed to every handler. Constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    debug: bool,
}

impl AppState {
    /// Wraps an error together with the debug flag, so the 500 page knows
    /// whether to show the error chain to the client.
    pub fn error(&self, e: impl Into<anyhow::Error>) -> error::AppError {
        error::AppError::new(e.into(), self.debug)
    }
}

fn app_router() -> Router<AppState> {
    home::router()
        .merge(health::router())
        .merge(asset::router())
        .fallback(not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    debug: bool,
}

impl App {
    pub async fn with(config: Settings) -> Self {
        let listener = tokio::net::TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .expect("The listener should be able to bind the address.");

        Self {
            listener,
            debug: config.application.debug,
        }
    }

    pub fn host(&self) -> IpAddr {
        self.listener.local_addr().unwrap().ip()
    }

    pub fn port(&self) -> u16 {
        self.listener.local_addr().unwrap().port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState { debug: self.debug })
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
