mod assets;
mod error;

use std::{sync::Arc, time::Duration};

use axum::{
    Json,
    Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use self::error::AppError;
use crate::{
    api::models::{CalculationRequest, CalculationResults},
    core::calculator::{Calculator, PlantParameters},
    prelude::*,
};

struct AppState {
    calculator: Calculator,
}

pub fn router(calculator: Calculator, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/static/js/index.js", get(assets::script))
        .route("/calculator", post(calculate))
        .fallback(|| async { AppError::not_found("not found") })
        .with_state(Arc::new(AppState { calculator }))
        .layer((TraceLayer::new_for_http(), TimeoutLayer::new(request_timeout)))
}

pub async fn serve(listener: TcpListener, router: Router) -> Result {
    info!(address = %listener.local_addr()?, "serving…");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("the server has failed")
}

/// Per <https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs>.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("shutting down…");
}

/// The body is decoded as JSON regardless of its content type.
#[instrument(skip_all)]
async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CalculationResults>, AppError> {
    let request: CalculationRequest = serde_json::from_slice(&body).map_err(|error| {
        warn!("failed to decode the request: {error:#}");
        AppError::bad_request("Invalid request body")
    })?;
    let report = tokio::task::spawn_blocking(move || {
        state.calculator.calculate(&PlantParameters::from(request))
    })
    .await
    .map_err(|error| {
        error!("the calculation has panicked: {error:#}");
        AppError::internal("Failed to calculate")
    })?
    .inspect_err(|error| warn!("rejected: {error:#}"))?;
    Ok(Json(CalculationResults::from(&report)))
}

#[cfg(test)]
pub async fn spawn(router: Router) -> Result<std::net::SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move { axum::serve(listener, router).await });
    Ok(address)
}
