use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info};

use crate::device::Device;
use crate::error::AttestorServerError;
use crate::signing::{BatchOutcome, SigningEngine};
use crate::store::DeviceStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DeviceStore>,
    pub engine: Arc<SigningEngine>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/healthcheck",
            get(|| async move { (StatusCode::OK, "Ok").into_response() }),
        )
        .route("/api/devices", post(save_device))
        .route("/api/devices/signatures", get(device_signatures))
        .with_state(state)
}

pub async fn run(host: String, port: u16, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    info!(%host, port, "listening");

    axum::serve(listener, router(state).into_make_service()).await?;

    Ok(())
}

async fn save_device(
    State(state): State<AppState>,
    Json(device): Json<Device>,
) -> Result<Json<Device>, AttestorServerError> {
    if device.serial_number.is_empty() {
        return Err(AttestorServerError::BadDeviceRequest(
            "serialNumber must not be empty".into(),
        ));
    }
    if device.port_number.is_empty() {
        return Err(AttestorServerError::BadDeviceRequest(
            "portNumber must not be empty".into(),
        ));
    }

    Ok(Json(state.store.save(device)))
}

/// Signs every stored device. No devices is 404; any failure mid-batch
/// is 500 with an empty list, never a partial one.
async fn device_signatures(State(state): State<AppState>) -> Response {
    let devices = state.store.list_all();

    match state.engine.sign_all(&devices) {
        BatchOutcome::Empty => StatusCode::NOT_FOUND.into_response(),
        BatchOutcome::Success(signatures) => (StatusCode::OK, Json(signatures)).into_response(),
        BatchOutcome::Failure(error) => {
            error!(%error, "failed to sign device batch");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::<String>::new())).into_response()
        }
    }
}
