//! JSON REST handlers for devices.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use netdevices_app::ports::DeviceRepository;
use netdevices_domain::device::Device;

use crate::error::ApiError;
use crate::state::AppState;

/// Decode a device from a raw request body.
///
/// The `Content-Type` header is not consulted.
fn decode_device(body: &[u8]) -> Result<Device, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::InvalidPayload)
}

/// Body returned by the delete endpoint.
#[derive(Serialize)]
pub struct DeleteBody {
    pub result: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Device>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /devices`
pub async fn list<DR>(State(state): State<AppState<DR>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    let presented = devices.iter().map(Device::present).collect();
    Ok(ListResponse::Ok(Json(presented)))
}

/// `GET /devices/{fqdn}`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(fqdn): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = state.device_service.get_device(&fqdn).await?;
    Ok(GetResponse::Ok(Json(device.present())))
}

/// `POST /devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = decode_device(&body)?;
    let created = state.device_service.create_device(device).await?;
    Ok(CreateResponse::Created(Json(created.present())))
}

/// `PUT /devices`
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    body: Bytes,
) -> Result<UpdateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device = decode_device(&body)?;
    let updated = state.device_service.update_device(device).await?;
    Ok(UpdateResponse::Ok(Json(updated.present())))
}

/// `DELETE /devices/{fqdn}`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(fqdn): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    state.device_service.delete_device(&fqdn).await?;
    Ok(DeleteResponse::Ok(Json(DeleteBody { result: "success" })))
}
