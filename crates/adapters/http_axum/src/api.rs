//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::Router;
use axum::routing::get;

use netdevices_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the device API router.
///
/// | Method | Path              |
/// |--------|-------------------|
/// | GET    | `/devices`        |
/// | POST   | `/devices`        |
/// | PUT    | `/devices`        |
/// | GET    | `/devices/{fqdn}` |
/// | DELETE | `/devices/{fqdn}` |
pub fn routes<DR>() -> Router<AppState<DR>>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/devices",
            get(devices::list::<DR>)
                .post(devices::create::<DR>)
                .put(devices::update::<DR>),
        )
        .route(
            "/devices/{fqdn}",
            get(devices::get::<DR>).delete(devices::delete::<DR>),
        )
}
