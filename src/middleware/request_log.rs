use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error,
};
use chrono::Utc;

use crate::core::iso_timestamp;

/// Log method and path of every request before it is dispatched
pub async fn log_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    tracing::info!(
        timestamp = %iso_timestamp(&Utc::now()),
        method = %req.method(),
        path = %req.path(),
        "{} {}",
        req.method(),
        req.path()
    );

    next.call(req).await
}
