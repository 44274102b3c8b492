use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpRequest,
};

use crate::config::CorsSettings;
use crate::error::ApiError;

/// Allow-list check on the `Origin` request header
///
/// Requests without an origin (server-to-server calls, curl) always pass.
#[derive(Debug, Clone)]
pub struct OriginGate {
    allowed_origins: Vec<String>,
    supports_credentials: bool,
}

impl OriginGate {
    pub fn new(allowed_origins: Vec<String>, supports_credentials: bool) -> Self {
        Self {
            allowed_origins,
            supports_credentials,
        }
    }

    pub fn from_settings(settings: &CorsSettings) -> Self {
        Self::new(settings.allowed_origins.clone(), settings.supports_credentials)
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn supports_credentials(&self) -> bool {
        self.supports_credentials
    }

    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    pub fn check(&self, origin: Option<&str>) -> Result<(), ApiError> {
        match origin {
            None => Ok(()),
            Some(origin) if self.is_allowed(origin) => Ok(()),
            Some(origin) => Err(ApiError::OriginRejected {
                origin: origin.to_string(),
            }),
        }
    }
}

/// Declared origin of a request, if any
///
/// A header that is not valid visible ASCII is kept as its lossy text so it
/// can never match an allow-list entry by accident.
pub fn request_origin(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::ORIGIN)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

/// Middleware rejecting requests from origins outside the allow-list
///
/// Rejections are rendered by the error responder before routing happens.
pub async fn check_origin(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let verdict = match req.app_data::<web::Data<OriginGate>>() {
        Some(gate) => gate.check(request_origin(req.request()).as_deref()),
        None => Err(ApiError::Internal("origin gate is not configured".to_string())),
    };

    if let Err(err) = verdict {
        return Ok(req.error_response(err).map_into_right_body());
    }

    Ok(next.call(req).await?.map_into_left_body())
}

/// CORS response headers for origins the gate lets through
pub fn cors(gate: &OriginGate) -> Cors {
    let predicate_gate = gate.clone();
    let cors = Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|origin| predicate_gate.is_allowed(origin))
                .unwrap_or(false)
        })
        .allow_any_method()
        .allow_any_header();

    if gate.supports_credentials() {
        cors.supports_credentials()
    } else {
        cors
    }
}
