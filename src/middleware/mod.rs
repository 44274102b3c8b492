// Request middleware, applied outermost first: origin gate, CORS, request log
pub mod origin_gate;
pub mod request_log;

pub use origin_gate::{check_origin, cors, OriginGate};
pub use request_log::log_request;
