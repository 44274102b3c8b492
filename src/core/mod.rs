// Request-independent helpers shared by the handlers
pub mod clock;
pub mod numbers;

pub use clock::{epoch_millis, iso_timestamp};
pub use numbers::parse_int_prefix;
