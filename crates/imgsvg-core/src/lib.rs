//! imgsvg core: the foundation contract shared by every imgsvg client and
//! server.
//!
//! * [`ApiResponse`]: generic success/error envelope.
//! * [`BaseResponse`] / [`ResponseBase`]: the payload-free base shape.
//! * [`Timestamp`] / [`Clock`]: millisecond ISO-8601 envelope stamps.
//! * [`ContractError`]: decode, config, and logging failures.
//! * [`logger`]: tracing bootstrap for consuming services.

pub mod base;
pub mod envelope;
pub mod error;
pub mod logger;
pub mod timestamp;

pub use base::{BaseResponse, ResponseBase};
pub use envelope::ApiResponse;
pub use error::{ContractError, ShapeError};
pub use timestamp::{Clock, FixedClock, SystemClock, Timestamp};
