//! imgsvg types: the raster-to-SVG conversion contract.
//!
//! Shapes exchanged between conversion clients and servers, plus the two
//! envelope constructors handlers use to answer:
//!
//! ```
//! use imgsvg_types::{ConversionResponse, ConversionResult, error_response, success_response};
//!
//! let ok = success_response(ConversionResult::new("<svg/>", 100, 100));
//! assert!(ok.is_success());
//!
//! let failed: ConversionResponse = error_response("something went wrong");
//! assert_eq!(failed.error_message(), Some("something went wrong"));
//! ```
//!
//! The foundation shapes from `imgsvg-core` are re-exported so consumers
//! only need this crate.

pub mod config;
pub mod conversion;
pub mod response;

pub use conversion::{
    ConversionRequest, ConversionResponse, ConversionResult, DEFAULT_QUALITY,
    DEFAULT_TRANSPARENT_BG, MAX_QUALITY, MIN_QUALITY, QUALITY_RANGE,
};
pub use imgsvg_core::{ApiResponse, BaseResponse, ContractError, ResponseBase, Timestamp};
pub use response::{error_response, success_response};
