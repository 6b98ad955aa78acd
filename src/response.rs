//! Envelope constructors.
//!
//! Handlers obtain a payload or an error message however they like and hand
//! it to one of these two functions. Both read the clock once and cannot
//! fail.

use imgsvg_core::ApiResponse;

/// Success envelope: `{ success: true, data, timestamp }`.
///
/// `data` is moved into the envelope untouched.
pub fn success_response<T>(data: T) -> ApiResponse<T> {
    ApiResponse::success(data)
}

/// Error envelope: `{ success: false, error, timestamp }`, with no `data`.
///
/// `error` is stored verbatim, empty strings included.
pub fn error_response<T>(error: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::error(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{ConversionResponse, ConversionResult};

    #[test]
    fn success_carries_payload() {
        let result = ConversionResult::new("<svg/>", 100, 100);
        let resp = success_response(result.clone());
        assert!(resp.is_success());
        assert_eq!(resp.data(), Some(&result));
        assert_eq!(resp.error_message(), None);
    }

    #[test]
    fn error_is_verbatim() {
        let resp: ConversionResponse = error_response("  trailing space ");
        assert!(!resp.is_success());
        assert_eq!(resp.error_message(), Some("  trailing space "));
        assert!(resp.data().is_none());

        let empty: ConversionResponse = error_response("");
        assert_eq!(empty.error_message(), Some(""));
    }

    #[test]
    fn accepts_owned_strings() {
        let msg = format!("image too large: {}px", 20_000);
        let resp: ApiResponse<()> = error_response(msg);
        assert_eq!(resp.error_message(), Some("image too large: 20000px"));
    }

    #[test]
    fn consecutive_calls_do_not_go_backwards() {
        let first = success_response(1);
        let second = error_response::<i32>("x");
        let third = success_response(1);
        assert!(first.timestamp() <= second.timestamp());
        assert!(second.timestamp() <= third.timestamp());
    }
}
