//! Minimal base response shape.
//!
//! [`BaseResponse`] is what every envelope looks like once the payload is
//! ignored. Consumers that only route on success or log failures can decode
//! any envelope into it, or bound on [`ResponseBase`] to accept either form.

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::timestamp::Timestamp;

/// Payload-free response: success flag, optional error text, timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: Timestamp,
}

/// Fields shared by every response shape.
pub trait ResponseBase {
    fn success(&self) -> bool;
    fn error(&self) -> Option<&str>;
    fn timestamp(&self) -> Timestamp;
}

impl ResponseBase for BaseResponse {
    fn success(&self) -> bool {
        self.success
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl<T> ResponseBase for ApiResponse<T> {
    fn success(&self) -> bool {
        self.is_success()
    }

    fn error(&self) -> Option<&str> {
        self.error_message()
    }

    fn timestamp(&self) -> Timestamp {
        ApiResponse::timestamp(self)
    }
}

impl<T> From<&ApiResponse<T>> for BaseResponse {
    fn from(resp: &ApiResponse<T>) -> Self {
        resp.base()
    }
}
