//! The generic response envelope.
//!
//! Every API operation in the imgsvg family answers with an [`ApiResponse`]:
//! either a payload or a human-readable error, plus the instant the answer
//! was built. On the wire the variant is carried by a boolean `success`
//! flag:
//!
//! ```text
//! {"success":true, "data":{...},        "timestamp":"2024-01-02T03:04:05.678Z"}
//! {"success":false,"error":"bad input", "timestamp":"2024-01-02T03:04:05.678Z"}
//! ```
//!
//! An error envelope never serializes a `data` key and a success envelope
//! never serializes an `error` key. Decoding holds incoming JSON to the same
//! rule and reports violations as [`ShapeError`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::base::BaseResponse;
use crate::error::{ContractError, ShapeError};
use crate::timestamp::{Clock, SystemClock, Timestamp};

/// Success-or-error answer carrying a payload of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    Success { data: T, timestamp: Timestamp },
    Error { error: String, timestamp: Timestamp },
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a success envelope stamped with the current time.
    pub fn success(data: T) -> Self {
        Self::success_at(&SystemClock, data)
    }

    /// Wrap `data` in a success envelope stamped by `clock`.
    pub fn success_at<C: Clock + ?Sized>(clock: &C, data: T) -> Self {
        let timestamp = clock.now();
        trace!(success = true, %timestamp, "envelope built");
        Self::Success { data, timestamp }
    }

    /// Build an error envelope around `error`, verbatim.
    pub fn error(error: impl Into<String>) -> Self {
        Self::error_at(&SystemClock, error)
    }

    /// Build an error envelope stamped by `clock`.
    pub fn error_at<C: Clock + ?Sized>(clock: &C, error: impl Into<String>) -> Self {
        let timestamp = clock.now();
        trace!(success = false, %timestamp, "envelope built");
        Self::Error { error: error.into(), timestamp }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Success { timestamp, .. } | Self::Error { timestamp, .. } => *timestamp,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Convert into a plain `Result`, dropping the timestamp.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Error { error, .. } => Err(error),
        }
    }

    /// Transform the payload, keeping the variant and the original timestamp.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Success { data, timestamp } => ApiResponse::Success { data: f(data), timestamp },
            Self::Error { error, timestamp } => ApiResponse::Error { error, timestamp },
        }
    }

    /// Project onto the payload-free [`BaseResponse`] shape.
    pub fn base(&self) -> BaseResponse {
        BaseResponse {
            success: self.is_success(),
            error: self.error_message().map(str::to_string),
            timestamp: self.timestamp(),
        }
    }

    fn from_wire(wire: Wire<T>) -> Result<Self, ShapeError> {
        match (wire.success, wire.data, wire.error) {
            (true, Some(data), None) => Ok(Self::Success { data, timestamp: wire.timestamp }),
            (true, None, _) => Err(ShapeError::MissingData),
            (true, Some(_), Some(_)) => Err(ShapeError::UnexpectedError),
            (false, None, Some(Some(error))) => Ok(Self::Error { error, timestamp: wire.timestamp }),
            (false, Some(_), _) => Err(ShapeError::UnexpectedData),
            (false, None, None | Some(None)) => Err(ShapeError::MissingError),
        }
    }
}

/// Any failure becomes an error envelope carrying its display text.
impl<T, E: fmt::Display> From<Result<T, E>> for ApiResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> Result<String, ContractError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode an envelope, keeping JSON errors and shape errors apart.
    pub fn from_json(raw: &str) -> Result<Self, ContractError> {
        let wire: Wire<T> = serde_json::from_str(raw).inspect_err(|e| {
            debug!(error = %e, "envelope is not valid json for the payload type");
        })?;
        let success = wire.success;
        Ok(Self::from_wire(wire).inspect_err(|e| {
            debug!(success, error = %e, "envelope fields disagree with success flag");
        })?)
    }
}

// ── Wire representation ──────────────────────────────────────────────────────

#[derive(Serialize)]
struct WireRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    timestamp: &'a Timestamp,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Wire<T> {
    success: bool,
    #[serde(default, deserialize_with = "present")]
    data: Option<T>,
    /// Outer `Some` whenever the key exists; `"error": null` is `Some(None)`.
    #[serde(default, deserialize_with = "present")]
    error: Option<Option<String>>,
    timestamp: Timestamp,
}

/// A key that exists is `Some`, even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            Self::Success { data, timestamp } => WireRef {
                success: true,
                data: Some(data),
                error: None,
                timestamp,
            },
            Self::Error { error, timestamp } => WireRef {
                success: false,
                data: None,
                error: Some(error.as_str()),
                timestamp,
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        Self::from_wire(wire).map_err(serde::de::Error::custom)
    }
}
