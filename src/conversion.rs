//! Raster-to-SVG conversion shapes.
//!
//! These types only describe what crosses the wire between callers and the
//! conversion service. Nothing here validates a request or fills in its
//! defaults; the constants below document the defaults the service applies.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use imgsvg_core::ApiResponse;

/// Quality used when a request leaves `quality` unset.
pub const DEFAULT_QUALITY: i32 = 5;
pub const MIN_QUALITY: i32 = 1;
pub const MAX_QUALITY: i32 = 10;
/// Accepted quality values, inclusive. Enforced by callers, not by this shape.
pub const QUALITY_RANGE: RangeInclusive<i32> = MIN_QUALITY..=MAX_QUALITY;
/// Background handling when a request leaves `transparentBg` unset.
pub const DEFAULT_TRANSPARENT_BG: bool = false;

/// A request to vectorise one raster image.
///
/// Only `original` is required. Unset optional fields are omitted from the
/// JSON form and mean "use the documented default".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Encoded image bytes as text (typically base64 or a data URL). Opaque here.
    pub original: String,
    /// Source file name, metadata only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Tracing quality, conventionally within [`QUALITY_RANGE`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<i32>,
    /// Whether the produced SVG should omit its background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent_bg: Option<bool>,
}

impl ConversionRequest {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            filename: None,
            quality: None,
            transparent_bg: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Stored as given; out-of-range values are left for the service to reject.
    pub fn with_quality(mut self, quality: i32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_transparent_bg(mut self, transparent_bg: bool) -> Self {
        self.transparent_bg = Some(transparent_bg);
        self
    }
}

/// The vectorised image and the pixel size of its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Complete SVG document.
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

impl ConversionResult {
    pub fn new(svg: impl Into<String>, width: u32, height: u32) -> Self {
        Self { svg: svg.into(), width, height }
    }
}

/// Envelope returned by conversion endpoints.
pub type ConversionResponse = ApiResponse<ConversionResult>;
