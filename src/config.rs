//! Recognized configuration with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `IMGSVG_LOG_LEVEL` and `IMGSVG_DEFAULT_QUALITY` env overrides.
//!
//! [`ConversionDefaults`] publishes the defaults a deployment documents for
//! requests that omit `quality` or `transparentBg`. This crate never applies
//! them to a request; the conversion service does.

use std::{env, fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use imgsvg_core::{ContractError, logger};

use crate::conversion::{DEFAULT_QUALITY, DEFAULT_TRANSPARENT_BG, QUALITY_RANGE};

/// Documented request defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionDefaults {
    /// Quality assumed when a request omits it. Always within 1..=10.
    pub quality: i32,
    /// Background handling assumed when a request omits it.
    pub transparent_bg: bool,
}

impl Default for ConversionDefaults {
    fn default() -> Self {
        Self { quality: DEFAULT_QUALITY, transparent_bg: DEFAULT_TRANSPARENT_BG }
    }
}

/// Fully-resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base level for [`Config::init_logging`]; `RUST_LOG` layers on top.
    pub log_level: String,
    pub conversion: ConversionDefaults,
}

impl Config {
    /// Install the process-wide tracing subscriber at `log_level`.
    ///
    /// Call once at service startup. A second call returns
    /// [`ContractError::Logger`] and leaves the first subscriber in place.
    pub fn init_logging(&self) -> Result<(), ContractError> {
        logger::init(&self.log_level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: default_log_level(), conversion: ConversionDefaults::default() }
    }
}

/// Raw TOML shape: `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    logging: RawLogging,
    #[serde(default)]
    conversion: RawConversion,
}

#[derive(Deserialize)]
struct RawLogging {
    #[serde(default = "default_log_level")]
    level: String,
}

impl Default for RawLogging {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

#[derive(Deserialize)]
struct RawConversion {
    #[serde(default = "default_quality")]
    default_quality: i32,
    #[serde(default = "default_transparent_bg")]
    transparent_bg: bool,
}

impl Default for RawConversion {
    fn default() -> Self {
        Self { default_quality: default_quality(), transparent_bg: default_transparent_bg() }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_quality() -> i32 { DEFAULT_QUALITY }
fn default_transparent_bg() -> bool { DEFAULT_TRANSPARENT_BG }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, ContractError> {
    let log_level_override = env::var("IMGSVG_LOG_LEVEL").ok();
    let quality_override = env::var("IMGSVG_DEFAULT_QUALITY").ok();
    load_from(
        Path::new("config/default.toml"),
        log_level_override.as_deref(),
        quality_override.as_deref(),
    )
}

/// Internal loader: accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    log_level_override: Option<&str>,
    quality_override: Option<&str>,
) -> Result<Config, ContractError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ContractError::Read { path: path.to_path_buf(), source })?;
    let config = parse(&raw, log_level_override, quality_override).map_err(|e| match e {
        ContractError::Config(msg) => ContractError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })?;

    debug!(
        path = %path.display(),
        log_level = %config.log_level,
        default_quality = config.conversion.quality,
        transparent_bg = config.conversion.transparent_bg,
        "config loaded"
    );
    Ok(config)
}

/// Resolve a TOML document into a [`Config`].
pub fn parse(
    raw: &str,
    log_level_override: Option<&str>,
    quality_override: Option<&str>,
) -> Result<Config, ContractError> {
    let parsed: RawConfig =
        toml::from_str(raw).map_err(|e| ContractError::Config(format!("parse error: {e}")))?;

    let log_level = log_level_override.unwrap_or(&parsed.logging.level).to_string();
    logger::parse_level(&log_level)?;

    let quality = match quality_override {
        Some(q) => q
            .trim()
            .parse::<i32>()
            .map_err(|e| ContractError::Config(format!("invalid default quality '{q}': {e}")))?,
        None => parsed.conversion.default_quality,
    };
    if !QUALITY_RANGE.contains(&quality) {
        return Err(ContractError::Config(format!(
            "default quality {quality} is outside {}..={}",
            QUALITY_RANGE.start(),
            QUALITY_RANGE.end()
        )));
    }

    Ok(Config {
        log_level,
        conversion: ConversionDefaults {
            quality,
            transparent_bg: parsed.conversion.transparent_bg,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_documented_defaults() {
        let cfg = parse("", None, None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.conversion.quality, 5);
        assert!(!cfg.conversion.transparent_bg);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn document_values_are_used() {
        let raw = r#"
            [logging]
            level = "debug"

            [conversion]
            default_quality = 9
            transparent_bg = true
        "#;
        let cfg = parse(raw, None, None).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.conversion, ConversionDefaults { quality: 9, transparent_bg: true });
    }

    #[test]
    fn overrides_win() {
        let raw = "[conversion]\ndefault_quality = 9\n";
        let cfg = parse(raw, Some("warn"), Some(" 2 ")).unwrap();
        assert_eq!(cfg.log_level, "warn");
        assert_eq!(cfg.conversion.quality, 2);
    }

    #[test]
    fn out_of_range_quality_is_rejected() {
        for q in ["0", "11", "-3"] {
            let err = parse("", None, Some(q)).unwrap_err();
            assert!(matches!(err, ContractError::Config(ref m) if m.contains("outside 1..=10")), "{q}: {err}");
        }
        assert!(parse("[conversion]\ndefault_quality = 12\n", None, None).is_err());
    }

    #[test]
    fn bounds_are_accepted() {
        assert_eq!(parse("", None, Some("1")).unwrap().conversion.quality, 1);
        assert_eq!(parse("", None, Some("10")).unwrap().conversion.quality, 10);
    }

    #[test]
    fn non_numeric_quality_override_is_rejected() {
        let err = parse("", None, Some("high")).unwrap_err();
        assert!(err.to_string().contains("invalid default quality 'high'"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = parse("[logging]\nlevel = \"chatty\"\n", None, None).unwrap_err();
        assert!(matches!(err, ContractError::Logger(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = parse("[conversion\n", None, None).unwrap_err();
        assert!(matches!(err, ContractError::Config(ref m) if m.starts_with("parse error")));
    }

    #[test]
    fn missing_file_keeps_path_and_io_source() {
        let err = load_from(Path::new("does/not/exist.toml"), None, None).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.toml"));
        match &err {
            ContractError::Read { path, source } => {
                assert_eq!(path, Path::new("does/not/exist.toml"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }
}
