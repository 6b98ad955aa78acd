//! Tracing bootstrap for services built on the imgsvg contracts.
//!
//! The contract crates only emit events. A consuming service installs the
//! subscriber once, normally through `imgsvg_types::config::Config::init_logging`
//! so the level comes from the same document as the conversion defaults.
//!
//! The configured level is the floor for every target. `RUST_LOG`
//! directives are layered on top of it, so `RUST_LOG=imgsvg_core=trace`
//! turns on envelope tracing without lowering the rest of the service.

use std::env;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

use crate::error::ContractError;

/// Install a stderr `fmt` subscriber filtered at `level` plus `RUST_LOG`.
pub fn init(level: &str) -> Result<(), ContractError> {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = filter_for(level, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ContractError::Logger(format!("subscriber already installed: {e}")))
}

/// Build the filter [`init`] installs, without touching global state.
pub fn filter_for(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, ContractError> {
    let mut filter = EnvFilter::default().add_directive(parse_level(level)?.into());

    let extra = rust_log
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty());
    for raw in extra {
        let directive: Directive = raw
            .parse()
            .map_err(|e| ContractError::Logger(format!("bad RUST_LOG directive '{raw}': {e}")))?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Parse a plain level name (`off`, `error` .. `trace`).
pub fn parse_level(level: &str) -> Result<LevelFilter, ContractError> {
    match level.trim() {
        "" => Err(ContractError::Logger("log level is empty".into())),
        name => name.parse::<LevelFilter>().map_err(|_| {
            ContractError::Logger(format!(
                "'{name}' is not one of off, error, warn, info, debug, trace"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(parse_level("warn").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_level(" debug ").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::OFF);
    }

    #[test]
    fn bad_level_names() {
        for bad in ["", "   ", "verbose", "INFO_LEVEL"] {
            let err = parse_level(bad).unwrap_err();
            assert!(matches!(err, ContractError::Logger(_)), "{bad:?}");
        }
    }

    #[test]
    fn configured_level_sets_the_ceiling_without_rust_log() {
        let filter = filter_for("warn", None).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn rust_log_directives_layer_on_top() {
        let filter = filter_for("info", Some("imgsvg_core=trace, ")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));

        let filter = filter_for("info", Some("")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn bad_rust_log_directive_is_reported() {
        let err = filter_for("info", Some("imgsvg_core=loud")).unwrap_err();
        assert!(err.to_string().contains("imgsvg_core=loud"));
    }

    #[test]
    fn bad_level_fails_before_installing_anything() {
        assert!(matches!(init("chatty"), Err(ContractError::Logger(_))));
    }
}
