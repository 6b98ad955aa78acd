//! Error types shared by the contract crates.
//!
//! Building an envelope never fails. These errors only surface when an
//! envelope is decoded from the wire, when configuration is loaded, or when
//! the logging bootstrap is misused.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("envelope shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A decoded envelope whose fields disagree with its `success` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("success envelope is missing `data`")]
    MissingData,

    #[error("error envelope is missing `error`")]
    MissingError,

    #[error("success envelope carries an `error` field")]
    UnexpectedError,

    #[error("error envelope carries a `data` field")]
    UnexpectedData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_display() {
        let e = ContractError::Config("default_quality out of range".into());
        assert!(e.to_string().starts_with("config error"));
        assert!(e.to_string().contains("default_quality out of range"));
    }

    #[test]
    fn shape_error_converts() {
        let e: ContractError = ShapeError::MissingData.into();
        assert!(e.to_string().contains("missing `data`"));
        assert!(matches!(e, ContractError::Shape(ShapeError::MissingData)));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: ContractError = json_err.into();
        assert!(e.to_string().contains("json error"));
        let _: &dyn Error = &e;
    }

    #[test]
    fn read_error_names_path_and_keeps_source() {
        let e = ContractError::Read {
            path: PathBuf::from("config/default.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"),
        };
        assert_eq!(e.to_string(), "cannot read config/default.toml: file missing");
        let source = e.source().expect("io source");
        assert!(source.to_string().contains("file missing"));
    }
}
