use std::path::PathBuf;

use thiserror::Error;

use crate::host::InstanceId;

/// Failures at the host boundary: mounting, opcode application and event routing.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown host surface `{0}`")]
    UnknownSurface(String),

    #[error("host surface `{0}` already has a mounted tree")]
    AlreadyMounted(String),

    #[error("no component registered as `{0}`")]
    UnknownComponent(String),

    #[error("unknown component instance {0:?}")]
    UnknownInstance(InstanceId),

    #[error("`close` opcode with no open element")]
    UnbalancedClose,

    #[error("`{0}` opcode outside of an element")]
    OutsideElement(&'static str),

    #[error("element `<{0}>` was never closed")]
    UnclosedElement(String),

    #[error("nothing on surface `{surface}` handles `{event_type}` with `{handler}`")]
    NoEventTarget {
        surface: String,
        event_type: String,
        handler: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T, E = HostError> = std::result::Result<T, E>;
