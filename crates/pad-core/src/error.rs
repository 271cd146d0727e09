//! Error types shared by the pad core and the web front-end.

use thiserror::Error;

/// Invalid control limits or pad configuration. Fatal to pad initialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ui angle must be within (0, 90) degrees, got {0}")]
    AngleOutOfRange(f32),
    #[error("missing page input '{0}'")]
    MissingInput(String),
    #[error("page input '{field}' has unparsable value '{value}'")]
    Unparsable { field: String, value: String },
    #[error("invalid pad geometry: {0}")]
    Geometry(String),
}

/// An outbound command, trim or telemetry request failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unreadable response: {0}")]
    Body(String),
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("malformed wheel status: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrimError {
    #[error("no wheel selected")]
    NoWheelSelected,
    #[error("unknown trim action '{0}'")]
    UnknownAction(String),
}
