use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind} `{name}`")]
    UnknownField { kind: &'static str, name: String },
    #[error("malformed assignment `{0}`, expected key=value")]
    MalformedAssignment(String),
    #[error("failed to encode portfolio data: {0}")]
    Encode(#[from] serde_json::Error),
}
