use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not a valid OpenAPI document: missing {0}")]
    MissingField(&'static str),

    #[error("not a valid OpenAPI document: {0}")]
    Invalid(String),
}
