use thiserror;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("failed to encode plan export: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode recipe data: {0}")]
    Decode(#[source] serde_json::Error),
}
