use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("empty request body")]
    EmptyBody,
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
