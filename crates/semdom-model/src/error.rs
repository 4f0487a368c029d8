#![deny(unsafe_code)]

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid semantic domain code: {0:?}")]
    InvalidSemDomCode(String),
}
