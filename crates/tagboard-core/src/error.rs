pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid document: {message}")]
    InvalidDocument { message: String },

    #[error("document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
