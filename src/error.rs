use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Error while performing HTTP request: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("Error while decoding JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}
