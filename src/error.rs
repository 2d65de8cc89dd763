use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("API Error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0} environment variable not found.")]
    MissingCredential(&'static str),

    #[error("Generation Failed: {0}")]
    GenerationFailed(String),

    #[error("Empty Response: {0}")]
    EmptyResponse(&'static str),
}
