use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Request to the account service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parsing(String),

    #[error("Could not find required element on the page: {0}")]
    NotFound(String),

    #[error("User details could not be resolved from the page")]
    IncompleteData,

    #[error("Unable to load the change password form")]
    FormUnavailable,
}

pub type Result<T> = std::result::Result<T, ScraperError>;
