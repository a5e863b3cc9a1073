use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title.")]
    MissingTitle,
    #[error("Please enter an author.")]
    MissingAuthor,
    #[error("Please enter an ISBN.")]
    MissingIsbn,
    #[error("ISBN may only contain digits, 'X' and '-'.")]
    InvalidIsbn,
    #[error("Price must be a number.")]
    PriceNotANumber,
    #[error("Price must be zero or greater.")]
    NegativePrice,
    #[error("Page count must be a whole number.")]
    PageCountNotAnInteger,
    #[error("Page count must be zero or greater.")]
    NegativePageCount,
    #[error("Cover image URL is not a valid URL.")]
    InvalidCoverImageUrl,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message} (status {status_code})")]
    Conflict { message: String, status_code: u16 },
    #[error("{0}")]
    NotFound(String),
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid request url: {0}")]
    Url(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
