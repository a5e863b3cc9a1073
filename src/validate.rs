use reqwest::Url;

use crate::{error::ValidationError, types::book::Book, types::isbn::is_isbn_char};

pub fn validate(book: &Book) -> Result<(), ValidationError> {
    if book.title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if book.author.trim().is_empty() {
        return Err(ValidationError::MissingAuthor);
    }
    let isbn = book.isbn.trim();
    if isbn.is_empty() {
        return Err(ValidationError::MissingIsbn);
    }
    if !isbn.chars().all(is_isbn_char) {
        return Err(ValidationError::InvalidIsbn);
    }
    if let Some(price) = book.price {
        if price.is_nan() {
            return Err(ValidationError::PriceNotANumber);
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }
    }
    if let Some(detail) = &book.detail {
        if detail.page_count.is_some_and(|pages| pages < 0) {
            return Err(ValidationError::NegativePageCount);
        }
        if let Some(url) = &detail.cover_image_url {
            if Url::parse(url).is_err() {
                return Err(ValidationError::InvalidCoverImageUrl);
            }
        }
    }
    Ok(())
}
