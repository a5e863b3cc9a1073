use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::book::{Book, BookDetail};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookForm {
    pub title:           String,
    pub author:          String,
    pub isbn:            String,
    pub price:           String,
    pub publish_date:    String,
    pub description:     String,
    pub language:        String,
    pub page_count:      String,
    pub publisher:       String,
    pub cover_image_url: String,
    pub edition:         String,
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        let detail = book.detail.clone().unwrap_or_default();
        Self {
            title:           book.title.clone(),
            author:          book.author.clone(),
            isbn:            book.isbn.clone(),
            price:           book.price.map(|x| x.to_string()).unwrap_or_default(),
            publish_date:    book.publish_date.clone().unwrap_or_default(),
            description:     detail.description.unwrap_or_default(),
            language:        detail.language.unwrap_or_default(),
            page_count:      detail.page_count.map(|x| x.to_string()).unwrap_or_default(),
            publisher:       detail.publisher.unwrap_or_default(),
            cover_image_url: detail.cover_image_url.unwrap_or_default(),
            edition:         detail.edition.unwrap_or_default(),
        }
    }

    pub fn to_book(&self) -> Result<Book, ValidationError> {
        let price = match optional(&self.price) {
            Some(price) => Some(
                price
                    .parse::<f64>()
                    .ok()
                    .filter(|x| x.is_finite())
                    .ok_or(ValidationError::PriceNotANumber)?,
            ),
            None => None,
        };
        let page_count = match optional(&self.page_count) {
            Some(pages) => Some(
                pages
                    .parse::<i64>()
                    .map_err(|_| ValidationError::PageCountNotAnInteger)?,
            ),
            None => None,
        };
        let detail = BookDetail {
            description: optional(&self.description),
            language: optional(&self.language),
            page_count,
            publisher: optional(&self.publisher),
            cover_image_url: optional(&self.cover_image_url),
            edition: optional(&self.edition),
        };
        Ok(Book {
            id: None,
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            price,
            publish_date: optional(&self.publish_date),
            detail: (!detail.is_empty()).then_some(detail),
        })
    }
}
