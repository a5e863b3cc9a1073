use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{ApiError, ApiResult},
    types::book::{Book, BookId},
};

pub const BOOKS_PATH: &str = "api/books";

#[allow(async_fn_in_trait)]
pub trait BookApi {
    async fn list(&self) -> ApiResult<Vec<Book>>;
    async fn get(&self, id: BookId) -> ApiResult<Book>;
    /// `None` when the server answered with an empty body.
    async fn create(&self, book: &Book) -> ApiResult<Option<Book>>;
    async fn update(&self, id: BookId, book: &Book) -> ApiResult<Option<Book>>;
    async fn delete(&self, id: BookId) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpBookApi {
    client:   reqwest::Client,
    base_url: Url,
}

impl HttpBookApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // relative joins only keep the last path segment of a base ending in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    fn books_url(&self) -> ApiResult<Url> {
        self.base_url
            .join(BOOKS_PATH)
            .map_err(|e| ApiError::Url(e.to_string()))
    }

    fn book_url(&self, id: BookId) -> ApiResult<Url> {
        self.base_url
            .join(&format!("{BOOKS_PATH}/{id}"))
            .map_err(|e| ApiError::Url(e.to_string()))
    }
}

fn status_code(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|x| u16::try_from(x).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });
    warn!(status = status.as_u16(), %message, "Request failed");
    Err(match status {
        StatusCode::CONFLICT => ApiError::Conflict {
            message,
            status_code: body
                .get("statusCode")
                .and_then(status_code)
                .unwrap_or(status.as_u16()),
        },
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    })
}

fn decode_str<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let de = &mut serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(de).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    decode_str(&response.text().await?)
}

async fn decode_optional<T: DeserializeOwned>(response: Response) -> ApiResult<Option<T>> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    decode_str(&text).map(Some)
}

impl BookApi for HttpBookApi {
    async fn list(&self) -> ApiResult<Vec<Book>> {
        let url = self.books_url()?;
        debug!(%url, "GET");
        let response = check(self.client.get(url).send().await?).await?;
        decode(response).await
    }

    async fn get(&self, id: BookId) -> ApiResult<Book> {
        let url = self.book_url(id)?;
        debug!(%url, "GET");
        let response = check(self.client.get(url).send().await?).await?;
        decode(response).await
    }

    async fn create(&self, book: &Book) -> ApiResult<Option<Book>> {
        let url = self.books_url()?;
        debug!(%url, "POST");
        let response = check(self.client.post(url).json(book).send().await?).await?;
        decode_optional(response).await
    }

    async fn update(&self, id: BookId, book: &Book) -> ApiResult<Option<Book>> {
        let url = self.book_url(id)?;
        debug!(%url, "PUT");
        let response = check(self.client.put(url).json(book).send().await?).await?;
        decode_optional(response).await
    }

    async fn delete(&self, id: BookId) -> ApiResult<()> {
        let url = self.book_url(id)?;
        debug!(%url, "DELETE");
        check(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}
