use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub u64);

impl Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id:           Option<BookId>,
    pub title:        String,
    pub author:       String,
    pub isbn:         String,
    #[serde(default)]
    pub price:        Option<f64>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub detail:       Option<BookDetail>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    #[serde(default)]
    pub description:     Option<String>,
    #[serde(default)]
    pub language:        Option<String>,
    #[serde(default)]
    pub page_count:      Option<i64>,
    #[serde(default)]
    pub publisher:       Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub edition:         Option<String>,
}

impl BookDetail {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
