use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::types::{
    book::{Book, BookId},
    form::BookForm,
    isbn::display_isbn,
};

pub const PLACEHOLDER_TEXT: &str = "No books registered.";
pub const LOAD_ERROR_TEXT: &str = "Error: could not load books.";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    #[default]
    Create,
    Update,
}

impl Display for SubmitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitMode::Create => write!(f, "Register book"),
            SubmitMode::Update => write!(f, "Update book"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind:     StatusKind,
    pub text:     String,
    pub shown_at: Instant,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    pub fn is_visible(&self, now: Instant, window: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) < window
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Book {
        id:    Option<BookId>,
        cells: [String; 5],
    },
    Placeholder(String),
    Error(String),
}

pub const TABLE_HEADER: [&str; 6] = ["ID", "Title", "Author", "ISBN", "Price", "Published"];

pub fn table_rows(books: &[Book]) -> Vec<TableRow> {
    if books.is_empty() {
        return vec![TableRow::Placeholder(PLACEHOLDER_TEXT.to_string())];
    }
    books
        .iter()
        .map(|book| TableRow::Book {
            id:    book.id,
            cells: [
                book.title.clone(),
                book.author.clone(),
                display_isbn(&book.isbn),
                book.price.map(|x| x.to_string()).unwrap_or_default(),
                book.publish_date.clone().unwrap_or_default(),
            ],
        })
        .collect()
}

pub trait BookView {
    fn render_list(&mut self, books: &[Book]);
    fn render_error(&mut self, message: &str);
    fn set_loading(&mut self, loading: bool);
    fn set_busy(&mut self, busy: bool);
    fn set_submit_mode(&mut self, mode: SubmitMode);
    fn show_status(&mut self, status: &StatusMessage);
    fn hide_status(&mut self);
    fn alert(&mut self, message: &str);
    fn confirm(&mut self, message: &str) -> bool;
    fn show_form(&mut self, form: &BookForm);
}
