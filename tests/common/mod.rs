#![allow(dead_code)]

use std::sync::Mutex;

use bookform::{
    api::BookApi,
    error::{ApiError, ApiResult},
    types::{
        book::{Book, BookId},
        form::BookForm,
    },
    view::{table_rows, BookView, StatusKind, StatusMessage, SubmitMode, TableRow},
};

// ============================================================================
// In-memory backend
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(BookId),
    Create(Book),
    Update(BookId, Book),
    Delete(BookId),
}

#[derive(Debug, Default)]
pub struct FakeApi {
    books:     Mutex<Vec<Book>>,
    calls:     Mutex<Vec<Call>>,
    fail_next: Mutex<Option<ApiError>>,
    next_id:   Mutex<u64>,
}

impl FakeApi {
    pub fn with_books(books: Vec<Book>) -> Self {
        let api = Self::default();
        for book in books {
            api.insert(book);
        }
        api
    }

    fn insert(&self, mut book: Book) -> Book {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        book.id = Some(BookId(*next_id));
        self.books.lock().unwrap().push(book.clone());
        book
    }

    /// The next request fails with `e`.
    pub fn fail_next(&self, e: ApiError) {
        *self.fail_next.lock().unwrap() = Some(e);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_next.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::NotFound("Book not found".into())
    }
}

impl BookApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Book>> {
        self.record(Call::List)?;
        Ok(self.books())
    }

    async fn get(&self, id: BookId) -> ApiResult<Book> {
        self.record(Call::Get(id))?;
        self.books()
            .into_iter()
            .find(|book| book.id == Some(id))
            .ok_or_else(Self::not_found)
    }

    async fn create(&self, book: &Book) -> ApiResult<Option<Book>> {
        self.record(Call::Create(book.clone()))?;
        Ok(Some(self.insert(book.clone())))
    }

    async fn update(&self, id: BookId, book: &Book) -> ApiResult<Option<Book>> {
        self.record(Call::Update(id, book.clone()))?;
        let mut books = self.books.lock().unwrap();
        let stored = books
            .iter_mut()
            .find(|stored| stored.id == Some(id))
            .ok_or_else(Self::not_found)?;
        *stored = Book {
            id: Some(id),
            ..book.clone()
        };
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: BookId) -> ApiResult<()> {
        self.record(Call::Delete(id))?;
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| book.id != Some(id));
        if books.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

// ============================================================================
// Recording view
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RenderList(usize),
    RenderError(String),
    Loading(bool),
    Busy(bool),
    SubmitMode(SubmitMode),
    Status(StatusKind, String),
    HideStatus,
    Alert(String),
    Confirm(String),
    ShowForm(BookForm),
}

#[derive(Debug)]
pub struct RecordingView {
    pub events:         Vec<Event>,
    pub rows:           Vec<TableRow>,
    pub confirm_answer: bool,
}

impl RecordingView {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            events: vec![],
            rows: vec![],
            confirm_answer,
        }
    }

    pub fn statuses(&self) -> Vec<(StatusKind, String)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Status(kind, text) => Some((*kind, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl BookView for RecordingView {
    fn render_list(&mut self, books: &[Book]) {
        self.rows = table_rows(books);
        self.events.push(Event::RenderList(books.len()));
    }

    fn render_error(&mut self, message: &str) {
        self.rows = vec![TableRow::Error(message.to_string())];
        self.events.push(Event::RenderError(message.to_string()));
    }

    fn set_loading(&mut self, loading: bool) {
        self.events.push(Event::Loading(loading));
    }

    fn set_busy(&mut self, busy: bool) {
        self.events.push(Event::Busy(busy));
    }

    fn set_submit_mode(&mut self, mode: SubmitMode) {
        self.events.push(Event::SubmitMode(mode));
    }

    fn show_status(&mut self, status: &StatusMessage) {
        self.events
            .push(Event::Status(status.kind, status.text.clone()));
    }

    fn hide_status(&mut self) {
        self.events.push(Event::HideStatus);
    }

    fn alert(&mut self, message: &str) {
        self.events.push(Event::Alert(message.to_string()));
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.events.push(Event::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn show_form(&mut self, form: &BookForm) {
        self.events.push(Event::ShowForm(form.clone()));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn dracula() -> Book {
    Book {
        id: None,
        title: "Dracula".into(),
        author: "Bram Stoker".into(),
        isbn: "9780141439846".into(),
        price: Some(9.99),
        publish_date: Some("1897-05-26".into()),
        detail: None,
    }
}

pub fn frankenstein() -> Book {
    Book {
        id: None,
        title: "Frankenstein".into(),
        author: "Mary Shelley".into(),
        isbn: "9780141439471".into(),
        price: None,
        publish_date: None,
        detail: None,
    }
}

pub fn form_for(book: &Book) -> BookForm {
    BookForm::from_book(book)
}
