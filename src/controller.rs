use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use crate::{
    api::BookApi,
    error::ApiError,
    types::{
        book::{Book, BookId},
        form::BookForm,
    },
    validate::validate,
    view::{BookView, StatusMessage, SubmitMode, LOAD_ERROR_TEXT},
};

pub const DEFAULT_STATUS_WINDOW: Duration = Duration::from_secs(3);

pub const MSG_CREATED: &str = "Book created successfully.";
pub const MSG_UPDATED: &str = "Book updated successfully.";
pub const MSG_DELETED: &str = "Book deleted successfully.";
pub const MSG_NOT_FOUND: &str = "Book not found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Rejected,
    Failed,
    Cancelled,
}

fn mutation_failure(action: &str, e: &ApiError) -> String {
    match e {
        ApiError::Conflict { .. } => format!("Duplicate book: {e}"),
        _ => format!("Failed to {action} book: {e}"),
    }
}

#[derive(Debug)]
pub struct BookFormController<A, V> {
    api:             A,
    view:            V,
    status_window:   Duration,
    form:            BookForm,
    books:           Vec<Book>,
    editing_book_id: Option<BookId>,
    submit_mode:     SubmitMode,
    busy:            bool,
    loading:         bool,
    status:          Option<StatusMessage>,
}

impl<A, V> BookFormController<A, V>
where
    A: BookApi,
    V: BookView,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            status_window: DEFAULT_STATUS_WINDOW,
            form: BookForm::default(),
            books: vec![],
            editing_book_id: None,
            submit_mode: SubmitMode::Create,
            busy: false,
            loading: false,
            status: None,
        }
    }

    pub fn with_status_window(mut self, window: Duration) -> Self {
        self.status_window = window;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn editing_book_id(&self) -> Option<BookId> {
        self.editing_book_id
    }

    pub fn submit_mode(&self) -> SubmitMode {
        self.submit_mode
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status_at(Instant::now())
    }

    pub fn status_at(&self, now: Instant) -> Option<&StatusMessage> {
        self.status
            .as_ref()
            .filter(|status| status.is_visible(now, self.status_window))
    }

    pub fn expire_status(&mut self) -> bool {
        self.expire_status_at(Instant::now())
    }

    pub fn expire_status_at(&mut self, now: Instant) -> bool {
        match &self.status {
            Some(status) if !status.is_visible(now, self.status_window) => {
                self.hide_status();
                true
            }
            _ => false,
        }
    }

    fn show_status(&mut self, status: StatusMessage) {
        self.view.show_status(&status);
        self.status = Some(status);
    }

    fn hide_status(&mut self) {
        self.status = None;
        self.view.hide_status();
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.view.set_busy(busy);
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.view.set_loading(loading);
    }

    fn set_submit_mode(&mut self, mode: SubmitMode) {
        self.submit_mode = mode;
        self.view.set_submit_mode(mode);
    }

    fn reset_form(&mut self) {
        self.form = BookForm::default();
        self.view.show_form(&self.form);
    }

    fn clear_editing(&mut self) {
        self.editing_book_id = None;
        self.set_submit_mode(SubmitMode::Create);
        self.reset_form();
    }

    pub async fn list(&mut self) -> Outcome {
        debug!("Loading book list");
        self.set_loading(true);
        let result = self.api.list().await;
        self.set_loading(false);
        match result {
            Ok(books) => {
                info!(count = books.len(), "Loaded books");
                self.view.render_list(&books);
                self.books = books;
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Loading books failed");
                self.books.clear();
                self.show_status(StatusMessage::error(e.to_string()));
                self.view.render_error(LOAD_ERROR_TEXT);
                Outcome::Failed
            }
        }
    }

    pub fn validate(&mut self, book: &Book) -> bool {
        match validate(book) {
            Ok(()) => true,
            Err(e) => {
                warn!(reason = %e, "Book rejected");
                self.view.alert(&e.to_string());
                false
            }
        }
    }

    pub async fn submit(&mut self, form: BookForm) -> Outcome {
        self.form = form;
        let book = match self.form.to_book() {
            Ok(book) => book,
            Err(e) => {
                warn!(reason = %e, "Book rejected");
                self.view.alert(&e.to_string());
                return Outcome::Rejected;
            }
        };
        if !self.validate(&book) {
            return Outcome::Rejected;
        }
        match self.editing_book_id {
            Some(id) => self.update(id, book).await,
            None => self.create(book).await,
        }
    }

    pub async fn create(&mut self, book: Book) -> Outcome {
        debug!(title = %book.title, "Creating book");
        self.set_busy(true);
        let result = self.api.create(&book).await;
        self.set_busy(false);
        match result {
            Ok(created) => {
                info!(id = ?created.and_then(|book| book.id), "Book created");
                self.show_status(StatusMessage::success(MSG_CREATED));
                self.clear_editing();
                self.list().await;
                Outcome::Done
            }
            Err(e) => {
                error!(error = %e, "Creating book failed");
                self.show_status(StatusMessage::error(mutation_failure("create", &e)));
                Outcome::Failed
            }
        }
    }

    pub async fn update(&mut self, id: BookId, book: Book) -> Outcome {
        debug!(%id, "Updating book");
        self.set_busy(true);
        let result = self.api.update(id, &book).await;
        self.set_busy(false);
        match result {
            Ok(_) => {
                info!(%id, "Book updated");
                self.show_status(StatusMessage::success(MSG_UPDATED));
                self.clear_editing();
                self.list().await;
                Outcome::Done
            }
            Err(e) => {
                error!(%id, error = %e, "Updating book failed");
                self.show_status(StatusMessage::error(mutation_failure("update", &e)));
                Outcome::Failed
            }
        }
    }

    pub async fn delete(&mut self, id: BookId) -> Outcome {
        let label = self
            .books
            .iter()
            .find(|book| book.id == Some(id))
            .map(|book| format!("\"{}\"", book.title))
            .unwrap_or_else(|| format!("book {id}"));
        if !self.view.confirm(&format!("Delete {label}?")) {
            debug!(%id, "Delete declined");
            return Outcome::Cancelled;
        }
        self.set_busy(true);
        let result = self.api.delete(id).await;
        self.set_busy(false);
        match result {
            Ok(()) => {
                info!(%id, "Book deleted");
                self.show_status(StatusMessage::success(MSG_DELETED));
                self.list().await;
                Outcome::Done
            }
            Err(ApiError::NotFound(_)) => {
                warn!(%id, "Book to delete not found");
                self.show_status(StatusMessage::error(MSG_NOT_FOUND));
                Outcome::Failed
            }
            Err(e) => {
                error!(%id, error = %e, "Deleting book failed");
                self.show_status(StatusMessage::error(format!("Failed to delete book: {e}")));
                Outcome::Failed
            }
        }
    }

    pub async fn edit(&mut self, id: BookId) -> Outcome {
        debug!(%id, "Loading book for editing");
        match self.api.get(id).await {
            Ok(book) => {
                self.form = BookForm::from_book(&book);
                self.editing_book_id = Some(id);
                self.set_submit_mode(SubmitMode::Update);
                self.view.show_form(&self.form);
                Outcome::Done
            }
            Err(ApiError::NotFound(_)) => {
                warn!(%id, "Book to edit not found");
                self.show_status(StatusMessage::error(MSG_NOT_FOUND));
                Outcome::Failed
            }
            Err(e) => {
                error!(%id, error = %e, "Loading book failed");
                self.show_status(StatusMessage::error(format!("Failed to load book: {e}")));
                Outcome::Failed
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        debug!(id = ?self.editing_book_id, "Edit cancelled");
        self.clear_editing();
        self.hide_status();
    }
}
