use crate::{
    config::{Config, OutputConfig, StyleConfig, Styleable},
    types::{
        book::{Book, BookId},
        form::BookForm,
    },
    view::{table_rows, BookView, StatusKind, StatusMessage, SubmitMode, TableRow, TABLE_HEADER},
};

#[derive(Debug)]
pub struct TerminalView {
    config:      Config,
    assume_yes:  bool,
    submit_mode: SubmitMode,
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

impl TerminalView {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            assume_yes: false,
            submit_mode: SubmitMode::Create,
        }
    }

    pub fn set_assume_yes(&mut self, yes: bool) {
        self.assume_yes = yes;
    }

    fn column_styles(&self) -> [&StyleConfig; 6] {
        [
            &self.config.style_id,
            &self.config.style_title,
            &self.config.style_author,
            &self.config.style_isbn,
            &self.config.style_price,
            &self.config.style_publish_date,
        ]
    }

    fn book_cells(id: &Option<BookId>, cells: &[String; 5]) -> [String; 6] {
        let id = id.map(|x| x.to_string()).unwrap_or_else(|| "-".into());
        let [title, author, isbn, price, date] = cells.clone();
        [id, title, author, isbn, price, date]
    }

    pub fn format_table(&self, rows: &[TableRow]) -> Vec<String> {
        let mut widths = TABLE_HEADER.map(|h| h.chars().count());
        for row in rows {
            if let TableRow::Book { id, cells } = row {
                for (width, cell) in widths.iter_mut().zip(Self::book_cells(id, cells).iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut lines = vec![TABLE_HEADER
            .iter()
            .zip(widths.iter())
            .map(|(h, w)| pad(h, *w).style(&self.config.style_header))
            .collect::<Vec<_>>()
            .join("  ")];
        for row in rows {
            let line = match row {
                TableRow::Book { id, cells } => Self::book_cells(id, cells)
                    .iter()
                    .zip(widths.iter())
                    .zip(self.column_styles())
                    .map(|((cell, w), style)| pad(cell, *w).style(style))
                    .collect::<Vec<_>>()
                    .join("  "),
                TableRow::Placeholder(text) => self.config.output_placeholder.format(text),
                TableRow::Error(text) => self.config.output_error.format(text),
            };
            lines.push(line);
        }
        lines
    }

    pub fn mode_change(&mut self, mode: SubmitMode) -> Option<String> {
        if mode == self.submit_mode {
            return None;
        }
        self.submit_mode = mode;
        Some(self.config.output_loading.format(format!("Submit: {mode}")))
    }

    pub fn form_lines(&self, form: &BookForm) -> Vec<String> {
        let fields = [
            ("Title:", &form.title),
            ("Author:", &form.author),
            ("ISBN:", &form.isbn),
            ("Price:", &form.price),
            ("Published:", &form.publish_date),
            ("Description:", &form.description),
            ("Language:", &form.language),
            ("Pages:", &form.page_count),
            ("Publisher:", &form.publisher),
            ("Cover:", &form.cover_image_url),
            ("Edition:", &form.edition),
        ];
        fields
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(label, value)| {
                OutputConfig {
                    description: label.to_string(),
                    ..self.config.output_form.clone()
                }
                .format(value)
            })
            .collect()
    }

    fn print_rows(&self, rows: &[TableRow]) {
        for line in self.format_table(rows) {
            println!("{line}");
        }
    }
}

impl BookView for TerminalView {
    fn render_list(&mut self, books: &[Book]) {
        self.print_rows(&table_rows(books));
    }

    fn render_error(&mut self, message: &str) {
        self.print_rows(&[TableRow::Error(message.to_string())]);
    }

    fn set_loading(&mut self, loading: bool) {
        if loading {
            println!("{}", self.config.output_loading.format("Loading books..."));
        }
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("{}", self.config.output_loading.format("Saving..."));
        }
    }

    fn set_submit_mode(&mut self, mode: SubmitMode) {
        if let Some(line) = self.mode_change(mode) {
            println!("{line}");
        }
    }

    fn show_status(&mut self, status: &StatusMessage) {
        let line = match status.kind {
            StatusKind::Success => self.config.output_success.format(&status.text),
            StatusKind::Error => self.config.output_error.format(&status.text),
        };
        println!("{line}");
    }

    fn hide_status(&mut self) {}

    fn alert(&mut self, message: &str) {
        println!("{}", self.config.output_alert.format(message));
    }

    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        inquire::Confirm::new(message)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }

    fn show_form(&mut self, form: &BookForm) {
        for line in self.form_lines(form) {
            println!("{line}");
        }
    }
}
