use std::path::PathBuf;

use bookform::types::book::BookId;
use reedline::{
    ColumnarMenu, DefaultCompleter, Emacs, ExampleHighlighter, FileBackedHistory, KeyCode,
    KeyModifiers, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};

use crate::prompt::BookformPrompt;

const HISTORY_SIZE: usize = 1000;

pub struct Repl {
    reedline: Reedline,
    prompt:   BookformPrompt,
}

impl Repl {
    pub fn new(commands: Vec<String>, history_file: PathBuf) -> anyhow::Result<Self> {
        if let Some(dir) = history_file.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let history = Box::new(FileBackedHistory::with_file(HISTORY_SIZE, history_file)?);

        let completer = Box::new(DefaultCompleter::new_with_wordlen(commands.clone(), 1));

        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        let mut keybindings = reedline::default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let edit_mode = Box::new(Emacs::new(keybindings));

        let line_editor = Reedline::create()
            .with_history(history)
            .with_highlighter(Box::new(ExampleHighlighter::new(commands)))
            .with_completer(completer)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(edit_mode);

        Ok(Repl {
            reedline: line_editor,
            prompt:   BookformPrompt::default(),
        })
    }

    pub fn read_line(&mut self, editing: Option<BookId>) -> anyhow::Result<Signal> {
        self.prompt.editing = editing;
        Ok(self.reedline.read_line(&self.prompt)?)
    }
}
