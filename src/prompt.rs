//! Blocking line prompts used during session setup.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{LabelError, Result};

pub const FOLDER_QUESTION: &str = "Enter the folder path: ";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and wait for one line of input, returned trimmed.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.output
            .write_all(question.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|e| LabelError::io("<stdout>", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| LabelError::io("<stdin>", e))?;
        if read == 0 {
            return Err(LabelError::PromptClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask for the dataset folder. `None` means the answer was left blank.
    pub fn ask_folder(&mut self) -> Result<Option<PathBuf>> {
        let answer = self.ask(FOLDER_QUESTION)?;
        Ok((!answer.is_empty()).then(|| expand_path(&answer)))
    }
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}
