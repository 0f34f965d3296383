//! Add brag use case

use crate::domain::Entry;
use crate::error::{BragError, Result};
use crate::infrastructure::{BragRepository, EditorSession};
use std::io::{self, BufRead, IsTerminal, Read};
use tracing::info;

/// What the user asked to record
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub content: String,
    pub tags: Vec<String>,
    pub project: Option<String>,
}

/// Service for recording new brags
pub struct AddBragService<R: BragRepository> {
    repository: R,
}

impl<R: BragRepository> AddBragService<R> {
    /// Create a new add service
    pub fn new(repository: R) -> Self {
        AddBragService { repository }
    }

    /// Stamp the request with the current time and store it
    pub fn execute(&self, request: AddRequest) -> Result<Entry> {
        if request.content.trim().is_empty() {
            return Err(BragError::EmptyContent);
        }

        let entry = Entry::new(request.content)
            .with_tags(request.tags)
            .with_project(request.project);

        self.repository.add_entry(&entry)?;
        info!(timestamp = %entry.timestamp, "brag added");

        Ok(entry)
    }
}

/// Acquire entry content from the command line, the editor or stdin.
///
/// Returns `None` when the user cancels the interactive prompt.
pub fn collect_content(words: &[String], edit: bool, editor: &EditorSession) -> Result<Option<String>> {
    let content = words.join(" ");

    if edit {
        return editor.compose(&content).map(Some);
    }
    if !content.is_empty() {
        return Ok(Some(content));
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("🏆 What did you accomplish? (Press Enter twice to save, Ctrl+C to cancel)");
        read_prompted(stdin.lock())
    } else {
        read_piped(stdin.lock()).map(Some)
    }
}

/// Read lines until two consecutive empty lines. End of input cancels.
pub fn read_prompted<B: BufRead>(reader: B) -> Result<Option<String>> {
    let mut lines: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() && lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
            return Ok(Some(lines.join("\n").trim().to_string()));
        }
        lines.push(line);
    }

    Ok(None)
}

/// Read all of non-interactive input.
pub fn read_piped<Rd: Read>(mut reader: Rd) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content.trim().to_string())
}
