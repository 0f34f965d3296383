//! Editor integration for composing entry content

use crate::error::{BragError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// Session for composing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a temporary markdown file seeded with `initial`, wait for the
    /// editor to exit and return the trimmed file contents.
    pub fn compose(&self, initial: &str) -> Result<String> {
        let mut file = tempfile::Builder::new()
            .prefix("brag-")
            .suffix(".md")
            .tempfile()?;
        file.write_all(initial.as_bytes())?;
        file.flush()?;

        self.run(file.path())?;

        let contents = fs::read_to_string(file.path())?;
        Ok(contents.trim().to_string())
    }

    /// Run the editor on a file and block until it exits
    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            BragError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(BragError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return ("vim".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_simple() {
        let session = EditorSession::new("vim".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_command_with_args() {
        let session = EditorSession::new("  code  -w ".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "code");
        assert_eq!(args, vec!["-w"]);
    }

    #[test]
    fn test_parse_command_empty() {
        let session = EditorSession::new("".to_string());
        let (program, args) = session.parse_command();

        assert_eq!(program, "vim");
        assert!(args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_returns_trimmed_file_contents() {
        // `true` leaves the seeded file untouched
        let session = EditorSession::new("true".to_string());
        let content = session.compose("  seeded text\n\n").unwrap();
        assert_eq!(content, "seeded text");
    }

    #[cfg(unix)]
    #[test]
    fn test_compose_failing_editor() {
        let session = EditorSession::new("false".to_string());
        match session.compose("x") {
            Err(BragError::Editor(msg)) => assert!(msg.contains("false")),
            other => panic!("Expected Editor error, got {:?}", other),
        }
    }

    #[test]
    fn test_compose_missing_editor() {
        let session = EditorSession::new("definitely-not-an-editor-binary".to_string());
        assert!(matches!(session.compose("x"), Err(BragError::Editor(_))));
    }
}
