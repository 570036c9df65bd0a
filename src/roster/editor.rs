use crate::error::{Result, RosterError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// The edit form as it appears in the editor buffer.
/// Format: one `key: value` line per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuffer {
    pub name: String,
    pub age: String,
}

impl FormBuffer {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }

    /// Formats the fields for the editor buffer.
    pub fn to_buffer(&self) -> String {
        format!("name: {}\nage: {}\n", self.name, self.age)
    }

    /// Parses an editor buffer back into fields. Unknown lines are ignored;
    /// missing fields come back empty.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut name = String::new();
        let mut age = String::new();
        for line in buffer.lines() {
            if let Some(value) = line.strip_prefix("name:") {
                name = value.trim().to_string();
            } else if let Some(value) = line.strip_prefix("age:") {
                age = value.trim().to_string();
            }
        }
        Self { name, age }
    }

    /// An emptied buffer means the user walked away from the edit.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.age.is_empty()
    }
}

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(RosterError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| RosterError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(RosterError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(RosterError::Io)
}

/// Opens an editor seeded with the form fields and returns the edited form.
pub fn edit_form(initial: &FormBuffer) -> Result<FormBuffer> {
    let temp_file = env::temp_dir().join("roster_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(RosterError::Io)?;

    let result = open_in_editor(&temp_file)?;

    let _ = fs::remove_file(&temp_file);

    Ok(FormBuffer::from_buffer(&result))
}
