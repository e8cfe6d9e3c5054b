//! Output rendering
//!
//! Results are printed as colored text by default. With `--json` they are
//! rendered as pretty JSON (six-space indent), and `--output-file` redirects
//! that rendering to a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::OutputConfig;

const JSON_INDENT: &[u8] = b"      ";

/// Render `value` as JSON indented by six spaces
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize output")?;
    String::from_utf8(buf).context("Serialized output is not UTF-8")
}

/// Write `contents` to `path`, replacing the file
pub fn write_to_file(contents: &str, path: &Path) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

impl OutputConfig {
    /// Emit a command result
    ///
    /// `human` prints the text rendering and is only called when neither JSON
    /// output nor a file was requested.
    pub fn emit<T, F>(&self, value: &T, human: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(),
    {
        if let Some(path) = &self.file {
            write_to_file(&pretty_json(value)?, path)?;
            eprintln!("{} {}", "✓ Output written to".green(), path.display());
        } else if self.json {
            println!("{}", pretty_json(value)?);
        } else {
            human();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_pretty_json_uses_six_space_indent() {
        let rendered = pretty_json(&serde_json::json!({ "name": "share1" })).unwrap();
        assert_eq!(rendered, "{\n      \"name\": \"share1\"\n}");
    }

    #[test]
    fn test_emit_writes_file_instead_of_printing() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("acls.json");
        let output = OutputConfig {
            json: false,
            file: Some(path.clone()),
        };

        let mut printed = false;
        output
            .emit(&serde_json::json!(["a", "b"]), || printed = true)
            .unwrap();

        assert!(!printed);
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[\n      \"a\",\n      \"b\"\n]");
    }

    #[test]
    fn test_emit_text_by_default() {
        let mut printed = false;
        OutputConfig::default()
            .emit(&serde_json::json!({}), || printed = true)
            .unwrap();
        assert!(printed);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(write_to_file("{}", &path).is_err());
    }
}
