use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::session::FileRef;

const MAX_TEXT_SIZE: usize = 1024 * 1024; // 1MB
const MAX_ATTACHMENT_SIZE: u64 = 10 * 1024 * 1024; // 10MB

pub struct InputReader;

impl InputReader {
    /// Reads message text from stdin.
    pub fn read_stdin() -> Result<String> {
        Self::read_text(io::stdin().lock())
    }

    fn read_text<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_TEXT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }

    /// Loads a file to attach to the next turn.
    pub fn read_attachment(path: &Path) -> Result<FileRef> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        if !metadata.is_file() {
            bail!("Not a regular file: {}", path.display());
        }

        if metadata.len() > MAX_ATTACHMENT_SIZE {
            bail!(
                "Attachment size ({:.1} MB) exceeds maximum allowed size (10 MB): {}",
                metadata.len() as f64 / 1024.0 / 1024.0,
                path.display()
            );
        }

        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        let name = path
            .file_name()
            .map_or_else(|| "attachment".to_string(), |n| n.to_string_lossy().into_owned());

        Ok(FileRef::new(name, content))
    }
}
