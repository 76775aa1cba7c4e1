use std::mem;

use super::message::FileRef;

/// The not-yet-sent input: text buffer plus staged attachments.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    text: String,
    files: Vec<FileRef>,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn files(&self) -> &[FileRef] {
        &self.files
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends text to the buffer, separated from existing text by a space.
    ///
    /// Speech-to-text results arrive through here and are treated exactly
    /// like typed input.
    pub fn append_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    pub fn stage_file(&mut self, file: FileRef) {
        self.files.push(file);
    }

    pub fn clear_files(&mut self) {
        self.files.clear();
    }

    /// Non-blank text or at least one staged file.
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty() || !self.files.is_empty()
    }

    /// Empties the draft, returning what it held.
    pub fn take(&mut self) -> (String, Vec<FileRef>) {
        (mem::take(&mut self.text), mem::take(&mut self.files))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_text_joins_with_space() {
        let mut draft = Draft::default();
        draft.append_text("hello");
        draft.append_text("  world ");
        assert_eq!(draft.text(), "hello world");
    }

    #[test]
    fn test_append_text_ignores_blank() {
        let mut draft = Draft::default();
        draft.set_text("keep");
        draft.append_text("   ");
        assert_eq!(draft.text(), "keep");
    }

    #[test]
    fn test_is_submittable() {
        let mut draft = Draft::default();
        assert!(!draft.is_submittable());

        draft.set_text("   ");
        assert!(!draft.is_submittable());

        draft.stage_file(FileRef::new("a.txt", "a"));
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_take_empties_draft() {
        let mut draft = Draft::default();
        draft.set_text("question");
        draft.stage_file(FileRef::new("a.txt", "a"));

        let (text, files) = draft.take();

        assert_eq!(text, "question");
        assert_eq!(files.len(), 1);
        assert!(draft.text().is_empty());
        assert!(draft.files().is_empty());
    }
}
