use bytes::Bytes;
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file handed over by the file picker: a display name and its bytes.
///
/// Content is reference-counted, so cloning a `FileRef` into both the
/// message log and the outbound request does not copy the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    name: String,
    content: Bytes,
}

impl FileRef {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// One entry of the conversation log. Fields are private: a message cannot
/// change after it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    attachments: Vec<FileRef>,
}

impl Message {
    pub fn user(content: impl Into<String>, attachments: Vec<FileRef>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            attachments,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            attachments: Vec::new(),
        }
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn attachments(&self) -> &[FileRef] {
        &self.attachments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_keeps_attachment_order() {
        let message = Message::user(
            "see files",
            vec![FileRef::new("a.txt", "a"), FileRef::new("b.txt", "bb")],
        );

        assert_eq!(message.role(), Role::User);
        assert_eq!(message.content(), "see files");
        let names: Vec<&str> = message.attachments().iter().map(FileRef::name).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_assistant_message_has_no_attachments() {
        let message = Message::assistant("hi");
        assert_eq!(message.role(), Role::Assistant);
        assert!(message.attachments().is_empty());
    }

    #[test]
    fn test_file_ref_len() {
        let file = FileRef::new("data.bin", vec![0u8, 1, 2]);
        assert_eq!(file.len(), 3);
        assert!(!file.is_empty());
        assert!(FileRef::new("empty", Vec::new()).is_empty());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
