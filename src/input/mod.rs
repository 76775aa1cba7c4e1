//! Input reading: message text from stdin and files to attach.

mod reader;

pub use reader::InputReader;
