//! Content files and slugs

mod content;
mod slug;

pub use content::{ContentError, ContentSnapshot, read_content, remove_content, write_content};
pub use slug::{content_filename, slugify};
