pub mod document;

pub use document::{DocumentAccessor, DocumentError, HeadingPosition, InMemoryDocument, NavAnchor};
