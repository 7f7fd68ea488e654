//! Domain Entities

mod document;

pub use document::Document;
