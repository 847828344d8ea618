//! Data models for busca

mod student;

pub use student::{SearchResult, Student};
