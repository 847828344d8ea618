//! busca-core - Core library for busca
//!
//! This crate contains the student model, query handling, result rendering,
//! HTTP client, and the page-agnostic search widget used by the desktop shell.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod search;
pub mod sequence;
pub mod util;
pub mod widget;

pub use client::{HttpStudentSource, StudentSource};
pub use error::{Error, Result};
pub use models::{SearchResult, Student};
pub use widget::{ElementIds, InputOutcome, Page, ResultsContainer, SearchWidget};
