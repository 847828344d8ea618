//! File-backed list of students served by the search endpoint.

use std::fs;
use std::io;
use std::path::Path;

use busca_core::search::normalize_query;
use busca_core::{SearchResult, Student};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to access students file {path}: {source}")]
    Io { path: String, source: io::Error },
}

/// In-memory copy of the students file, in file order
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
}

impl StudentDirectory {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Load students from a JSON array file.
    ///
    /// A missing file is created containing `[]`. An empty or malformed file
    /// is logged and treated as having no students.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let io_error = |source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        };

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
            fs::write(path, "[]").map_err(io_error)?;
            tracing::info!("Created empty students file at {}", path.display());
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(io_error)?;
        match serde_json::from_str::<Vec<Student>>(&raw) {
            Ok(students) => Ok(Self::new(students)),
            Err(error) => {
                tracing::warn!(
                    "Ignoring unreadable students file {}: {}",
                    path.display(),
                    error
                );
                Ok(Self::default())
            }
        }
    }

    pub fn count(&self) -> usize {
        self.students.len()
    }

    /// Students whose name contains the trimmed query, ignoring case.
    ///
    /// A blank query matches nothing.
    pub fn search(&self, raw_query: &str) -> SearchResult {
        let Some(query) = normalize_query(raw_query) else {
            return Vec::new();
        };
        self.students
            .iter()
            .filter(|student| student.name_matches(query))
            .cloned()
            .collect()
    }
}
