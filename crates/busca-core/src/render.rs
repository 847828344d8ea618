//! HTML rendering of search results
//!
//! Each student becomes `<li>{name} ({age} anos)</li>`. Names go through maud's
//! escaper, so markup inside a name is shown as text instead of being injected.

use maud::{html, Markup};

use crate::models::Student;

/// Render a single list item for a student.
pub fn render_student(student: &Student) -> Markup {
    html! {
        li { (student.name) " (" (student.age) " anos)" }
    }
}

/// Render all students as concatenated list items, in the given order.
///
/// An empty slice renders as an empty string.
pub fn render_results(students: &[Student]) -> String {
    html! {
        @for student in students {
            (render_student(student))
        }
    }
    .into_string()
}
