//! The desktop page as seen by the search widget.

use busca_core::{HttpStudentSource, Page, ResultsContainer, SearchWidget};
use dioxus::prelude::*;

/// Identifier of the search input rendered by `SearchBar`.
pub const SEARCH_INPUT_ID: &str = "search";

/// Identifier of the list rendered by `ResultList`.
pub const RESULTS_ID: &str = "results";

/// Widget type used by the desktop shell.
pub type DesktopWidget = SearchWidget<HttpStudentSource, SignalContainer>;

/// Results container backed by a signal holding the list's inner HTML.
#[derive(Clone, Copy)]
pub struct SignalContainer(pub Signal<String>);

impl ResultsContainer for SignalContainer {
    fn replace_content(&self, html: String) {
        let mut content = self.0;
        content.set(html);
    }
}

/// Elements rendered by the `Home` view.
///
/// `Home` always renders `#search` and `#results`, so binding only fails here
/// when the widget is asked for other identifiers.
pub struct DesktopPage {
    pub results_html: Signal<String>,
}

impl Page for DesktopPage {
    type Results = SignalContainer;

    fn has_input(&self, id: &str) -> bool {
        is_search_input(id)
    }

    fn results_container(&self, id: &str) -> Option<SignalContainer> {
        is_results_list(id).then_some(SignalContainer(self.results_html))
    }
}

fn is_search_input(id: &str) -> bool {
    id == SEARCH_INPUT_ID
}

fn is_results_list(id: &str) -> bool {
    id == RESULTS_ID
}
