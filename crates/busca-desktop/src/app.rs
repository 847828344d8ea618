//! Main application component

use std::rc::Rc;

use busca_core::{ElementIds, HttpStudentSource, SearchWidget};
use dioxus::prelude::*;

use crate::bootstrap_config::{load_bootstrap_config, resolve_client_config};
use crate::page::{DesktopPage, DesktopWidget, RESULTS_ID, SEARCH_INPUT_ID};
use crate::state::AppState;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let results_html = use_signal(String::new);
    let widget = use_hook(|| bind_widget(results_html));

    use_context_provider(|| AppState {
        results_html,
        widget,
    });

    rsx! {
        Home {}
    }
}

fn bind_widget(results_html: Signal<String>) -> Option<Rc<DesktopWidget>> {
    let config = resolve_client_config(&load_bootstrap_config());
    let source = match HttpStudentSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Failed to build search client: {}", e);
            return None;
        }
    };
    tracing::info!("Searching students at {}", source.base_url());

    let ids = ElementIds {
        search: SEARCH_INPUT_ID.to_string(),
        results: RESULTS_ID.to_string(),
    };
    SearchWidget::attach(&DesktopPage { results_html }, &ids, source).map(Rc::new)
}
