//! Result list component

use dioxus::prelude::*;

use crate::page::RESULTS_ID;
use crate::state::AppState;

/// List whose items are rendered by the search widget
#[component]
pub fn ResultList() -> Element {
    let state = use_context::<AppState>();
    let html = (state.results_html)();

    rsx! {
        ul {
            id: RESULTS_ID,
            class: "result-list",
            dangerous_inner_html: "{html}",
        }
    }
}
