//! Search bar component

use dioxus::prelude::*;

use crate::page::SEARCH_INPUT_ID;
use crate::state::AppState;

/// Search input; every change is handed to the search widget
#[component]
pub fn SearchBar() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            class: "search-bar",

            input {
                id: SEARCH_INPUT_ID,
                r#type: "text",
                placeholder: "Buscar alunos...",
                oninput: move |evt| {
                    let Some(widget) = state.widget.clone() else {
                        return;
                    };
                    let value = evt.value();
                    spawn(async move {
                        match widget.on_input(&value).await {
                            Ok(outcome) => tracing::debug!("Search input handled: {:?}", outcome),
                            Err(e) => tracing::warn!("Search for {:?} failed: {}", value.trim(), e),
                        }
                    });
                },
            }
        }
    }
}
