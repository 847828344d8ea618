//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{ResultList, SearchBar};

/// Home view component - search box above the result list
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",

            SearchBar {}
            ResultList {}
        }
    }
}
