//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::page::DesktopWidget;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Inner HTML of the results list, written only by the widget
    pub results_html: Signal<String>,
    /// Bound search widget; `None` when binding failed
    pub widget: Option<Rc<DesktopWidget>>,
}
