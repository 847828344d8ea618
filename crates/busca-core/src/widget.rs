//! Search-as-you-type widget
//!
//! `SearchWidget` ties a text input to a results container. The page it lives
//! in is abstracted by [`Page`] and [`ResultsContainer`], so the same logic
//! drives the desktop shell and the tests.
//!
//! Every input event runs independently and nothing is cancelled. Results are
//! ordered through a [`SequenceGuard`]: a response only renders when it is the
//! newest one applied so far, so the container always reflects the latest
//! keystroke that finished, never an older one that happened to resolve late.

use crate::client::StudentSource;
use crate::error::Result;
use crate::render::render_results;
use crate::search::{normalize_query, search_path};
use crate::sequence::SequenceGuard;

/// Default identifier of the search input element.
pub const DEFAULT_SEARCH_ID: &str = "search";

/// Default identifier of the results container element.
pub const DEFAULT_RESULTS_ID: &str = "results";

/// An element whose content the widget replaces.
pub trait ResultsContainer {
    /// Replace the element's content with an HTML fragment.
    fn replace_content(&self, html: String);
}

/// The page the widget binds to.
pub trait Page {
    type Results: ResultsContainer;

    /// Whether a text input with this identifier exists.
    fn has_input(&self, id: &str) -> bool;

    /// Look up a results container by identifier.
    fn results_container(&self, id: &str) -> Option<Self::Results>;
}

/// Identifiers of the elements the widget binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub search: String,
    pub results: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH_ID.to_string(),
            results: DEFAULT_RESULTS_ID.to_string(),
        }
    }
}

/// What an input event did to the results container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Blank query; the container was emptied and no request was made
    Cleared,
    /// Response rendered with this many list items
    Rendered { count: usize },
    /// A newer event already updated the container; this result was dropped
    Superseded,
}

/// Binds a search input to a results container.
pub struct SearchWidget<S, R> {
    source: S,
    results: R,
    sequence: SequenceGuard,
}

impl<S, R> SearchWidget<S, R>
where
    S: StudentSource,
    R: ResultsContainer,
{
    /// Bind to the elements named by `ids` on `page`.
    ///
    /// Returns `None` and stays inert when the search input is missing. A
    /// missing results container also leaves the widget unbound.
    pub fn attach<P>(page: &P, ids: &ElementIds, source: S) -> Option<Self>
    where
        P: Page<Results = R>,
    {
        if !page.has_input(&ids.search) {
            tracing::debug!("No #{} input on page; search widget not bound", ids.search);
            return None;
        }
        let Some(results) = page.results_container(&ids.results) else {
            tracing::warn!(
                "Found #{} but no #{} container; search widget not bound",
                ids.search,
                ids.results
            );
            return None;
        };

        tracing::debug!("Search widget bound to #{} -> #{}", ids.search, ids.results);
        Some(Self {
            source,
            results,
            sequence: SequenceGuard::new(),
        })
    }

    /// Handle one input-change event carrying the input's current value.
    ///
    /// Errors from the request or from decoding leave the container as it was.
    pub async fn on_input(&self, value: &str) -> Result<InputOutcome> {
        let ticket = self.sequence.next_ticket();

        let Some(query) = normalize_query(value) else {
            if !self.sequence.try_apply(ticket) {
                return Ok(InputOutcome::Superseded);
            }
            self.results.replace_content(String::new());
            return Ok(InputOutcome::Cleared);
        };

        let path = search_path(query);
        let students = match self.source.fetch_students(&path).await {
            Ok(students) => students,
            Err(error) => {
                // Retire older tickets so their late results stay hidden.
                self.sequence.try_apply(ticket);
                return Err(error);
            }
        };

        if !self.sequence.try_apply(ticket) {
            tracing::debug!(
                "Dropping stale results for ticket {} (latest applied {})",
                ticket,
                self.sequence.last_applied()
            );
            return Ok(InputOutcome::Superseded);
        }

        let count = students.len();
        self.results.replace_content(render_results(&students));
        Ok(InputOutcome::Rendered { count })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use tokio::sync::oneshot;
    use tokio::task::{spawn_local, yield_now, LocalSet};

    use super::*;
    use crate::error::Error;
    use crate::models::{SearchResult, Student};

    enum Canned {
        Students(SearchResult),
        Pending(oneshot::Receiver<SearchResult>),
        Fail,
    }

    /// Clones share recorded requests and canned replies.
    #[derive(Clone, Default)]
    struct FakeSource {
        requests: Rc<RefCell<Vec<String>>>,
        canned: Rc<RefCell<HashMap<String, Canned>>>,
    }

    impl FakeSource {
        fn respond(&self, path: &str, students: SearchResult) {
            self.canned
                .borrow_mut()
                .insert(path.to_string(), Canned::Students(students));
        }

        fn respond_later(&self, path: &str) -> oneshot::Sender<SearchResult> {
            let (tx, rx) = oneshot::channel();
            self.canned
                .borrow_mut()
                .insert(path.to_string(), Canned::Pending(rx));
            tx
        }

        fn fail(&self, path: &str) {
            self.canned.borrow_mut().insert(path.to_string(), Canned::Fail);
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl StudentSource for FakeSource {
        async fn fetch_students(&self, request_path: &str) -> Result<SearchResult> {
            self.requests.borrow_mut().push(request_path.to_string());
            let canned = self.canned.borrow_mut().remove(request_path);
            match canned {
                Some(Canned::Students(students)) => Ok(students),
                Some(Canned::Pending(rx)) => Ok(rx.await.unwrap_or_default()),
                Some(Canned::Fail) => Err(Error::Status {
                    status: 500,
                    body: "boom".to_string(),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingContainer(Rc<RefCell<Vec<String>>>);

    impl RecordingContainer {
        fn writes(&self) -> Vec<String> {
            self.0.borrow().clone()
        }

        fn content(&self) -> String {
            self.0.borrow().last().cloned().unwrap_or_default()
        }
    }

    impl ResultsContainer for RecordingContainer {
        fn replace_content(&self, html: String) {
            self.0.borrow_mut().push(html);
        }
    }

    struct FakePage {
        ids: Vec<&'static str>,
        container: RecordingContainer,
    }

    impl FakePage {
        fn with(ids: &[&'static str]) -> Self {
            Self {
                ids: ids.to_vec(),
                container: RecordingContainer::default(),
            }
        }
    }

    impl Page for FakePage {
        type Results = RecordingContainer;

        fn has_input(&self, id: &str) -> bool {
            self.ids.iter().any(|known| *known == id)
        }

        fn results_container(&self, id: &str) -> Option<RecordingContainer> {
            self.has_input(id).then(|| self.container.clone())
        }
    }

    type TestWidget = SearchWidget<FakeSource, RecordingContainer>;

    fn bound_widget() -> (TestWidget, FakeSource, RecordingContainer) {
        let page = FakePage::with(&["search", "results"]);
        let source = FakeSource::default();
        let widget = SearchWidget::attach(&page, &ElementIds::default(), source.clone())
            .expect("widget should bind");
        (widget, source, page.container)
    }

    #[test]
    fn attach_without_search_input_is_inert() {
        let page = FakePage::with(&["results"]);
        let widget = SearchWidget::attach(&page, &ElementIds::default(), FakeSource::default());
        assert!(widget.is_none());
        assert!(page.container.writes().is_empty());
    }

    #[test]
    fn attach_without_results_container_is_inert() {
        let page = FakePage::with(&["search"]);
        let widget = SearchWidget::attach(&page, &ElementIds::default(), FakeSource::default());
        assert!(widget.is_none());
    }

    #[test]
    fn attach_uses_custom_ids() {
        let page = FakePage::with(&["busca", "lista"]);
        let ids = ElementIds {
            search: "busca".to_string(),
            results: "lista".to_string(),
        };
        assert!(SearchWidget::attach(&page, &ids, FakeSource::default()).is_some());
        assert!(SearchWidget::attach(&page, &ElementIds::default(), FakeSource::default()).is_none());
    }

    #[tokio::test]
    async fn non_empty_input_issues_one_trimmed_request() {
        let (widget, source, _container) = bound_widget();

        widget.on_input("  ana  ").await.unwrap();

        assert_eq!(source.requests(), vec!["/buscar_alunos?q=ana".to_string()]);
    }

    #[tokio::test]
    async fn whitespace_input_clears_without_request() {
        let (widget, source, container) = bound_widget();
        source.respond("/buscar_alunos?q=a", vec![Student::new("Ana", 10)]);
        widget.on_input("a").await.unwrap();

        let outcome = widget.on_input("  ").await.unwrap();

        assert_eq!(outcome, InputOutcome::Cleared);
        assert_eq!(source.requests().len(), 1);
        assert_eq!(container.content(), "");
    }

    #[tokio::test]
    async fn empty_input_clears_without_request() {
        let (widget, source, container) = bound_widget();

        let outcome = widget.on_input("").await.unwrap();

        assert_eq!(outcome, InputOutcome::Cleared);
        assert!(source.requests().is_empty());
        assert_eq!(container.writes(), vec![String::new()]);
    }

    #[tokio::test]
    async fn response_renders_in_server_order() {
        let (widget, source, container) = bound_widget();
        source.respond(
            "/buscar_alunos?q=a",
            vec![Student::new("Ana", 10), Student::new("Bo", 8)],
        );

        let outcome = widget.on_input("a").await.unwrap();

        assert_eq!(outcome, InputOutcome::Rendered { count: 2 });
        assert_eq!(
            container.content(),
            "<li>Ana (10 anos)</li><li>Bo (8 anos)</li>"
        );
    }

    #[tokio::test]
    async fn empty_response_renders_empty_content() {
        let (widget, source, container) = bound_widget();
        source.respond("/buscar_alunos?q=zz", Vec::new());

        let outcome = widget.on_input("zz").await.unwrap();

        assert_eq!(outcome, InputOutcome::Rendered { count: 0 });
        assert_eq!(container.writes(), vec![String::new()]);
    }

    #[tokio::test]
    async fn reserved_characters_are_percent_encoded() {
        let (widget, source, _container) = bound_widget();

        widget.on_input("a&b").await.unwrap();

        assert_eq!(source.requests(), vec!["/buscar_alunos?q=a%26b".to_string()]);
    }

    #[tokio::test]
    async fn names_are_escaped_when_rendered() {
        let (widget, source, container) = bound_widget();
        source.respond("/buscar_alunos?q=x", vec![Student::new("<b>x</b>", 11)]);

        widget.on_input("x").await.unwrap();

        assert_eq!(container.content(), "<li>&lt;b&gt;x&lt;/b&gt; (11 anos)</li>");
    }

    #[tokio::test]
    async fn failed_request_leaves_container_untouched() {
        let (widget, source, container) = bound_widget();
        source.respond("/buscar_alunos?q=a", vec![Student::new("Ana", 10)]);
        widget.on_input("a").await.unwrap();
        source.fail("/buscar_alunos?q=ab");

        let result = widget.on_input("ab").await;

        assert!(matches!(result, Err(Error::Status { status: 500, .. })));
        assert_eq!(container.writes(), vec!["<li>Ana (10 anos)</li>".to_string()]);
    }

    async fn wait_for_requests(source: &FakeSource, count: usize) {
        while source.requests().len() < count {
            yield_now().await;
        }
    }

    #[tokio::test]
    async fn slow_older_response_does_not_overwrite_newer_one() {
        let (widget, source, container) = bound_widget();
        let widget = Rc::new(widget);
        let reply_a = source.respond_later("/buscar_alunos?q=a");
        let reply_ab = source.respond_later("/buscar_alunos?q=ab");

        LocalSet::new()
            .run_until(async move {
                let first = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("a").await }
                });
                wait_for_requests(&source, 1).await;
                let second = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("ab").await }
                });
                wait_for_requests(&source, 2).await;

                reply_ab.send(vec![Student::new("Abel", 12)]).unwrap();
                let second = second.await.unwrap().unwrap();
                reply_a
                    .send(vec![Student::new("Ana", 10), Student::new("Abel", 12)])
                    .unwrap();
                let first = first.await.unwrap().unwrap();

                assert_eq!(second, InputOutcome::Rendered { count: 1 });
                assert_eq!(first, InputOutcome::Superseded);
            })
            .await;

        assert_eq!(container.writes(), vec!["<li>Abel (12 anos)</li>".to_string()]);
    }

    #[tokio::test]
    async fn failed_newer_request_still_retires_older_one() {
        let (widget, source, container) = bound_widget();
        let widget = Rc::new(widget);
        let reply_a = source.respond_later("/buscar_alunos?q=a");
        source.fail("/buscar_alunos?q=ab");

        LocalSet::new()
            .run_until(async move {
                let first = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("a").await }
                });
                wait_for_requests(&source, 1).await;

                let second = widget.on_input("ab").await;
                assert!(matches!(second, Err(Error::Status { status: 500, .. })));

                reply_a.send(vec![Student::new("Ana", 10)]).unwrap();
                assert_eq!(first.await.unwrap().unwrap(), InputOutcome::Superseded);
            })
            .await;

        assert!(container.writes().is_empty());
    }

    #[tokio::test]
    async fn in_order_responses_both_render() {
        let (widget, source, container) = bound_widget();
        let widget = Rc::new(widget);
        let reply_a = source.respond_later("/buscar_alunos?q=a");
        let reply_ab = source.respond_later("/buscar_alunos?q=ab");

        LocalSet::new()
            .run_until(async move {
                let first = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("a").await }
                });
                wait_for_requests(&source, 1).await;
                let second = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("ab").await }
                });
                wait_for_requests(&source, 2).await;

                reply_a.send(vec![Student::new("Ana", 10)]).unwrap();
                assert_eq!(
                    first.await.unwrap().unwrap(),
                    InputOutcome::Rendered { count: 1 }
                );
                reply_ab.send(vec![Student::new("Abel", 12)]).unwrap();
                assert_eq!(
                    second.await.unwrap().unwrap(),
                    InputOutcome::Rendered { count: 1 }
                );
            })
            .await;

        assert_eq!(
            container.writes(),
            vec![
                "<li>Ana (10 anos)</li>".to_string(),
                "<li>Abel (12 anos)</li>".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn clearing_discards_response_still_in_flight() {
        let (widget, source, container) = bound_widget();
        let widget = Rc::new(widget);
        let reply_a = source.respond_later("/buscar_alunos?q=a");

        LocalSet::new()
            .run_until(async move {
                let pending = spawn_local({
                    let widget = widget.clone();
                    async move { widget.on_input("a").await }
                });
                wait_for_requests(&source, 1).await;

                assert_eq!(widget.on_input(" ").await.unwrap(), InputOutcome::Cleared);
                reply_a.send(vec![Student::new("Ana", 10)]).unwrap();
                assert_eq!(pending.await.unwrap().unwrap(), InputOutcome::Superseded);
            })
            .await;

        assert_eq!(container.writes(), vec![String::new()]);
    }
}
