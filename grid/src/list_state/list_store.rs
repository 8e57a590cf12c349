// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::{ApplyOutcome, FetchTicket, ListState, PendingFetch};
use crate::{CommonResult, DEBUG_GRID_MOD, ListFetcher, ListPage};

/// A fetch that finished on a spawned task, on its way back to the event loop.
#[derive(Debug)]
pub struct FetchCompleted {
    pub ticket: FetchTicket,
    pub result: CommonResult<ListPage>,
}

/// Pairs a [`ListState`] w/ the [`ListFetcher`] it loads pages from. The fetcher is
/// fixed at construction time.
#[derive(Debug)]
pub struct ListStore<F: ListFetcher> {
    state: ListState,
    fetcher: Arc<F>,
}

impl<F: ListFetcher> ListStore<F> {
    pub fn new(state: ListState, fetcher: F) -> Self {
        Self {
            state,
            fetcher: Arc::new(fetcher),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ListState { &self.state }

    pub fn state_mut(&mut self) -> &mut ListState { &mut self.state }

    #[must_use]
    pub fn fetcher(&self) -> &F { &self.fetcher }

    /// Fetches the current page and applies it, in place. If the response shrinks the
    /// total so that the current page was clamped, the clamped page is fetched once
    /// more.
    pub async fn fetch(&mut self) -> ApplyOutcome {
        let outcome = self.fetch_once().await;
        if outcome == ApplyOutcome::AppliedPageClamped {
            return self.fetch_once().await;
        }
        outcome
    }

    async fn fetch_once(&mut self) -> ApplyOutcome {
        let PendingFetch { ticket, query } = self.state.begin_fetch();
        let result = self.fetcher.fetch_page(query).await;
        self.state.apply_fetch_result(ticket, result)
    }

    /// Issues a fetch for the current parameters and runs it on its own tokio task.
    /// The result comes back over `sender` as a [`FetchCompleted`], to be handed to
    /// [`Self::apply`]. Many of these can be in flight at once, only the last one
    /// issued will be applied.
    pub fn spawn_fetch<S>(&mut self, sender: mpsc::Sender<S>) -> FetchTicket
    where
        S: From<FetchCompleted> + Send + 'static,
    {
        let PendingFetch { ticket, query } = self.state.begin_fetch();
        let fetcher = Arc::clone(&self.fetcher);

        tokio::spawn(async move {
            let result = fetcher.fetch_page(query).await;
            if sender.send(FetchCompleted { ticket, result }.into()).await.is_err() {
                DEBUG_GRID_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "📦 Event loop is gone, dropping fetch result",
                        ticket = %ticket,
                    );
                });
            }
        });

        ticket
    }

    pub fn apply(&mut self, completed: FetchCompleted) -> ApplyOutcome {
        self.state
            .apply_fetch_result(completed.ticket, completed.result)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{ListFilter, Record,
                list_fetcher_test_fixtures::{ScriptedResponse, TestListFetcher},
                ui_str};

    fn records(count: usize) -> Vec<Record> {
        (1..=count)
            .map(|n| Record::from([("id", json!(n))]))
            .collect()
    }

    fn store(fetcher: TestListFetcher) -> ListStore<TestListFetcher> {
        ListStore::new(ListState::new(10, ListFilter::default()).unwrap(), fetcher)
    }

    #[tokio::test]
    async fn test_fetch_loads_current_page() {
        let mut store = store(TestListFetcher::with_records(records(95)));
        assert_eq!(store.fetch().await, ApplyOutcome::Applied);
        assert_eq!(store.state().records().len(), 10);
        assert_eq!(store.state().total_pages(), 10);

        store.state_mut().set_page(10);
        store.fetch().await;
        assert_eq!(store.state().records().len(), 5);
        assert_eq!(store.state().records()[0].get("id"), Some(&json!(91)));
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let mut store = store(TestListFetcher::default().then_failure("503"));
        store.fetch().await;
        assert!(!store.state().is_loading());
        assert_eq!(store.state().error(), Some(ui_str::FETCH_FAILED_MESSAGE));
        assert!(store.state().records().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_refetches_clamped_page() {
        let fetcher = TestListFetcher::with_records(records(25))
            .then_page(ListPage::new(records(10), 95));
        let mut store = store(fetcher);
        store.fetch().await;
        assert_eq!(store.state_mut().set_page(8), 8);

        // The script is used up, so this fetch (and the refetch) are served from the 25
        // records, and page 8 no longer exists.
        assert_eq!(store.fetch().await, ApplyOutcome::Applied);
        assert_eq!(store.state().current_page(), 3);
        assert_eq!(store.state().records().len(), 5);
        let pages: Vec<usize> = store
            .fetcher()
            .received_queries()
            .iter()
            .map(|it| it.page)
            .collect();
        assert_eq!(pages, vec![1, 8, 3]);
    }

    #[tokio::test]
    async fn test_spawned_fetches_latest_wins() {
        let fetcher = TestListFetcher::default()
            .then_after(
                Duration::from_millis(100),
                ScriptedResponse::Page(ListPage::new(records(10), 95)),
            )
            .then_page(ListPage::new(records(3), 3));
        let mut store = store(fetcher);
        let (sender, mut receiver) = mpsc::channel::<FetchCompleted>(4);

        let slow = store.spawn_fetch(sender.clone());
        let fast = store.spawn_fetch(sender);

        let first = receiver.recv().await.unwrap();
        assert_eq!(first.ticket, fast);
        assert_eq!(store.apply(first), ApplyOutcome::Applied);

        let second = receiver.recv().await.unwrap();
        assert_eq!(second.ticket, slow);
        assert_eq!(store.apply(second), ApplyOutcome::DiscardedStale);

        assert_eq!(store.state().records().len(), 3);
        assert_eq!(store.state().total_items(), 3);
        assert!(!store.state().is_loading());
    }
}
