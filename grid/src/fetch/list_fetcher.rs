// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::future::Future;

use super::ListQuery;
use crate::{CommonResult, ListPage};

/// The capability to load one page of records from the backend. The list store is
/// built w/ a concrete fetcher, so there is no lookup of fetch methods by name at
/// runtime.
///
/// Implementations must be cheap to share across tasks: the store keeps the fetcher in
/// an [`std::sync::Arc`] and calls it from spawned tokio tasks.
pub trait ListFetcher: Send + Sync + 'static {
    fn fetch_page(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = CommonResult<ListPage>> + Send;
}

pub mod list_fetcher_test_fixtures {
    use std::{collections::VecDeque,
              future::Future,
              sync::{Mutex, MutexGuard, PoisonError},
              time::Duration};

    use super::ListFetcher;
    use crate::{CommonResult, ListPage, ListQuery, Record, SortState,
                sorted_row_indices};

    #[derive(Clone, Debug)]
    pub enum ScriptedResponse {
        Page(ListPage),
        Failure(String),
    }

    #[derive(Clone, Debug)]
    struct ScriptedCall {
        delay: Duration,
        response: ScriptedResponse,
    }

    /// Replays scripted responses in call order. Once the script runs out, pages are
    /// served from `records` the way a well behaved backend would: sorted by the
    /// query's sort descriptor, then sliced by page & limit.
    #[derive(Debug, Default)]
    pub struct TestListFetcher {
        script: Mutex<VecDeque<ScriptedCall>>,
        received: Mutex<Vec<ListQuery>>,
        records: Vec<Record>,
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl TestListFetcher {
        #[must_use]
        pub fn with_records(records: Vec<Record>) -> Self {
            Self {
                records,
                ..Default::default()
            }
        }

        #[must_use]
        pub fn then_page(self, page: ListPage) -> Self {
            self.then_after(Duration::ZERO, ScriptedResponse::Page(page))
        }

        #[must_use]
        pub fn then_failure(self, reason: &str) -> Self {
            self.then_after(Duration::ZERO, ScriptedResponse::Failure(reason.into()))
        }

        /// Queue a response that is only delivered after `delay`.
        #[must_use]
        pub fn then_after(self, delay: Duration, response: ScriptedResponse) -> Self {
            lock(&self.script).push_back(ScriptedCall { delay, response });
            self
        }

        /// Every query this fetcher was called with, in call order.
        #[must_use]
        pub fn received_queries(&self) -> Vec<ListQuery> { lock(&self.received).clone() }

        fn serve_from_records(&self, query: &ListQuery) -> ListPage {
            let sort_state = SortState(query.sort.clone());
            let start = query.page.saturating_sub(1) * query.limit;
            let records = sorted_row_indices(&self.records, &sort_state)
                .into_iter()
                .skip(start)
                .take(query.limit)
                .map(|index| self.records[index].clone())
                .collect();
            ListPage::new(records, self.records.len())
        }
    }

    impl ListFetcher for TestListFetcher {
        fn fetch_page(
            &self,
            query: ListQuery,
        ) -> impl Future<Output = CommonResult<ListPage>> + Send {
            let next_call = lock(&self.script).pop_front();
            let fallback = self.serve_from_records(&query);
            lock(&self.received).push(query);

            async move {
                let Some(ScriptedCall { delay, response }) = next_call else {
                    return Ok(fallback);
                };
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match response {
                    ScriptedResponse::Page(page) => Ok(page),
                    ScriptedResponse::Failure(reason) => Err(miette::miette!("{reason}")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{list_fetcher_test_fixtures::TestListFetcher, *};
    use crate::{Record, SortDescriptor, SortDirection};

    fn records() -> Vec<Record> {
        (1..=25)
            .map(|n| Record::from([("id", json!(n))]))
            .collect()
    }

    #[tokio::test]
    async fn test_scripted_responses_come_first() {
        let fetcher = TestListFetcher::with_records(records())
            .then_failure("boom")
            .then_page(ListPage::new(vec![], 0));

        assert!(fetcher.fetch_page(ListQuery::new(1, 10)).await.is_err());
        assert_eq!(
            fetcher.fetch_page(ListQuery::new(1, 10)).await.unwrap(),
            ListPage::new(vec![], 0)
        );
        assert_eq!(
            fetcher.fetch_page(ListQuery::new(1, 10)).await.unwrap().total_items,
            25
        );
        assert_eq!(fetcher.received_queries().len(), 3);
    }

    #[tokio::test]
    async fn test_serves_sorted_slices() {
        let fetcher = TestListFetcher::with_records(records());

        let page = fetcher.fetch_page(ListQuery::new(3, 10)).await.unwrap();
        assert_eq!(page.records.len(), 5);
        assert_eq!(page.records[0].get("id"), Some(&json!(21)));

        let query = ListQuery {
            sort: Some(SortDescriptor::new("id", SortDirection::Descending)),
            ..ListQuery::new(1, 10)
        };
        let page = fetcher.fetch_page(query).await.unwrap();
        assert_eq!(page.records[0].get("id"), Some(&json!(25)));
    }
}
