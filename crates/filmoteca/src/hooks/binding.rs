//! Query key tracking and latest-request-wins fetching.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, trace};

use super::status::MutationStatus;

/// What happened to a requested fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The query equals the bound one; nothing was fetched.
    Unchanged,
    /// The response was applied to the held state.
    Applied,
    /// A later query was issued while this one was in flight; its response
    /// was dropped.
    Superseded,
}

struct Bound<Q, S> {
    key: Option<String>,
    query: Option<Q>,
    data: S,
    loading: bool,
}

/// Held state for one query shape.
///
/// Every fetch takes a ticket from a monotonically increasing counter and its
/// response is applied only if that ticket is still the newest one issued.
pub(crate) struct Binding<Q, S> {
    ticket: AtomicU64,
    bound: RwLock<Bound<Q, S>>,
    status: RwLock<MutationStatus>,
}

impl<Q, S> Binding<Q, S>
where
    Q: Serialize + Clone,
    S: Clone + Default,
{
    pub fn new() -> Self {
        Self {
            ticket: AtomicU64::new(0),
            bound: RwLock::new(Bound {
                key: None,
                query: None,
                data: S::default(),
                loading: false,
            }),
            status: RwLock::new(MutationStatus::Idle),
        }
    }

    pub async fn data(&self) -> S {
        self.bound.read().await.data.clone()
    }

    pub async fn query(&self) -> Option<Q> {
        self.bound.read().await.query.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.bound.read().await.loading
    }

    pub async fn status(&self) -> MutationStatus {
        *self.status.read().await
    }

    /// Bind a query, fetching only when its serialized key changed.
    pub async fn bind<F, Fut>(&self, query: Q, fetch: F) -> FetchOutcome
    where
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = S>,
    {
        let key = serde_json::to_string(&query).ok();

        let ticket = {
            let mut bound = self.bound.write().await;
            if key.is_some() && bound.key == key {
                trace!(key = ?bound.key, "query unchanged");
                return FetchOutcome::Unchanged;
            }
            bound.key = key;
            bound.query = Some(query.clone());
            bound.loading = true;
            self.next_ticket()
        };

        self.settle(ticket, fetch(query)).await
    }

    /// Fetch the bound query again regardless of its key.
    pub async fn refetch<F, Fut>(&self, fetch: F) -> FetchOutcome
    where
        F: FnOnce(Q) -> Fut,
        Fut: Future<Output = S>,
    {
        let (ticket, query) = {
            let mut bound = self.bound.write().await;
            let Some(query) = bound.query.clone() else {
                return FetchOutcome::Unchanged;
            };
            bound.loading = true;
            (self.next_ticket(), query)
        };

        self.settle(ticket, fetch(query)).await
    }

    /// Replace the held state with a mutation result. Fetches still in
    /// flight are superseded.
    pub async fn replace(&self, data: S) {
        let mut bound = self.bound.write().await;
        self.next_ticket();
        bound.data = data;
        bound.loading = false;
    }

    /// Record a mutation outcome, replacing the held state on success.
    pub async fn complete(&self, result: Option<S>) -> MutationStatus {
        let status = match result {
            Some(data) => {
                self.replace(data).await;
                MutationStatus::Success
            }
            None => MutationStatus::Failed,
        };
        self.set_status(status).await;
        status
    }

    pub async fn set_status(&self, status: MutationStatus) {
        *self.status.write().await = status;
    }

    fn next_ticket(&self) -> u64 {
        self.ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn settle<Fut>(&self, ticket: u64, response: Fut) -> FetchOutcome
    where
        Fut: Future<Output = S>,
    {
        let data = response.await;

        let mut bound = self.bound.write().await;
        let latest = self.ticket.load(Ordering::SeqCst);
        if latest != ticket {
            debug!(ticket, latest, "dropping superseded response");
            return FetchOutcome::Superseded;
        }
        bound.data = data;
        bound.loading = false;
        FetchOutcome::Applied
    }
}
