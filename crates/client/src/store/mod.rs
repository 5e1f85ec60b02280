//! Per-entity state containers.
//!
//! An [`EntityStore`] owns the collection last fetched for one entity, the
//! currently selected item, an in-flight counter behind `is_loading` and a
//! display-ready error message. State lives in a [`watch`] channel written
//! only by the store; callers read it through [`EntityStore::snapshot`] or
//! follow it with [`EntityStore::subscribe`].
//!
//! Writes never patch the collection locally: a successful create, update
//! or delete re-runs the last `fetch_all` query so the backend stays the
//! source of truth.

mod entities;

pub use entities::{
    ChampionshipStore, ChampionshipTypeStore, ClubStore, PlayerStore, ResultStore,
};

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use histdom_core::pagination::PageState;
use histdom_core::query::{ListQuery, Page};
use tokio::sync::watch;

use crate::error::{ApiError, ApiErrorKind};
use crate::services::{Resource, Service};

/// Observable state of one store.
#[derive(Debug, Clone)]
pub struct StoreState<T> {
    /// Collection from the last successful list fetch.
    pub items: Vec<T>,
    /// Backend total for the last list query (all pages).
    pub total: u64,
    pub selected: Option<T>,
    /// Message for the last failed operation, cleared when the next one
    /// starts.
    pub error: Option<String>,
    /// Query of the last `fetch_all`, re-run after every write.
    pub query: ListQuery,
    pending: usize,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            selected: None,
            error: None,
            query: ListQuery::default(),
            pending: 0,
        }
    }
}

impl<T> StoreState<T> {
    /// `true` while at least one operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}

/// Marks one operation in flight for as long as it lives.
///
/// Starting an operation clears the previous error; dropping the guard on
/// any exit path releases the loading flag once nothing else is pending.
struct LoadingGuard<'a, T> {
    state: &'a watch::Sender<StoreState<T>>,
}

impl<'a, T> LoadingGuard<'a, T> {
    fn begin(state: &'a watch::Sender<StoreState<T>>) -> Self {
        state.send_modify(|s| {
            s.pending += 1;
            s.error = None;
        });
        Self { state }
    }
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.pending = s.pending.saturating_sub(1));
    }
}

/// State container for the entity described by `R`.
pub struct EntityStore<R: Resource> {
    service: Service<R>,
    state: watch::Sender<StoreState<R::Entity>>,
    list_generation: AtomicU64,
    selection_generation: AtomicU64,
}

impl<R: Resource> EntityStore<R> {
    pub fn new(service: Service<R>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            service,
            state,
            list_generation: AtomicU64::new(0),
            selection_generation: AtomicU64::new(0),
        }
    }

    pub fn service(&self) -> &Service<R> {
        &self.service
    }

    // -- reads ---------------------------------------------------------------

    pub fn subscribe(&self) -> watch::Receiver<StoreState<R::Entity>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState<R::Entity> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<R::Entity> {
        self.state.borrow().items.clone()
    }

    pub fn total(&self) -> u64 {
        self.state.borrow().total
    }

    pub fn selected(&self) -> Option<R::Entity> {
        self.state.borrow().selected.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Server-side paging position derived from the last query and total.
    pub fn page_state(&self) -> PageState {
        let state = self.state.borrow();
        PageState::from_window(state.query.skip, state.query.limit, state.total)
    }

    // -- operations ----------------------------------------------------------

    /// Replace the collection with one page from the backend.
    ///
    /// Overlapping calls resolve last-issued-wins: a response that arrives
    /// after a newer call has started is returned to its caller but never
    /// written to the state.
    pub async fn fetch_all(&self, query: ListQuery) -> Result<(), ApiError> {
        let generation = self.list_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::begin(&self.state);
        self.state.send_modify(|s| s.query = query.clone());

        let result = self.service.list(&query).await;
        let message = format!("Could not load the {}.", R::PLURAL);
        self.apply_list(generation, result, message)
    }

    /// Load one item into the selection.
    pub async fn fetch_by_key(&self, key: &R::Key) -> Result<R::Entity, ApiError> {
        self.load_selection(
            self.service.get(key),
            format!("Could not load {} {key}.", R::ENTITY),
        )
        .await
    }

    /// Create a record, then refetch the last query.
    pub async fn create(&self, data: &R::Create) -> Result<R::Entity, ApiError> {
        let _loading = LoadingGuard::begin(&self.state);

        let created = self
            .service
            .create(data)
            .await
            .map_err(|err| self.fail(err, format!("Could not create the {}.", R::ENTITY)))?;

        tracing::info!(entity = R::ENTITY, key = %R::key_of(&created), "Created");
        self.refresh().await;
        Ok(created)
    }

    /// Update a record and refetch. A selection holding `key` is replaced
    /// with the updated record.
    pub async fn update(&self, key: &R::Key, patch: &R::Update) -> Result<R::Entity, ApiError> {
        let _loading = LoadingGuard::begin(&self.state);

        let updated = self
            .service
            .update(key, patch)
            .await
            .map_err(|err| self.fail(err, format!("Could not update {} {key}.", R::ENTITY)))?;

        tracing::info!(entity = R::ENTITY, %key, "Updated");
        self.state.send_if_modified(|s| {
            let holds_key = s.selected.as_ref().is_some_and(|sel| R::key_of(sel) == *key);
            if holds_key {
                s.selected = Some(updated.clone());
            }
            holds_key
        });
        self.refresh().await;
        Ok(updated)
    }

    /// Delete a record and refetch, clearing the selection if it held `key`.
    ///
    /// A refusal because other records reference the entity sets the
    /// entity's dependents message as the store error.
    pub async fn delete(&self, key: &R::Key) -> Result<(), ApiError> {
        let _loading = LoadingGuard::begin(&self.state);

        self.service
            .delete(key)
            .await
            .map_err(|err| self.fail(err, format!("Could not delete {} {key}.", R::ENTITY)))?;

        tracing::info!(entity = R::ENTITY, %key, "Deleted");
        self.state.send_if_modified(|s| {
            let holds_key = s.selected.as_ref().is_some_and(|sel| R::key_of(sel) == *key);
            if holds_key {
                s.selected = None;
            }
            holds_key
        });
        self.refresh().await;
        Ok(())
    }

    /// Refetch `page` (1-based) of the last query.
    ///
    /// Returns `Ok(false)` without a request when `page` is outside
    /// `[1, total_pages]` or already current.
    pub async fn go_to_page(&self, page: usize) -> Result<bool, ApiError> {
        let mut paging = self.page_state();
        if !paging.go_to_page(page) {
            return Ok(false);
        }

        let query = self.state.borrow().query.clone();
        let skip = paging.offset() as u64;
        self.fetch_all(query.with_window(skip, query.limit)).await?;
        Ok(true)
    }

    pub fn clear_selection(&self) {
        self.state.send_if_modified(|s| s.selected.take().is_some());
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    // ---- private helpers ----

    /// Re-run the last list query after a successful write. A failure
    /// leaves its message in the state but does not fail the write.
    async fn refresh(&self) {
        let query = self.state.borrow().query.clone();
        if let Err(err) = self.fetch_all(query).await {
            tracing::warn!(entity = R::ENTITY, error = %err, "Refresh after write failed");
        }
    }

    /// Record the message for a failed operation and hand the error back.
    fn fail(&self, err: ApiError, generic: String) -> ApiError {
        let message = match err.kind() {
            ApiErrorKind::HasDependents => R::has_dependents_message(),
            _ => err.backend_detail().map(str::to_string).unwrap_or(generic),
        };
        tracing::warn!(entity = R::ENTITY, kind = ?err.kind(), error = %err, "Store operation failed");
        self.state.send_modify(|s| s.error = Some(message));
        err
    }

    /// Write a list result unless a newer list request has started since
    /// `generation` was issued.
    fn apply_list(
        &self,
        generation: u64,
        result: Result<Page<R::Entity>, ApiError>,
        message: String,
    ) -> Result<(), ApiError> {
        if self.list_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(entity = R::ENTITY, generation, "Discarding stale list response");
            return result.map(|_| ());
        }

        match result {
            Ok(page) => {
                tracing::info!(entity = R::ENTITY, total = page.total, count = page.items.len(), "Fetched");
                self.state.send_modify(|s| {
                    s.items = page.items;
                    s.total = page.total;
                });
                Ok(())
            }
            Err(err) => {
                self.state.send_modify(|s| {
                    s.items.clear();
                    s.total = 0;
                });
                Err(self.fail(err, message))
            }
        }
    }

    /// Replace the collection from an auxiliary list endpoint. The
    /// remembered query is left alone, so later writes refresh from it.
    async fn load_list<F>(&self, request: F, message: String) -> Result<(), ApiError>
    where
        F: Future<Output = Result<Vec<R::Entity>, ApiError>>,
    {
        let generation = self.list_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::begin(&self.state);

        let result = request.await.map(|items| Page {
            total: items.len() as u64,
            items,
        });
        self.apply_list(generation, result, message)
    }

    /// Write the selection unless a newer selection request has started.
    async fn load_selection<F>(&self, request: F, message: String) -> Result<R::Entity, ApiError>
    where
        F: Future<Output = Result<R::Entity, ApiError>>,
    {
        let generation = self.selection_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::begin(&self.state);

        let result = request.await;
        if self.selection_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(entity = R::ENTITY, generation, "Discarding stale selection response");
            return result;
        }

        match result {
            Ok(item) => {
                self.state.send_modify(|s| s.selected = Some(item.clone()));
                Ok(item)
            }
            Err(err) => {
                self.state.send_modify(|s| s.selected = None);
                Err(self.fail(err, message))
            }
        }
    }
}
