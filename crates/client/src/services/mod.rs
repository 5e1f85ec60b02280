//! REST services, one per entity.
//!
//! Each entity is described by a [`Resource`] marker type (paths, key and
//! DTO types); [`Service`] maps the CRUD verbs onto those paths. Extra
//! read endpoints live as inherent methods in the entity modules.

mod championship_types;
mod championships;
mod clubs;
mod players;
mod results;

pub use championship_types::{ChampionshipTypeService, ChampionshipTypes};
pub use championships::{ChampionshipService, Championships};
pub use clubs::{ClubService, Clubs};
pub use players::{PlayerService, Players};
pub use results::{ResultService, Results};

use std::fmt;
use std::marker::PhantomData;

use histdom_core::query::{FilterCondition, ListQuery, Page, SortDirection};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Static description of one backend entity.
pub trait Resource: Send + Sync + 'static {
    type Entity: DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;
    type Key: Clone + PartialEq + fmt::Display + fmt::Debug + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    /// Singular name used in logs and messages.
    const ENTITY: &'static str;
    /// Plural name used in logs and messages.
    const PLURAL: &'static str;
    /// Collection path, including the trailing slash the backend routes on.
    const COLLECTION: &'static str;

    fn key_of(entity: &Self::Entity) -> Self::Key;

    fn item_path(key: &Self::Key) -> String {
        format!("{}{}", Self::COLLECTION, segment(key))
    }

    /// Method and path of the update endpoint.
    fn update_route(key: &Self::Key) -> (Method, String) {
        (Method::PUT, Self::item_path(key))
    }

    fn filter_path() -> String {
        format!("{}filtrar", Self::COLLECTION)
    }

    /// Message shown when a delete is refused because other records still
    /// reference the entity.
    fn has_dependents_message() -> String {
        format!(
            "The {} cannot be deleted because other records still reference it.",
            Self::ENTITY
        )
    }
}

/// Percent-encode `value` for use as a single path segment.
pub(crate) fn segment(value: impl fmt::Display) -> String {
    let raw = value.to_string();
    let encoded: String = url::form_urlencoded::byte_serialize(raw.as_bytes()).collect();
    // A literal `+` is already `%2B`, so any `+` left stands for a space.
    encoded.replace('+', "%20")
}

#[derive(Deserialize)]
struct ListEnvelope<T> {
    total: u64,
    #[serde(
        alias = "clubs",
        alias = "jugadores",
        alias = "campeonatos",
        alias = "tipos",
        alias = "resultados"
    )]
    items: Vec<T>,
}

/// Decode a list response, either an envelope with a total or a bare array.
///
/// The shape is picked from the JSON value first so a bad item reports its
/// own field error.
fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Page<T>, serde_json::Error> {
    if value.is_array() {
        let items: Vec<T> = serde_json::from_value(value)?;
        return Ok(Page {
            total: items.len() as u64,
            items,
        });
    }
    let envelope: ListEnvelope<T> = serde_json::from_value(value)?;
    Ok(Page {
        items: envelope.items,
        total: envelope.total,
    })
}

#[derive(Serialize)]
struct PageWindow {
    skip: u64,
    limit: u64,
}

/// Body posted to `{collection}filtrar`.
#[derive(Serialize)]
struct FilterRequest<'a> {
    conditions: &'a [FilterCondition],
    skip: u64,
    limit: u64,
    sort_by: Option<&'a str>,
    sort_dir: Option<SortDirection>,
}

impl<'a> From<&'a ListQuery> for FilterRequest<'a> {
    fn from(query: &'a ListQuery) -> Self {
        Self {
            conditions: &query.conditions,
            skip: query.skip,
            limit: query.limit,
            sort_by: query.sort_by.as_deref(),
            sort_dir: query.sort_dir,
        }
    }
}

/// CRUD service for the entity described by `R`.
pub struct Service<R: Resource> {
    api: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> Clone for Service<R> {
    fn clone(&self) -> Self {
        Self::new(self.api.clone())
    }
}

impl<R: Resource> fmt::Debug for Service<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Service")
            .field("entity", &R::ENTITY)
            .field("base_url", &self.api.base_url())
            .finish()
    }
}

impl<R: Resource> Service<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// One page of the collection.
    ///
    /// A pagination-only query is a `GET` on the collection; anything with
    /// conditions or a sort is posted to the filter endpoint.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<R::Entity>, ApiError> {
        let response: Value = if query.is_plain() {
            let window = PageWindow {
                skip: query.skip,
                limit: query.limit,
            };
            self.api.get_with_query(R::COLLECTION, &window).await?
        } else {
            self.api
                .post(&R::filter_path(), &FilterRequest::from(query))
                .await?
        };

        let page = Self::decode_page(response)?;
        tracing::debug!(
            entity = R::ENTITY,
            total = page.total,
            count = page.items.len(),
            "Listed"
        );
        Ok(page)
    }

    /// Fetch one record by key. An unknown key is a `NotFound` error.
    pub async fn get(&self, key: &R::Key) -> Result<R::Entity, ApiError> {
        self.api.get(&R::item_path(key)).await
    }

    /// Create a record and return it as the backend stored it.
    pub async fn create(&self, data: &R::Create) -> Result<R::Entity, ApiError> {
        self.api.post(R::COLLECTION, data).await
    }

    /// Apply `patch` and return the updated record. Fields left unset in the
    /// patch are not sent.
    pub async fn update(&self, key: &R::Key, patch: &R::Update) -> Result<R::Entity, ApiError> {
        let (method, path) = R::update_route(key);
        let updated = self.api.request(method, &path, Some(patch)).await?;
        updated.ok_or(ApiError::EmptyResponse { path })
    }

    /// Delete a record. Whatever body the backend sends back is ignored.
    pub async fn delete(&self, key: &R::Key) -> Result<(), ApiError> {
        self.api.delete(&R::item_path(key)).await
    }

    /// `GET` on an auxiliary read endpoint returning a list.
    pub(crate) async fn list_at(&self, path: &str) -> Result<Page<R::Entity>, ApiError> {
        let response: Value = self.api.get(path).await?;
        Self::decode_page(response)
    }

    fn decode_page(response: Value) -> Result<Page<R::Entity>, ApiError> {
        decode_list(response).map_err(|err| {
            tracing::error!(entity = R::ENTITY, error = %err, "Malformed list response");
            ApiError::from(err)
        })
    }
}
