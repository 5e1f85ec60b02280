//! REST client for the Histórico Domino backend.
//!
//! - [`http::ApiClient`] wraps JSON-over-HTTP and normalizes errors and
//!   `204 No Content` responses.
//! - [`services`] has one REST service per entity, mapping CRUD verbs to
//!   backend paths.
//! - [`store`] holds per-entity state: the fetched collection, the
//!   selection and loading/error flags. Stores refresh their list after
//!   every write.
//!
//! [`DominoClient`] wires them together from a [`ClientConfig`].

pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod store;

pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind};
pub use http::ApiClient;

use services::{ChampionshipTypes, Championships, Clubs, Players, Results, Service};
use store::{
    ChampionshipStore, ChampionshipTypeStore, ClubStore, EntityStore, PlayerStore, ResultStore,
};

/// Entry point holding one shared HTTP client.
///
/// Every `*_store` call returns a fresh store with its own state; stores
/// never share state with each other.
#[derive(Debug, Clone)]
pub struct DominoClient {
    api: ApiClient,
    config: ClientConfig,
}

impl DominoClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config)?;
        Ok(Self { api, config })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn clubs(&self) -> Service<Clubs> {
        Service::new(self.api.clone())
    }

    pub fn players(&self) -> Service<Players> {
        Service::new(self.api.clone())
    }

    pub fn championship_types(&self) -> Service<ChampionshipTypes> {
        Service::new(self.api.clone())
    }

    pub fn championships(&self) -> Service<Championships> {
        Service::new(self.api.clone())
    }

    pub fn results(&self) -> Service<Results> {
        Service::new(self.api.clone())
    }

    pub fn club_store(&self) -> ClubStore {
        EntityStore::new(self.clubs())
    }

    pub fn player_store(&self) -> PlayerStore {
        EntityStore::new(self.players())
    }

    pub fn championship_type_store(&self) -> ChampionshipTypeStore {
        EntityStore::new(self.championship_types())
    }

    pub fn championship_store(&self) -> ChampionshipStore {
        EntityStore::new(self.championships())
    }

    pub fn result_store(&self) -> ResultStore {
        EntityStore::new(self.results())
    }
}
