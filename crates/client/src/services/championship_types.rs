use histdom_core::models::{ChampionshipType, CreateChampionshipType, UpdateChampionshipType};
use histdom_core::types::DbId;

use super::{segment, Resource, Service};
use crate::error::ApiError;

/// Championship types, keyed by numeric id.
#[derive(Debug, Clone, Copy)]
pub struct ChampionshipTypes;

pub type ChampionshipTypeService = Service<ChampionshipTypes>;

impl Resource for ChampionshipTypes {
    type Entity = ChampionshipType;
    type Key = DbId;
    type Create = CreateChampionshipType;
    type Update = UpdateChampionshipType;

    const ENTITY: &'static str = "championship type";
    const PLURAL: &'static str = "championship types";
    const COLLECTION: &'static str = "/api/tipos-campeonato/";

    fn key_of(kind: &ChampionshipType) -> DbId {
        kind.id
    }

    fn has_dependents_message() -> String {
        "The championship type cannot be deleted because championships or results still use it."
            .to_string()
    }
}

impl Service<ChampionshipTypes> {
    /// Look a type up by its two-letter code.
    pub async fn get_by_code(&self, code: &str) -> Result<ChampionshipType, ApiError> {
        self.api()
            .get(&format!("{}codigo/{}", ChampionshipTypes::COLLECTION, segment(code)))
            .await
    }
}
