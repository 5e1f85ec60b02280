use histdom_core::models::{CreateMatchResult, MatchResult, UpdateMatchResult};
use histdom_core::types::{DbId, Idfed, ResultKey};

use super::{segment, Resource, Service};
use crate::error::ApiError;

/// Result rows, keyed by `(nch, championship date, player idfed)`.
#[derive(Debug, Clone, Copy)]
pub struct Results;

pub type ResultService = Service<Results>;

impl Resource for Results {
    type Entity = MatchResult;
    type Key = ResultKey;
    type Create = CreateMatchResult;
    type Update = UpdateMatchResult;

    const ENTITY: &'static str = "result";
    const PLURAL: &'static str = "results";
    const COLLECTION: &'static str = "/api/resultados/";

    fn key_of(result: &MatchResult) -> ResultKey {
        result.key()
    }

    fn item_path(key: &ResultKey) -> String {
        let segments: Vec<String> = key.path_segments().iter().map(segment).collect();
        format!("{}{}", Self::COLLECTION, segments.join("/"))
    }
}

impl Service<Results> {
    pub async fn list_by_player(&self, idfed: &Idfed) -> Result<Vec<MatchResult>, ApiError> {
        let page = self
            .list_at(&format!("{}jugador/{}", Results::COLLECTION, segment(idfed)))
            .await?;
        Ok(page.items)
    }

    pub async fn list_by_championship_type(
        &self,
        championship_type_id: DbId,
    ) -> Result<Vec<MatchResult>, ApiError> {
        let page = self
            .list_at(&format!(
                "{}tipo-campeonato/{championship_type_id}",
                Results::COLLECTION
            ))
            .await?;
        Ok(page.items)
    }

    /// Every row of one championship edition.
    pub async fn list_by_championship(
        &self,
        championship_type_id: DbId,
        nch: i64,
    ) -> Result<Vec<MatchResult>, ApiError> {
        let page = self
            .list_at(&format!(
                "{}campeonato/{championship_type_id}/{nch}",
                Results::COLLECTION
            ))
            .await?;
        Ok(page.items)
    }
}
