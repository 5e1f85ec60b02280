use histdom_core::models::{CreatePlayer, Player, UpdatePlayer};
use histdom_core::types::{ClubCode, Idfed};
use reqwest::Method;

use super::{segment, Resource, Service};
use crate::error::ApiError;

/// Players, keyed by federation id.
#[derive(Debug, Clone, Copy)]
pub struct Players;

pub type PlayerService = Service<Players>;

impl Resource for Players {
    type Entity = Player;
    type Key = Idfed;
    type Create = CreatePlayer;
    type Update = UpdatePlayer;

    const ENTITY: &'static str = "player";
    const PLURAL: &'static str = "players";
    const COLLECTION: &'static str = "/api/jugadores/";

    fn key_of(player: &Player) -> Idfed {
        player.idfed.clone()
    }

    /// Players are updated through a dedicated `POST` route.
    fn update_route(idfed: &Idfed) -> (Method, String) {
        (Method::POST, format!("{}actualizar/{}", Self::COLLECTION, segment(idfed)))
    }
}

impl Service<Players> {
    /// Every player registered with the club.
    pub async fn list_by_club(&self, code: &ClubCode) -> Result<Vec<Player>, ApiError> {
        let page = self
            .list_at(&format!("{}club/{}", Players::COLLECTION, segment(code)))
            .await?;
        Ok(page.items)
    }
}
