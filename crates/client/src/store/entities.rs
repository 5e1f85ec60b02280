//! Entity-specific store operations and derived views.

use std::collections::BTreeMap;

use histdom_core::models::{Championship, ChampionshipType, Club, MatchResult, Player};
use histdom_core::types::{ClubCode, DbId, Idfed};
use histdom_core::views::{self, PlayerStanding};

use super::EntityStore;
use crate::error::ApiError;
use crate::services::{ChampionshipTypes, Championships, Clubs, Players, Results};

pub type ClubStore = EntityStore<Clubs>;
pub type PlayerStore = EntityStore<Players>;
pub type ChampionshipTypeStore = EntityStore<ChampionshipTypes>;
pub type ChampionshipStore = EntityStore<Championships>;
pub type ResultStore = EntityStore<Results>;

impl EntityStore<Clubs> {
    pub fn sorted_by_name(&self) -> Vec<Club> {
        let state = self.state.borrow();
        views::clubs_by_name(&state.items).into_iter().cloned().collect()
    }
}

impl EntityStore<Players> {
    /// Players ordered by surnames, then first name.
    pub fn sorted_by_name(&self) -> Vec<Player> {
        let state = self.state.borrow();
        views::players_by_name(&state.items).into_iter().cloned().collect()
    }

    pub fn grouped_by_club(&self) -> BTreeMap<ClubCode, Vec<Player>> {
        let state = self.state.borrow();
        views::players_by_club(&state.items)
            .into_iter()
            .map(|(code, players)| (code, players.into_iter().cloned().collect()))
            .collect()
    }

    /// Replace the collection with the players of one club.
    pub async fn fetch_by_club(&self, code: &ClubCode) -> Result<(), ApiError> {
        self.load_list(
            self.service.list_by_club(code),
            format!("Could not load the players of club {code}."),
        )
        .await
    }
}

impl EntityStore<ChampionshipTypes> {
    /// Load the type with the given code into the selection.
    pub async fn fetch_by_code(&self, code: &str) -> Result<ChampionshipType, ApiError> {
        self.load_selection(
            self.service.get_by_code(code),
            format!("Could not load championship type {code}."),
        )
        .await
    }
}

impl EntityStore<Championships> {
    /// Newest first.
    pub fn sorted_by_date(&self) -> Vec<Championship> {
        let state = self.state.borrow();
        views::championships_by_date(&state.items)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl EntityStore<Results> {
    pub fn sorted_by_date(&self) -> Vec<MatchResult> {
        let state = self.state.borrow();
        views::results_by_date(&state.items).into_iter().cloned().collect()
    }

    /// Player ranking over the loaded rows.
    pub fn standings(&self) -> Vec<PlayerStanding> {
        views::standings(&self.state.borrow().items)
    }

    pub async fn fetch_by_player(&self, idfed: &Idfed) -> Result<(), ApiError> {
        self.load_list(
            self.service.list_by_player(idfed),
            format!("Could not load the results of player {idfed}."),
        )
        .await
    }

    pub async fn fetch_by_championship_type(&self, championship_type_id: DbId) -> Result<(), ApiError> {
        self.load_list(
            self.service.list_by_championship_type(championship_type_id),
            format!("Could not load the results of championship type {championship_type_id}."),
        )
        .await
    }

    pub async fn fetch_by_championship(
        &self,
        championship_type_id: DbId,
        nch: i64,
    ) -> Result<(), ApiError> {
        self.load_list(
            self.service.list_by_championship(championship_type_id, nch),
            format!("Could not load the results of championship {nch}."),
        )
        .await
    }
}
