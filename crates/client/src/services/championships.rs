use histdom_core::models::{Championship, CreateChampionship, UpdateChampionship};
use histdom_core::types::DbId;

use super::{Resource, Service};

/// Championships, keyed by numeric id.
#[derive(Debug, Clone, Copy)]
pub struct Championships;

pub type ChampionshipService = Service<Championships>;

impl Resource for Championships {
    type Entity = Championship;
    type Key = DbId;
    type Create = CreateChampionship;
    type Update = UpdateChampionship;

    const ENTITY: &'static str = "championship";
    const PLURAL: &'static str = "championships";
    const COLLECTION: &'static str = "/api/campeonatos/";

    fn key_of(championship: &Championship) -> DbId {
        championship.id
    }
}
