use histdom_core::models::{Club, CreateClub, UpdateClub};
use histdom_core::types::ClubCode;

use super::{Resource, Service};

/// Clubs, keyed by club code.
#[derive(Debug, Clone, Copy)]
pub struct Clubs;

pub type ClubService = Service<Clubs>;

impl Resource for Clubs {
    type Entity = Club;
    type Key = ClubCode;
    type Create = CreateClub;
    type Update = UpdateClub;

    const ENTITY: &'static str = "club";
    const PLURAL: &'static str = "clubs";
    const COLLECTION: &'static str = "/api/clubs/";

    fn key_of(club: &Club) -> ClubCode {
        club.code.clone()
    }

    fn has_dependents_message() -> String {
        "The club cannot be deleted because it still has players. \
         Delete or reassign its players first."
            .to_string()
    }
}
