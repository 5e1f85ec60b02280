//! Entity records and their create/update DTOs.
//!
//! Rust field names are English; the serde renames carry the backend's
//! wire names. Update DTOs serialize only the fields that are set.

pub mod championship;
pub mod championship_type;
pub mod club;
pub mod match_result;
pub mod player;

pub use championship::{Championship, CreateChampionship, UpdateChampionship};
pub use championship_type::{ChampionshipType, CreateChampionshipType, UpdateChampionshipType};
pub use club::{Club, CreateClub, UpdateClub};
pub use match_result::{CreateMatchResult, MatchResult, UpdateMatchResult};
pub use player::{CreatePlayer, Player, UpdatePlayer};
