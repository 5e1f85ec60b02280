//! Derived read-only views over a fetched collection.
//!
//! Every function here is pure: it borrows the collection and returns a
//! new ordering or aggregation without holding state of its own.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::models::{Championship, Club, MatchResult, Player};
use crate::types::{ClubCode, Idfed};

/// Case-insensitive comparison with a case-sensitive tiebreak so the
/// ordering stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Clubs ordered by name.
pub fn clubs_by_name(clubs: &[Club]) -> Vec<&Club> {
    let mut sorted: Vec<&Club> = clubs.iter().collect();
    sorted.sort_by(|a, b| compare_names(&a.name, &b.name));
    sorted
}

/// Players ordered by surnames, then first name.
pub fn players_by_name(players: &[Player]) -> Vec<&Player> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| {
        compare_names(&a.surnames, &b.surnames)
            .then_with(|| compare_names(&a.first_name, &b.first_name))
    });
    sorted
}

/// Players grouped by club code, each group in collection order.
/// Players without a club code are left out.
pub fn players_by_club(players: &[Player]) -> BTreeMap<ClubCode, Vec<&Player>> {
    let mut groups: BTreeMap<ClubCode, Vec<&Player>> = BTreeMap::new();
    for player in players {
        if player.club_code.as_str().is_empty() {
            continue;
        }
        groups.entry(player.club_code.clone()).or_default().push(player);
    }
    groups
}

/// Championships ordered by start date, newest first.
pub fn championships_by_date(championships: &[Championship]) -> Vec<&Championship> {
    let mut sorted: Vec<&Championship> = championships.iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    sorted
}

/// Result rows ordered by championship date (newest first), then by
/// championship number, game and player.
pub fn results_by_date(results: &[MatchResult]) -> Vec<&MatchResult> {
    let mut sorted: Vec<&MatchResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        b.championship_date
            .cmp(&a.championship_date)
            .then_with(|| a.nch.cmp(&b.nch))
            .then_with(|| a.game.cmp(&b.game))
            .then_with(|| a.player_idfed.cmp(&b.player_idfed))
    });
    sorted
}

/// Aggregated record of one player over a set of result rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub idfed: Idfed,
    pub display_name: String,
    pub club_code: Option<ClubCode>,
    /// Number of result rows (games played).
    pub games_played: u32,
    /// Sum of games won (`pg`).
    pub wins: i64,
    /// Sum of point differential (`dif`).
    pub point_difference: i64,
    /// Sum of total points (`pt`).
    pub total_points: i64,
}

/// Ranking by wins, then point differential, both descending. Ties fall
/// back to federation id so the order is deterministic.
pub fn standings(results: &[MatchResult]) -> Vec<PlayerStanding> {
    let mut by_player: HashMap<&Idfed, PlayerStanding> = HashMap::new();

    for row in results {
        let entry = by_player
            .entry(&row.player_idfed)
            .or_insert_with(|| PlayerStanding {
                idfed: row.player_idfed.clone(),
                display_name: row.player_display_name(),
                club_code: row.player_club_code.clone(),
                games_played: 0,
                wins: 0,
                point_difference: 0,
                total_points: 0,
            });

        entry.games_played += 1;
        entry.wins += i64::from(row.games_won.unwrap_or(0));
        entry.point_difference += i64::from(row.point_difference.unwrap_or(0));
        entry.total_points += i64::from(row.total_points.unwrap_or(0));
    }

    let mut ranked: Vec<PlayerStanding> = by_player.into_values().collect();
    ranked.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.point_difference.cmp(&a.point_difference))
            .then_with(|| a.idfed.cmp(&b.idfed))
    });
    ranked
}
