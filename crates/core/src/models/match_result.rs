//! Result (`resultado`) entity model and DTOs.
//!
//! One row is one player's record for one game of a championship.
//! Names and clubs are denormalized onto the row by the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Player;
use crate::types::{ClubCode, DbId, Idfed, ResultKey};

/// A result row as returned by the backend. Keyed by [`ResultKey`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub nch: i64,
    #[serde(rename = "fecha_campeonato")]
    pub championship_date: NaiveDate,
    #[serde(rename = "idfed_jugador")]
    pub player_idfed: Idfed,
    #[serde(rename = "tipo_campeonato_id")]
    pub championship_type_id: DbId,
    #[serde(rename = "codigo_tipo_campeonato", default)]
    pub championship_type_code: Option<String>,
    #[serde(rename = "nombre_campeonato", default)]
    pub championship_name: Option<String>,
    #[serde(rename = "nombre_jugador", default)]
    pub player_name: Option<String>,
    #[serde(rename = "apellido_jugador", default)]
    pub player_surname: Option<String>,
    #[serde(rename = "codigo_club_jugador", default)]
    pub player_club_code: Option<ClubCode>,
    #[serde(rename = "nombre_club_jugador", default)]
    pub player_club_name: Option<String>,
    #[serde(rename = "idfed_pareja", default)]
    pub partner_idfed: Option<Idfed>,
    #[serde(rename = "nombre_pareja", default)]
    pub partner_name: Option<String>,
    #[serde(rename = "apellido_pareja", default)]
    pub partner_surname: Option<String>,
    #[serde(rename = "codigo_club_pareja", default)]
    pub partner_club_code: Option<ClubCode>,
    #[serde(rename = "nombre_club_pareja", default)]
    pub partner_club_name: Option<String>,
    #[serde(rename = "partida", default)]
    pub game: Option<i32>,
    #[serde(rename = "mesa", default)]
    pub table: Option<i32>,
    /// Group flag; older rows send it as `0`/`1`.
    #[serde(rename = "gb", default, deserialize_with = "flag_from_bool_or_int")]
    pub group_b: Option<bool>,
    /// Games won (`pg`).
    #[serde(rename = "pg", default)]
    pub games_won: Option<i32>,
    /// Point differential (`dif`).
    #[serde(rename = "dif", default)]
    pub point_difference: Option<i32>,
    #[serde(rename = "pv", default)]
    pub valid_points: Option<i32>,
    #[serde(rename = "pt", default)]
    pub total_points: Option<i32>,
    #[serde(rename = "mg", default)]
    pub hands_won: Option<i32>,
    #[serde(rename = "pos", default)]
    pub position: Option<i32>,
}

impl MatchResult {
    pub fn key(&self) -> ResultKey {
        ResultKey::new(self.nch, self.championship_date, self.player_idfed.clone())
    }

    /// `"Surname, Name"` when both are present, otherwise the federation id.
    pub fn player_display_name(&self) -> String {
        match (&self.player_surname, &self.player_name) {
            (Some(surname), Some(name)) => format!("{surname}, {name}"),
            (None, Some(name)) => name.clone(),
            (Some(surname), None) => surname.clone(),
            (None, None) => self.player_idfed.to_string(),
        }
    }
}

fn flag_from_bool_or_int<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Bool(value) => value,
        Flag::Int(value) => value != 0,
    }))
}

/// DTO for creating a result row.
///
/// The key fields are mandatory here. The backend also requires the
/// player's name and club, the championship name and the score fields;
/// [`with_player`](Self::with_player) fills the player block from a
/// fetched [`Player`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateMatchResult {
    pub nch: i64,
    #[serde(rename = "fecha_campeonato")]
    pub championship_date: NaiveDate,
    #[serde(rename = "idfed_jugador")]
    pub player_idfed: Idfed,
    #[serde(rename = "tipo_campeonato_id")]
    pub championship_type_id: DbId,
    #[serde(rename = "nombre_campeonato", skip_serializing_if = "Option::is_none")]
    pub championship_name: Option<String>,
    #[serde(rename = "nombre_jugador", skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(rename = "apellido_jugador", skip_serializing_if = "Option::is_none")]
    pub player_surname: Option<String>,
    #[serde(rename = "codigo_club_jugador", skip_serializing_if = "Option::is_none")]
    pub player_club_code: Option<ClubCode>,
    #[serde(rename = "nombre_club_jugador", skip_serializing_if = "Option::is_none")]
    pub player_club_name: Option<String>,
    #[serde(rename = "idfed_pareja", skip_serializing_if = "Option::is_none")]
    pub partner_idfed: Option<Idfed>,
    #[serde(rename = "nombre_pareja", skip_serializing_if = "Option::is_none")]
    pub partner_name: Option<String>,
    #[serde(rename = "apellido_pareja", skip_serializing_if = "Option::is_none")]
    pub partner_surname: Option<String>,
    #[serde(rename = "codigo_club_pareja", skip_serializing_if = "Option::is_none")]
    pub partner_club_code: Option<ClubCode>,
    #[serde(rename = "nombre_club_pareja", skip_serializing_if = "Option::is_none")]
    pub partner_club_name: Option<String>,
    #[serde(rename = "partida", skip_serializing_if = "Option::is_none")]
    pub game: Option<i32>,
    #[serde(rename = "mesa", skip_serializing_if = "Option::is_none")]
    pub table: Option<i32>,
    #[serde(rename = "gb", skip_serializing_if = "Option::is_none")]
    pub group_b: Option<bool>,
    #[serde(rename = "pg", skip_serializing_if = "Option::is_none")]
    pub games_won: Option<i32>,
    #[serde(rename = "dif", skip_serializing_if = "Option::is_none")]
    pub point_difference: Option<i32>,
    #[serde(rename = "pv", skip_serializing_if = "Option::is_none")]
    pub valid_points: Option<i32>,
    #[serde(rename = "pt", skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i32>,
    #[serde(rename = "mg", skip_serializing_if = "Option::is_none")]
    pub hands_won: Option<i32>,
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

impl CreateMatchResult {
    /// A row with only its key and championship type set.
    pub fn new(key: ResultKey, championship_type_id: DbId) -> Self {
        Self {
            nch: key.nch,
            championship_date: key.championship_date,
            player_idfed: key.player_idfed,
            championship_type_id,
            championship_name: None,
            player_name: None,
            player_surname: None,
            player_club_code: None,
            player_club_name: None,
            partner_idfed: None,
            partner_name: None,
            partner_surname: None,
            partner_club_code: None,
            partner_club_name: None,
            game: None,
            table: None,
            group_b: None,
            games_won: None,
            point_difference: None,
            valid_points: None,
            total_points: None,
            hands_won: None,
            position: None,
        }
    }

    pub fn key(&self) -> ResultKey {
        ResultKey::new(self.nch, self.championship_date, self.player_idfed.clone())
    }

    /// Copy name and club of `player` into the player fields.
    pub fn with_player(mut self, player: &Player) -> Self {
        self.player_name = Some(player.first_name.clone());
        self.player_surname = Some(player.surnames.clone());
        self.player_club_code = Some(player.club_code.clone());
        self.player_club_name = player.club_name.clone();
        self
    }

    /// Set the partner and copy their name and club.
    pub fn with_partner(mut self, partner: &Player) -> Self {
        self.partner_idfed = Some(partner.idfed.clone());
        self.partner_name = Some(partner.first_name.clone());
        self.partner_surname = Some(partner.surnames.clone());
        self.partner_club_code = Some(partner.club_code.clone());
        self.partner_club_name = partner.club_name.clone();
        self
    }
}

/// DTO for updating a result row. Key fields cannot change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMatchResult {
    #[serde(rename = "tipo_campeonato_id", skip_serializing_if = "Option::is_none")]
    pub championship_type_id: Option<DbId>,
    #[serde(rename = "nombre_campeonato", skip_serializing_if = "Option::is_none")]
    pub championship_name: Option<String>,
    #[serde(rename = "partida", skip_serializing_if = "Option::is_none")]
    pub game: Option<i32>,
    #[serde(rename = "mesa", skip_serializing_if = "Option::is_none")]
    pub table: Option<i32>,
    #[serde(rename = "gb", skip_serializing_if = "Option::is_none")]
    pub group_b: Option<bool>,
    #[serde(rename = "pg", skip_serializing_if = "Option::is_none")]
    pub games_won: Option<i32>,
    #[serde(rename = "dif", skip_serializing_if = "Option::is_none")]
    pub point_difference: Option<i32>,
    #[serde(rename = "pv", skip_serializing_if = "Option::is_none")]
    pub valid_points: Option<i32>,
    #[serde(rename = "pt", skip_serializing_if = "Option::is_none")]
    pub total_points: Option<i32>,
    #[serde(rename = "mg", skip_serializing_if = "Option::is_none")]
    pub hands_won: Option<i32>,
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}
