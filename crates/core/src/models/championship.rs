//! Championship entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{ClubCode, DbId};

/// A championship as returned by the backend. Keyed by numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    pub id: DbId,
    /// Historic championship number, assigned by the backend.
    #[serde(default)]
    pub nch: Option<String>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "dias", default)]
    pub days: Option<i32>,
    #[serde(rename = "partidas", default)]
    pub games: Option<i32>,
    /// Maximum score per game (`pm`).
    #[serde(rename = "pm", default)]
    pub max_points: Option<i32>,
    /// `false` for group A, `true` for group B.
    #[serde(rename = "gb", default)]
    pub group_b: bool,
    /// First game of group B when `group_b` is set.
    #[serde(rename = "gbp", default)]
    pub group_b_from_game: Option<i32>,
    #[serde(rename = "tipo_campeonato_id")]
    pub championship_type_id: DbId,
    #[serde(rename = "club_codigo", default)]
    pub club_code: Option<ClubCode>,
    #[serde(rename = "nombre_tipo_campeonato", default)]
    pub championship_type_name: Option<String>,
}

/// DTO for creating a new championship.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChampionship {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "dias", skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
    #[serde(rename = "partidas", skip_serializing_if = "Option::is_none")]
    pub games: Option<i32>,
    #[serde(rename = "pm", skip_serializing_if = "Option::is_none")]
    pub max_points: Option<i32>,
    #[serde(rename = "gb")]
    pub group_b: bool,
    #[serde(rename = "gbp", skip_serializing_if = "Option::is_none")]
    pub group_b_from_game: Option<i32>,
    #[serde(rename = "tipo_campeonato_id")]
    pub championship_type_id: DbId,
    #[serde(rename = "club_codigo", skip_serializing_if = "Option::is_none")]
    pub club_code: Option<ClubCode>,
}

/// DTO for updating an existing championship. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChampionship {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "fecha_inicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "dias", skip_serializing_if = "Option::is_none")]
    pub days: Option<i32>,
    #[serde(rename = "partidas", skip_serializing_if = "Option::is_none")]
    pub games: Option<i32>,
    #[serde(rename = "pm", skip_serializing_if = "Option::is_none")]
    pub max_points: Option<i32>,
    #[serde(rename = "gb", skip_serializing_if = "Option::is_none")]
    pub group_b: Option<bool>,
    #[serde(rename = "gbp", skip_serializing_if = "Option::is_none")]
    pub group_b_from_game: Option<i32>,
}
