//! Player (`jugador`) entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{ClubCode, DbId, Idfed};

/// A player as returned by the backend. Keyed by federation id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: DbId,
    #[serde(rename = "cp")]
    pub province_code: String,
    #[serde(rename = "numero_jugador")]
    pub player_number: String,
    pub idfed: Idfed,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub surnames: String,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "codigo_club")]
    pub club_code: ClubCode,
    #[serde(rename = "nombre_club", default)]
    pub club_name: Option<String>,
}

impl Player {
    /// `"Surnames, First name"`, the order players are listed in.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.surnames, self.first_name)
    }
}

/// DTO for creating a new player. The backend derives `idfed`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlayer {
    #[serde(rename = "cp")]
    pub province_code: String,
    #[serde(rename = "numero_jugador")]
    pub player_number: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellidos")]
    pub surnames: String,
    #[serde(rename = "codigo_club")]
    pub club_code: ClubCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// DTO for updating an existing player. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePlayer {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "apellidos", skip_serializing_if = "Option::is_none")]
    pub surnames: Option<String>,
    #[serde(rename = "codigo_club", skip_serializing_if = "Option::is_none")]
    pub club_code: Option<ClubCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dni: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
