//! Club entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{ClubCode, DbId};

/// A club as returned by the backend. Keyed by its club code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: DbId,
    /// Two-digit province code (`cp`).
    #[serde(rename = "cp")]
    pub province_code: String,
    #[serde(rename = "numero_club")]
    pub club_number: String,
    /// Derived by the backend from province code and club number.
    #[serde(rename = "codigo_club")]
    pub code: ClubCode,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// DTO for creating a new club.
#[derive(Debug, Clone, Serialize)]
pub struct CreateClub {
    #[serde(rename = "cp")]
    pub province_code: String,
    #[serde(rename = "numero_club")]
    pub club_number: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// DTO for updating an existing club. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateClub {
    #[serde(rename = "cp", skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,
    #[serde(rename = "numero_club", skip_serializing_if = "Option::is_none")]
    pub club_number: Option<String>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
