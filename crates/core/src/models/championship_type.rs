//! Championship type entity model and DTOs.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A championship type (e.g. league, open). Keyed by numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionshipType {
    pub id: DbId,
    /// Two upper-case letters.
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}

/// DTO for creating a new championship type.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChampionshipType {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// DTO for updating an existing championship type. All fields are optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChampionshipType {
    #[serde(rename = "codigo", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
