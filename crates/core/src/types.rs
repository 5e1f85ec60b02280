use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Backend primary keys for id-keyed entities.
pub type DbId = i64;

/// Wire format for every date the backend exchanges.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Club code (`codigo_club`), the natural key of a club.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubCode(String);

impl ClubCode {
    /// Wrap a code as given. Format is left for the backend to check.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClubCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Federation identification number (IDFED), the natural key of a player.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Idfed(String);

impl Idfed {
    /// Wrap an IDFED as given, without validation.
    pub fn new(idfed: impl Into<String>) -> Self {
        Self(idfed.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Idfed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Idfed {
    fn from(idfed: &str) -> Self {
        Self::new(idfed)
    }
}

/// Composite key of a single result row.
///
/// The three parts are always supplied together; the display form
/// `{nch}-{YYYY-MM-DD}-{idfed}` is the row identity used in lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResultKey {
    /// Championship number (NCH).
    pub nch: i64,
    pub championship_date: NaiveDate,
    pub player_idfed: Idfed,
}

impl ResultKey {
    pub fn new(nch: i64, championship_date: NaiveDate, player_idfed: impl Into<Idfed>) -> Self {
        Self {
            nch,
            championship_date,
            player_idfed: player_idfed.into(),
        }
    }

    /// Path segments in the order the backend routes expect them, unescaped.
    pub fn path_segments(&self) -> [String; 3] {
        [
            self.nch.to_string(),
            self.championship_date.format(DATE_FORMAT).to_string(),
            self.player_idfed.to_string(),
        ]
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.nch,
            self.championship_date.format(DATE_FORMAT),
            self.player_idfed
        )
    }
}

impl FromStr for ResultKey {
    type Err = CoreError;

    /// Parse the display form back into a key. The date itself contains
    /// dashes, so the string is split as `nch`, three date parts, `idfed`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CoreError::Validation(format!(
                "Invalid result key '{s}'. Expected NCH-YYYY-MM-DD-IDFED"
            ))
        };

        let (nch, rest) = s.split_once('-').ok_or_else(invalid)?;
        let (date, idfed) = rest.rsplit_once('-').ok_or_else(invalid)?;

        let nch: i64 = nch.trim().parse().map_err(|_| invalid())?;
        let championship_date =
            NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| invalid())?;
        let idfed = idfed.trim();
        if idfed.is_empty() {
            return Err(invalid());
        }

        Ok(Self::new(nch, championship_date, idfed))
    }
}
