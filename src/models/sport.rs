//! Sport identifiers and win-point thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Rally-scoring threshold for badminton, volleyball, and custom defaults.
pub const STANDARD_WIN_POINTS: u32 = 11;

/// Carrom is played to a higher board total.
pub const CARROM_WIN_POINTS: u32 = 20;

/// Identifier for a sport on the board. Built-in sports are fixed variants;
/// custom ones carry a freshly minted uuid so two events with the same display
/// name never collide.
///
/// Serializes as a plain string (`"badminton"`, `"custom-<uuid>"`) so it can
/// be used directly as a JSON object key in the persisted state.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SportId {
    Badminton,
    Volleyball,
    Carrom,
    Custom(Uuid),
}

impl SportId {
    /// The three sports that are always on the board, in display order.
    pub const BUILTINS: [SportId; 3] = [SportId::Badminton, SportId::Volleyball, SportId::Carrom];

    /// Mint an identifier for a newly created custom competition.
    pub fn mint_custom() -> Self {
        SportId::Custom(Uuid::new_v4())
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, SportId::Custom(_))
    }

    /// Fixed threshold for built-in sports; custom competitions choose their own.
    pub fn default_win_points(&self) -> Option<u32> {
        match self {
            SportId::Badminton | SportId::Volleyball => Some(STANDARD_WIN_POINTS),
            SportId::Carrom => Some(CARROM_WIN_POINTS),
            SportId::Custom(_) => None,
        }
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SportId::Badminton => write!(f, "badminton"),
            SportId::Volleyball => write!(f, "volleyball"),
            SportId::Carrom => write!(f, "carrom"),
            SportId::Custom(id) => write!(f, "custom-{}", id),
        }
    }
}

/// Error for strings that do not name a sport.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSportIdError(pub String);

impl fmt::Display for ParseSportIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not a sport identifier: {}", self.0)
    }
}

impl std::error::Error for ParseSportIdError {}

impl FromStr for SportId {
    type Err = ParseSportIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "badminton" => Ok(SportId::Badminton),
            "volleyball" => Ok(SportId::Volleyball),
            "carrom" => Ok(SportId::Carrom),
            other => match other.strip_prefix("custom-") {
                Some(raw) => Uuid::parse_str(raw)
                    .map(SportId::Custom)
                    .map_err(|_| ParseSportIdError(s.to_string())),
                None => Err(ParseSportIdError(s.to_string())),
            },
        }
    }
}

impl From<SportId> for String {
    fn from(id: SportId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for SportId {
    type Error = ParseSportIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
