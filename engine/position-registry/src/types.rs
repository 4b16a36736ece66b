use crate::registry::VOLLEYBALL_POSITIONS;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A volleyball position a player can be listed under
///
/// Variants are declared in canonical display order. `Unknown` stands in for
/// any identifier outside the canonical set and always resolves to the
/// `Undecided` record. A null identifier deserializes to `Unknown` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Position {
    #[default]
    Undecided,
    Setter,
    Libero,
    MiddleBlocker,
    OutsideHitter,
    OppositeHitter,
    Unknown,
}

impl Position {
    /// All recognized positions in canonical order
    pub const ALL: [Position; 6] = [
        Position::Undecided,
        Position::Setter,
        Position::Libero,
        Position::MiddleBlocker,
        Position::OutsideHitter,
        Position::OppositeHitter,
    ];

    /// Resolve an identifier, mapping anything unrecognized to `Unknown`
    pub fn from_id(id: &str) -> Self {
        VOLLEYBALL_POSITIONS
            .iter()
            .position(|info| info.id == id)
            .map(|rank| Self::ALL[rank])
            .unwrap_or(Position::Unknown)
    }

    /// Zero-based rank in the canonical order, `None` for `Unknown`
    pub fn rank(self) -> Option<usize> {
        match self {
            Position::Undecided => Some(0),
            Position::Setter => Some(1),
            Position::Libero => Some(2),
            Position::MiddleBlocker => Some(3),
            Position::OutsideHitter => Some(4),
            Position::OppositeHitter => Some(5),
            Position::Unknown => None,
        }
    }

    /// Rank as a sort key; `Unknown` sorts ahead of every recognized position
    pub fn order_index(self) -> i32 {
        self.rank().map(|rank| rank as i32).unwrap_or(-1)
    }

    /// The table record for this position
    pub fn info(self) -> &'static PositionInfo {
        &VOLLEYBALL_POSITIONS[self.rank().unwrap_or(0)]
    }

    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    pub fn style_class(self) -> &'static str {
        self.info().style_class
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Position::Unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Strict parse: unlike `from_id`, unrecognized identifiers are an error
impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Position::from_id(s) {
            Position::Unknown => Err(PositionError::Unrecognized(s.to_string())),
            position => Ok(position),
        }
    }
}

impl From<String> for Position {
    fn from(id: String) -> Self {
        Position::from_id(&id)
    }
}

impl From<Option<String>> for Position {
    fn from(id: Option<String>) -> Self {
        id.map(Position::from).unwrap_or(Position::Unknown)
    }
}

/// Writes the resolved identifier, so `Unknown` is written as "Undecided" and
/// reads back with rank 0. `Player` keeps the raw string when that matters.
impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

/// One row of a position table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionInfo {
    /// Internal key (e.g., "Middle Blocker")
    pub id: &'static str,

    /// User-facing label
    pub display_name: &'static str,

    /// Styling token consumed by the presentation layer (e.g., "position-middle")
    pub style_class: &'static str,

    /// Short help text
    pub description: &'static str,
}

/// Anything that can be placed on a roster and sorted for display
pub trait RosterEntry {
    /// Position identifier as supplied by the roster; may be unrecognized
    fn position(&self) -> &str;

    /// Assigned team, `None` while the player is unassigned
    fn team_number(&self) -> Option<i64>;
}

impl<T: RosterEntry + ?Sized> RosterEntry for &T {
    fn position(&self) -> &str {
        (**self).position()
    }

    fn team_number(&self) -> Option<i64> {
        (**self).team_number()
    }
}

/// Whether the entry has been placed on a team
pub fn has_team<T: RosterEntry + ?Sized>(entry: &T) -> bool {
    entry.team_number().is_some()
}

/// A roster record in the shape the roster UI exchanges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player name (e.g., "Ana Souza")
    pub name: String,

    /// Position identifier (e.g., "Outside Hitter"); null or absent reads as ""
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,

    /// Team number, absent or null while unassigned. Any integer counts as
    /// assigned; fractional numbers are rejected.
    #[serde(default)]
    pub team_number: Option<i64>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Player {
    /// Create an unassigned player
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self { name: name.into(), position: position.into(), team_number: None }
    }

    /// Place the player on a team
    pub fn with_team(mut self, team_number: i64) -> Self {
        self.team_number = Some(team_number);
        self
    }
}

impl RosterEntry for Player {
    fn position(&self) -> &str {
        &self.position
    }

    fn team_number(&self) -> Option<i64> {
        self.team_number
    }
}

/// Errors raised by strict position handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Unrecognized position '{0}'")]
    Unrecognized(String),

    #[error("Position table is empty")]
    EmptyTable,
}
