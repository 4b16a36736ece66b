use crate::types::{has_team, PositionError, PositionInfo, RosterEntry};
use tracing::debug;

/// Volleyball positions in canonical display order
///
/// Index 0 is the fallback record for unrecognized identifiers. The row order
/// must match `Position::ALL`.
pub static VOLLEYBALL_POSITIONS: [PositionInfo; 6] = [
    PositionInfo {
        id: "Undecided",
        display_name: "Undecided",
        style_class: "position-undecided",
        description: "Flexible players (default option)",
    },
    PositionInfo {
        id: "Setter",
        display_name: "Setter",
        style_class: "position-setter",
        description: "Playmaker who sets up attacks",
    },
    PositionInfo {
        id: "Libero",
        display_name: "Libero",
        style_class: "position-libero",
        description: "Defensive specialist",
    },
    PositionInfo {
        id: "Middle Blocker",
        display_name: "Middle Blocker",
        style_class: "position-middle",
        description: "Front-row blockers",
    },
    PositionInfo {
        id: "Outside Hitter",
        display_name: "Outside Hitter",
        style_class: "position-outside",
        description: "Main attackers",
    },
    PositionInfo {
        id: "Opposite Hitter",
        display_name: "Opposite Hitter",
        style_class: "position-opposite",
        description: "Secondary attacker",
    },
];

/// Process-wide registry over the volleyball table
pub static REGISTRY: PositionRegistry = PositionRegistry { table: &VOLLEYBALL_POSITIONS };

/// Position Registry - Lookups and display ordering over a position table
///
/// All lookups take raw identifier strings and never fail: anything not in
/// the table falls back to the first row (or rank `-1` for ordering).
#[derive(Debug, Clone, Copy)]
pub struct PositionRegistry {
    /// Rows in canonical order, never empty
    table: &'static [PositionInfo],
}

impl PositionRegistry {
    /// Registry over the built-in volleyball positions
    pub fn volleyball() -> Self {
        Self { table: &VOLLEYBALL_POSITIONS }
    }

    /// Registry over a custom table; the first row becomes the fallback
    pub fn new(table: &'static [PositionInfo]) -> Result<Self, PositionError> {
        if table.is_empty() {
            return Err(PositionError::EmptyTable);
        }
        Ok(Self { table })
    }

    /// All rows in canonical order
    pub fn positions(&self) -> &'static [PositionInfo] {
        self.table
    }

    /// The row substituted for unrecognized identifiers
    pub fn fallback(&self) -> &'static PositionInfo {
        &self.table[0]
    }

    /// Exact lookup, `None` if the identifier is not in the table
    pub fn lookup(&self, position: &str) -> Option<&'static PositionInfo> {
        self.table.iter().find(|info| info.id == position)
    }

    /// Lookup with fallback substitution
    pub fn resolve(&self, position: &str) -> &'static PositionInfo {
        self.lookup(position).unwrap_or_else(|| self.fallback())
    }

    pub fn style_class_of(&self, position: &str) -> &'static str {
        self.resolve(position).style_class
    }

    /// Zero-based rank in the canonical order, or `-1` if not found
    pub fn order_index_of(&self, position: &str) -> i32 {
        self.table.iter().position(|info| info.id == position).map(|rank| rank as i32).unwrap_or(-1)
    }

    pub fn display_name_of(&self, position: &str) -> &'static str {
        self.resolve(position).display_name
    }

    pub fn description_of(&self, position: &str) -> &'static str {
        self.resolve(position).description
    }

    /// Order a roster for display without touching the input
    ///
    /// Unassigned players come first, then ascending position rank. The sort
    /// is stable, so ties keep their roster order. Unrecognized positions rank
    /// `-1` and land ahead of the fallback position within their group.
    pub fn sort_for_display<T: RosterEntry + Clone>(&self, players: &[T]) -> Vec<T> {
        let mut sorted = players.to_vec();
        sorted.sort_by_key(|player| (has_team(player), self.order_index_of(player.position())));

        let unrecognized =
            sorted.iter().filter(|player| self.lookup(player.position()).is_none()).count();
        if unrecognized > 0 {
            debug!(
                "Sorted {} players, {} with unrecognized positions",
                sorted.len(),
                unrecognized
            );
        }

        sorted
    }

    /// (display name, description) pairs in canonical order for help text
    pub fn legend(&self) -> Vec<(&'static str, &'static str)> {
        self.table.iter().map(|info| (info.display_name, info.description)).collect()
    }
}

impl Default for PositionRegistry {
    fn default() -> Self {
        Self::volleyball()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Position};

    fn create_test_players() -> Vec<Player> {
        vec![
            Player::new("Ana", "Opposite Hitter").with_team(1),
            Player::new("Bea", "Setter"),
            Player::new("Cy", "Libero").with_team(2),
        ]
    }

    #[test]
    fn test_table_matches_position_enum() {
        assert_eq!(VOLLEYBALL_POSITIONS.len(), Position::ALL.len());
        for (rank, position) in Position::ALL.iter().enumerate() {
            assert_eq!(position.rank(), Some(rank));
            assert_eq!(VOLLEYBALL_POSITIONS[rank].id, position.id());
        }
    }

    #[test]
    fn test_table_rows_are_complete() {
        for info in REGISTRY.positions() {
            assert!(!info.id.is_empty());
            assert!(!info.display_name.is_empty());
            assert!(info.style_class.starts_with("position-"));
            assert!(!info.description.is_empty());
        }
    }

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(REGISTRY.lookup("Libero").map(|info| info.style_class), Some("position-libero"));
        assert!(REGISTRY.lookup("libero").is_none());
        assert_eq!(REGISTRY.resolve("libero").id, "Undecided");
        assert_eq!(REGISTRY.fallback().id, "Undecided");
    }

    #[test]
    fn test_sort_for_display() {
        let players = create_test_players();
        let sorted = REGISTRY.sort_for_display(&players);

        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Cy", "Ana"]);
    }

    #[test]
    fn test_sort_borrowed_entries() {
        let players = create_test_players();
        let refs: Vec<&Player> = players.iter().collect();

        let sorted = REGISTRY.sort_for_display(&refs);
        assert_eq!(sorted[0].name, "Bea");
        assert!(std::ptr::eq(sorted[0], &players[1]));
    }

    #[test]
    fn test_custom_table() {
        static BEACH: [PositionInfo; 2] = [
            PositionInfo {
                id: "Flex",
                display_name: "Flex",
                style_class: "position-flex",
                description: "Either side",
            },
            PositionInfo {
                id: "Blocker",
                display_name: "Blocker",
                style_class: "position-blocker",
                description: "Net player",
            },
        ];

        let registry = PositionRegistry::new(&BEACH).unwrap();
        assert_eq!(registry.order_index_of("Blocker"), 1);
        assert_eq!(registry.style_class_of("Setter"), "position-flex");
        assert_eq!(PositionRegistry::new(&[]).unwrap_err(), PositionError::EmptyTable);
    }

    #[test]
    fn test_legend() {
        let legend = PositionRegistry::default().legend();
        assert_eq!(legend.len(), 6);
        assert_eq!(legend[0], ("Undecided", "Flexible players (default option)"));
        assert_eq!(legend[3], ("Middle Blocker", "Front-row blockers"));
    }
}
