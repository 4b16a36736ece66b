//! Position Registry - Volleyball positions for roster display
//!
//! This crate holds the fixed table of volleyball positions (display names,
//! canonical order, style classes, help text) and the helpers the roster
//! screens use to look positions up and order players for display.
//!
//! Every lookup is total: an unrecognized position resolves to `Undecided`,
//! or to rank `-1` when ordering.

pub mod config;
pub mod registry;
pub mod types;


pub use config::PreviewConfig;
pub use registry::{PositionRegistry, REGISTRY, VOLLEYBALL_POSITIONS};
pub use types::{has_team, Player, Position, PositionError, PositionInfo, RosterEntry};

/// Style class token for a position, `Undecided`'s token if unrecognized
pub fn style_class_of(position: &str) -> &'static str {
    REGISTRY.style_class_of(position)
}

/// Rank of a position in the canonical order, `-1` if unrecognized
pub fn order_index_of(position: &str) -> i32 {
    REGISTRY.order_index_of(position)
}

/// Display name for a position, `Undecided`'s if unrecognized
pub fn display_name_of(position: &str) -> &'static str {
    REGISTRY.display_name_of(position)
}

/// Help text for a position, `Undecided`'s if unrecognized
pub fn description_of(position: &str) -> &'static str {
    REGISTRY.description_of(position)
}

/// Players ordered for display: unassigned first, then by position rank
pub fn sort_for_display<T: RosterEntry + Clone>(players: &[T]) -> Vec<T> {
    REGISTRY.sort_for_display(players)
}
