use anyhow::{Context, Result};
use position_registry::{
    has_team, sort_for_display, style_class_of, Player, PreviewConfig, RosterEntry, REGISTRY,
};
use tracing::{info, warn};

fn sample_roster() -> Vec<Player> {
    vec![
        Player::new("Ana Souza", "Opposite Hitter").with_team(1),
        Player::new("Bea Lindqvist", "Setter"),
        Player::new("Cy Moreau", "Libero").with_team(2),
        Player::new("Dee Park", "Middle Blocker").with_team(1),
        Player::new("Eli Novak", "Outside Hitter"),
        Player::new("Fay Okafor", "Undecided"),
    ]
}

fn load_roster(config: &PreviewConfig) -> Result<Vec<Player>> {
    let Some(path) = &config.roster_file else {
        info!("No ROSTER_FILE set, using sample roster");
        return Ok(sample_roster());
    };

    info!("Loading roster from: {:?}", path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let players: Vec<Player> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))?;

    info!("Loaded {} players", players.len());
    Ok(players)
}

fn main() -> Result<()> {
    let config = PreviewConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt().with_max_level(config.max_level()).init();

    let players = load_roster(&config)?;

    let unrecognized: Vec<&Player> =
        players.iter().filter(|p| REGISTRY.lookup(p.position()).is_none()).collect();
    for player in &unrecognized {
        warn!("{} has unrecognized position '{}', shown as Undecided", player.name, player.position);
    }

    println!("\nPositions:");
    for (name, description) in REGISTRY.legend() {
        println!("  {name:16} {description}");
    }

    println!("\nRoster:");
    println!("Name                 Position         Team  Class");
    println!("------------------------------------------------------------");

    for player in sort_for_display(&players) {
        let team = match player.team_number() {
            Some(team) => team.to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:20} {:16} {:5} {}",
            player.name,
            REGISTRY.display_name_of(player.position()),
            team,
            style_class_of(player.position())
        );
    }

    let assigned = players.iter().filter(|p| has_team(*p)).count();
    info!(
        "Previewed {} players ({} assigned, {} unassigned)",
        players.len(),
        assigned,
        players.len() - assigned
    );
    Ok(())
}
