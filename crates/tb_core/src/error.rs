use thiserror::Error;

/// Why a team generation run was rejected.
///
/// Every variant is terminal for the run: no partial assignment is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Invalid configuration: {num_teams} teams of {players_per_team} players")]
    InvalidConfiguration { num_teams: usize, players_per_team: usize },

    #[error("Player count mismatch: expected {expected}, found {found}")]
    PlayerCountMismatch { expected: usize, found: usize },

    #[error("Duplicate participant: {name}")]
    DuplicateParticipant { name: String },

    #[error("Rating of {name} must be at least 1 in every score")]
    NonPositiveRating { name: String },

    #[error("Not enough attackers or versatile players to seed team {}", team_index + 1)]
    InsufficientAttackers { team_index: usize },

    #[error("Not enough defenders or versatile players to seed team {}", team_index + 1)]
    InsufficientDefenders { team_index: usize },

    #[error("No team has room left for {unplaced} remaining players")]
    CapacityExhausted { unplaced: usize },
}

impl BalanceError {
    /// Stable machine-readable code used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            BalanceError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            BalanceError::PlayerCountMismatch { .. } => "PLAYER_COUNT_MISMATCH",
            BalanceError::DuplicateParticipant { .. } => "DUPLICATE_PARTICIPANT",
            BalanceError::NonPositiveRating { .. } => "INVALID_RATING",
            BalanceError::InsufficientAttackers { .. } => "INSUFFICIENT_ATTACKERS",
            BalanceError::InsufficientDefenders { .. } => "INSUFFICIENT_DEFENDERS",
            BalanceError::CapacityExhausted { .. } => "CAPACITY_EXHAUSTED",
        }
    }

    /// What the person assembling the run can do about it.
    pub fn guidance(&self) -> String {
        match self {
            BalanceError::InvalidConfiguration { .. } => {
                "Choose at least one team with at least two players per team".to_string()
            }
            BalanceError::PlayerCountMismatch { expected, found } if found < expected => {
                format!("Select {} more player(s)", expected - found)
            }
            BalanceError::PlayerCountMismatch { expected, found } => {
                format!("Deselect {} player(s)", found - expected)
            }
            BalanceError::DuplicateParticipant { name } => {
                format!("Give '{}' a distinct name", name)
            }
            BalanceError::NonPositiveRating { name } => {
                format!("Rate '{}' with scores of at least 1", name)
            }
            BalanceError::InsufficientAttackers { .. } => {
                "Add more attack-capable (attacker or versatile) players".to_string()
            }
            BalanceError::InsufficientDefenders { .. } => {
                "Add more defense-capable (defender or versatile) players".to_string()
            }
            BalanceError::CapacityExhausted { .. } => {
                "Player count does not match the team slots; check the configuration".to_string()
            }
        }
    }
}

/// Errors raised while building rosters, guest lists and selections.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Duplicate player name: {name}")]
    DuplicateName { name: String },

    #[error("Unknown player: {name}")]
    UnknownParticipant { name: String },

    #[error("Invalid role for {name}: {role}")]
    InvalidRole { name: String, role: String },

    #[error("Invalid rating for {name}: {reason}")]
    InvalidRating { name: String, reason: String },

    #[error("No guest at index {index} (list has {len})")]
    GuestIndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, BalanceError>;
