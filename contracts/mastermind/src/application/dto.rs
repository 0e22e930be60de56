use soroban_sdk::{contracttype, Vec};

use crate::domain::GamePhase;

/// Result of giving a clue (returned to frontend)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClueResult {
    /// Which round this clue scored (1-based)
    pub round: u32,
    /// Clue for each position (0=miss, 1=blow, 2=hit)
    pub clue: Vec<u32>,
    /// Whether the guess matched the secret
    pub solved: bool,
    /// Phase after the clue was recorded
    pub phase: GamePhase,
}
