use soroban_sdk::{BytesN, Env, Vec};

use crate::domain::combination::DIGITS;
use crate::domain::identity::commit_solution;
use crate::domain::{
    Clue, Combination, Deployment, DomainError, GameConfig, GamePhase, GameRules, GameState,
};
use crate::infrastructure::{DeploymentRepository, GameRepository};

/// Query: Get game state
pub struct GetStateQuery;

impl GetStateQuery {
    pub fn execute(env: &Env) -> Result<GameState, DomainError> {
        GameRepository::load_state(env)
    }
}

/// Query: Get game configuration
pub struct GetConfigQuery;

impl GetConfigQuery {
    pub fn execute(env: &Env) -> Result<GameConfig, DomainError> {
        GameRepository::load_config(env)
    }
}

/// Query: Get the current phase
pub struct GetPhaseQuery;

impl GetPhaseQuery {
    pub fn execute(env: &Env) -> Result<GamePhase, DomainError> {
        let config = GameRepository::load_config(env)?;
        let state = GameRepository::load_state(env)?;
        Ok(state.phase(&config))
    }
}

/// Query: Get deployment settings
pub struct GetDeploymentQuery;

impl GetDeploymentQuery {
    pub fn execute(env: &Env) -> Deployment {
        DeploymentRepository::get(env)
    }
}

/// Query: Get game rules
pub struct GetRulesQuery;

impl GetRulesQuery {
    pub fn execute() -> GameRules {
        GameRules::default()
    }
}

/// Query: Read the guess history
pub struct GuessHistoryQuery;

impl GuessHistoryQuery {
    pub fn at(env: &Env, index: u32) -> Result<u32, DomainError> {
        GameRepository::load_state(env)?.guess_at(env, index)
    }

    pub fn all(env: &Env) -> Result<Vec<u32>, DomainError> {
        GameRepository::load_state(env)?.guess_history.unpack(env)
    }
}

/// Query: Read the clue history
pub struct ClueHistoryQuery;

impl ClueHistoryQuery {
    pub fn at(env: &Env, index: u32) -> Result<Vec<u32>, DomainError> {
        let clue = GameRepository::load_state(env)?.clue_at(env, index)?;
        Ok(clue.to_vec(env))
    }

    /// Every slot, deserialized; unplayed rounds read as all misses
    pub fn all(env: &Env) -> Result<Vec<Vec<u32>>, DomainError> {
        let serialized = GameRepository::load_state(env)?.clue_history.unpack(env)?;
        let mut clues = Vec::new(env);
        for value in serialized.iter() {
            clues.push_back(Clue::deserialize(value)?.to_vec(env));
        }
        Ok(clues)
    }
}

/// Query: Client-side helpers that touch no storage
pub struct HelperQuery;

impl HelperQuery {
    pub fn encode_combination(digits: &Vec<u32>) -> Result<u32, DomainError> {
        if digits.len() != DIGITS as u32 {
            return Err(DomainError::MalformedCombination);
        }

        let mut raw = [0u32; DIGITS];
        for (i, slot) in raw.iter_mut().enumerate() {
            *slot = digits
                .get(i as u32)
                .ok_or(DomainError::MalformedCombination)?;
        }
        Ok(Combination::from_digits(raw)?.encode())
    }

    pub fn commit_solution(
        env: &Env,
        secret_combination: u32,
        salt: &BytesN<32>,
    ) -> Result<BytesN<32>, DomainError> {
        let secret = Combination::parse(secret_combination)?;
        Ok(commit_solution(env, &secret, salt))
    }

    pub fn compute_clue(env: &Env, guess: u32, solution: u32) -> Result<Vec<u32>, DomainError> {
        let guess = Combination::parse(guess)?;
        let solution = Combination::parse(solution)?;
        Ok(Clue::compute(&guess, &solution)?.to_vec(env))
    }
}
