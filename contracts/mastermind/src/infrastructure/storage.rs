use soroban_sdk::{contracttype, Env};

use crate::domain::{Deployment, DomainError, GameConfig, GameState};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Deploy-time protocol variants
    Deployment,
    /// Per-game configuration
    Config,
    /// Game state
    State,
}

/// TTL for game storage (~30 days)
pub const STATE_TTL_LEDGERS: u32 = 518_400;

/// Repository for the single game hosted by this contract
pub struct GameRepository;

impl GameRepository {
    /// Checks if a game was initialized
    pub fn exists(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::State)
    }

    /// Loads the current game state
    pub fn load_state(env: &Env) -> Result<GameState, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::State)
            .ok_or(DomainError::NotInitialized)
    }

    /// Loads the immutable game configuration
    pub fn load_config(env: &Env) -> Result<GameConfig, DomainError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(DomainError::NotInitialized)
    }

    /// Stores the configuration together with the initial state
    pub fn create(env: &Env, config: &GameConfig, state: &GameState) {
        env.storage().instance().set(&DataKey::Config, config);
        Self::save_state(env, state);
    }

    /// Saves the game state with TTL extension
    pub fn save_state(env: &Env, state: &GameState) {
        env.storage().instance().set(&DataKey::State, state);
        env.storage()
            .instance()
            .extend_ttl(STATE_TTL_LEDGERS, STATE_TTL_LEDGERS);
    }
}

/// Repository for deployment settings
pub struct DeploymentRepository;

impl DeploymentRepository {
    pub fn get(env: &Env) -> Deployment {
        env.storage()
            .instance()
            .get(&DataKey::Deployment)
            .expect("Deployment not set")
    }

    pub fn set(env: &Env, deployment: &Deployment) {
        env.storage().instance().set(&DataKey::Deployment, deployment);
    }
}
