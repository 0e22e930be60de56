#![no_std]

mod application;
mod domain;
mod infrastructure;

// Re-export public types for contract interface
pub use application::ClueResult;
pub use domain::{
    Deployment, DomainError as Error, GameConfig, GamePhase, GameRules, GameState, HistoryLayout,
    HistoryLedger, IdentityScheme, LedgerSlots,
};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use application::{
    ClueHistoryQuery, CreateGameCommand, GetConfigQuery, GetDeploymentQuery, GetPhaseQuery,
    GetRulesQuery, GetStateQuery, GiveClueCommand, GuessHistoryQuery, HelperQuery,
    InitializeCommand, MakeGuessCommand,
};
use infrastructure::storage::DeploymentRepository;

#[contract]
pub struct MastermindContract;

#[contractimpl]
impl MastermindContract {
    /// Fix the identity scheme and history layout for this deployment
    pub fn __constructor(env: Env, identity_scheme: IdentityScheme, history_layout: HistoryLayout) {
        DeploymentRepository::set(
            &env,
            &Deployment {
                identity_scheme,
                history_layout,
            },
        );
    }

    // ==================== Game Commands ====================

    /// Set the attempt budget (5..=15) and reset the game state
    pub fn initialize(env: Env, attempt_budget: u32) -> Result<(), Error> {
        InitializeCommand::execute(&env, attempt_budget)
    }

    /// Codemaster commits the secret combination
    pub fn create_game(
        env: Env,
        codemaster: Address,
        secret_combination: u32,
        salt: BytesN<32>,
    ) -> Result<(), Error> {
        CreateGameCommand::execute(&env, codemaster, secret_combination, salt)
    }

    /// Codebreaker submits a guess. `salt` only matters under the salted
    /// identity scheme.
    pub fn make_guess(
        env: Env,
        codebreaker: Address,
        guess: u32,
        salt: BytesN<32>,
    ) -> Result<(), Error> {
        MakeGuessCommand::execute(&env, codebreaker, guess, salt)
    }

    /// Codemaster reveals the secret and scores the pending guess
    pub fn give_clue(
        env: Env,
        codemaster: Address,
        secret_combination: u32,
        salt: BytesN<32>,
    ) -> Result<ClueResult, Error> {
        GiveClueCommand::execute(&env, codemaster, secret_combination, salt)
    }

    // ==================== Queries ====================

    pub fn get_state(env: Env) -> Result<GameState, Error> {
        GetStateQuery::execute(&env)
    }

    pub fn get_config(env: Env) -> Result<GameConfig, Error> {
        GetConfigQuery::execute(&env)
    }

    pub fn get_phase(env: Env) -> Result<GamePhase, Error> {
        GetPhaseQuery::execute(&env)
    }

    pub fn get_deployment(env: Env) -> Deployment {
        GetDeploymentQuery::execute(&env)
    }

    pub fn get_rules(_env: Env) -> GameRules {
        GetRulesQuery::execute()
    }

    /// Packed guess of a 0-based round
    pub fn get_guess(env: Env, index: u32) -> Result<u32, Error> {
        GuessHistoryQuery::at(&env, index)
    }

    /// Clue of a 0-based round
    pub fn get_clue(env: Env, index: u32) -> Result<Vec<u32>, Error> {
        ClueHistoryQuery::at(&env, index)
    }

    pub fn get_guess_history(env: Env) -> Result<Vec<u32>, Error> {
        GuessHistoryQuery::all(&env)
    }

    pub fn get_clue_history(env: Env) -> Result<Vec<Vec<u32>>, Error> {
        ClueHistoryQuery::all(&env)
    }

    // ==================== Client Helpers ====================

    /// Pack four digits into a combination value
    pub fn encode_combination(_env: Env, digits: Vec<u32>) -> Result<u32, Error> {
        HelperQuery::encode_combination(&digits)
    }

    /// Solution commitment as stored by `create_game`
    pub fn commit_solution(
        env: Env,
        secret_combination: u32,
        salt: BytesN<32>,
    ) -> Result<BytesN<32>, Error> {
        HelperQuery::commit_solution(&env, secret_combination, &salt)
    }

    /// Clue a guess would receive against a solution
    pub fn compute_clue(env: Env, guess: u32, solution: u32) -> Result<Vec<u32>, Error> {
        HelperQuery::compute_clue(&env, guess, solution)
    }
}
