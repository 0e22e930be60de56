use soroban_sdk::{Address, BytesN, Env};

use crate::domain::{DomainError, GameConfig, GameState};
use crate::infrastructure::{DeploymentRepository, EventPublisher, GameRepository};

use super::dto::ClueResult;

/// Command: Initialize the game with an attempt budget
pub struct InitializeCommand;

impl InitializeCommand {
    pub fn execute(env: &Env, attempt_budget: u32) -> Result<(), DomainError> {
        if GameRepository::exists(env) {
            return Err(DomainError::AlreadyInitialized);
        }

        let deployment = DeploymentRepository::get(env);
        let config = GameConfig::new(attempt_budget)?;
        let state = GameState::new(env, &config, deployment.history_layout)?;

        GameRepository::create(env, &config, &state);
        EventPublisher::game_initialized(env, attempt_budget);
        Ok(())
    }
}

/// Command: Codemaster commits the secret combination
pub struct CreateGameCommand;

impl CreateGameCommand {
    pub fn execute(
        env: &Env,
        codemaster: Address,
        secret_combination: u32,
        salt: BytesN<32>,
    ) -> Result<(), DomainError> {
        codemaster.require_auth();

        let deployment = DeploymentRepository::get(env);
        let state = GameRepository::load_state(env)?;
        let next = state.create_game(
            env,
            deployment.identity_scheme,
            &codemaster,
            secret_combination,
            &salt,
        )?;

        GameRepository::save_state(env, &next);
        EventPublisher::game_created(env, &codemaster);
        Ok(())
    }
}

/// Command: Codebreaker submits a guess
pub struct MakeGuessCommand;

impl MakeGuessCommand {
    pub fn execute(
        env: &Env,
        codebreaker: Address,
        guess: u32,
        salt: BytesN<32>,
    ) -> Result<(), DomainError> {
        codebreaker.require_auth();

        let deployment = DeploymentRepository::get(env);
        let config = GameRepository::load_config(env)?;
        let state = GameRepository::load_state(env)?;
        let round = state.round();
        let next = state.make_guess(
            env,
            &config,
            deployment.identity_scheme,
            &codebreaker,
            guess,
            &salt,
        )?;

        GameRepository::save_state(env, &next);
        EventPublisher::guess_made(env, &codebreaker, round, guess);
        Ok(())
    }
}

/// Command: Codemaster reveals the secret to score the pending guess
pub struct GiveClueCommand;

impl GiveClueCommand {
    pub fn execute(
        env: &Env,
        codemaster: Address,
        secret_combination: u32,
        salt: BytesN<32>,
    ) -> Result<ClueResult, DomainError> {
        codemaster.require_auth();

        let deployment = DeploymentRepository::get(env);
        let config = GameRepository::load_config(env)?;
        let state = GameRepository::load_state(env)?;
        let round = state.round();
        let (next, clue) = state.give_clue(
            env,
            &config,
            deployment.identity_scheme,
            &codemaster,
            secret_combination,
            &salt,
        )?;

        GameRepository::save_state(env, &next);

        let clue = clue.to_vec(env);
        EventPublisher::clue_given(env, round, clue.clone(), next.solved);

        Ok(ClueResult {
            round,
            clue,
            solved: next.solved,
            phase: next.phase(&config),
        })
    }
}
