use soroban_sdk::{contracttype, Address, BytesN, Env};

use super::clue::Clue;
use super::combination::{Combination, DIGITS};
use super::errors::DomainError;
use super::identity::{
    commit_solution, derive_identity, IdentityScheme, PlayerId, SolutionCommitment,
};
use super::ledger::{HistoryLayout, HistoryLedger, CLUE_SLOT_BITS, COMBINATION_SLOT_BITS};
use super::select::select;

/// Smallest allowed attempt budget
pub const MIN_ATTEMPTS: u32 = 5;

/// Largest allowed attempt budget
pub const MAX_ATTEMPTS: u32 = 15;

/// Game lifecycle phases, derived from the stored state
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GamePhase {
    /// Initialized, waiting for the codemaster to commit a secret
    AwaitingSecret,
    /// Waiting for the codebreaker's guess of round k
    AwaitingGuess(u32),
    /// Waiting for the codemaster's clue of round k
    AwaitingClue(u32),
    /// A guess scored all hits
    Solved,
    /// Every round was played without a solve
    Exhausted,
}

/// Per-game configuration (immutable after initialization)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig {
    pub attempt_budget: u32,
}

impl GameConfig {
    pub fn new(attempt_budget: u32) -> Result<Self, DomainError> {
        if !(MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&attempt_budget) {
            return Err(DomainError::AttemptBudgetOutOfRange);
        }
        Ok(Self { attempt_budget })
    }

    /// Highest turn counter at which a clue can still be given
    pub fn turn_limit(&self) -> u32 {
        self.attempt_budget * 2
    }
}

/// Protocol variants chosen once per deployment
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub identity_scheme: IdentityScheme,
    pub history_layout: HistoryLayout,
}

/// Game rules (static protocol constants)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameRules {
    pub digits: u32,
    pub min_attempts: u32,
    pub max_attempts: u32,
    pub combination_slot_bits: u32,
    pub clue_slot_bits: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            digits: DIGITS as u32,
            min_attempts: MIN_ATTEMPTS,
            max_attempts: MAX_ATTEMPTS,
            combination_slot_bits: COMBINATION_SLOT_BITS,
            clue_slot_bits: CLUE_SLOT_BITS,
        }
    }
}

/// Game state aggregate.
///
/// Transitions take `&self` and return the next state; a rejected move
/// leaves the caller holding the unchanged original. `turn_counter` is the
/// version of the record: it grows by exactly one per accepted move.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    pub turn_counter: u32,
    pub solved: bool,
    pub codemaster_id: Option<PlayerId>,
    pub codebreaker_id: Option<PlayerId>,
    pub solution_commitment: Option<SolutionCommitment>,
    pub guess_history: HistoryLedger,
    pub clue_history: HistoryLedger,
}

impl GameState {
    /// Fresh state with empty histories sized to the attempt budget
    pub fn new(
        env: &Env,
        config: &GameConfig,
        layout: HistoryLayout,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            turn_counter: 0,
            solved: false,
            codemaster_id: None,
            codebreaker_id: None,
            solution_commitment: None,
            guess_history: HistoryLedger::new(
                env,
                layout,
                config.attempt_budget,
                COMBINATION_SLOT_BITS,
            )?,
            clue_history: HistoryLedger::new(env, layout, config.attempt_budget, CLUE_SLOT_BITS)?,
        })
    }

    pub fn phase(&self, config: &GameConfig) -> GamePhase {
        if self.turn_counter == 0 {
            GamePhase::AwaitingSecret
        } else if self.solved {
            GamePhase::Solved
        } else if self.turn_counter > config.turn_limit() {
            GamePhase::Exhausted
        } else if self.is_codebreaker_turn() {
            GamePhase::AwaitingGuess(self.round())
        } else {
            GamePhase::AwaitingClue(self.round())
        }
    }

    /// 1-based round of the current turn
    pub fn round(&self) -> u32 {
        (self.turn_counter + 1) / 2
    }

    /// Commits the secret and binds the codemaster
    pub fn create_game(
        &self,
        env: &Env,
        scheme: IdentityScheme,
        codemaster: &Address,
        secret_combination: u32,
        salt: &BytesN<32>,
    ) -> Result<Self, DomainError> {
        if self.turn_counter != 0 {
            return Err(DomainError::AlreadyCreated);
        }

        let secret = Combination::parse(secret_combination)?;

        Ok(Self {
            turn_counter: 1,
            codemaster_id: Some(derive_identity(env, scheme, codemaster, salt)),
            solution_commitment: Some(commit_solution(env, &secret, salt)),
            ..self.clone()
        })
    }

    /// Records the codebreaker's guess for the current round
    pub fn make_guess(
        &self,
        env: &Env,
        config: &GameConfig,
        scheme: IdentityScheme,
        codebreaker: &Address,
        guess: u32,
        salt: &BytesN<32>,
    ) -> Result<Self, DomainError> {
        self.ensure_not_finished(config)?;

        if !self.is_codebreaker_turn() {
            return Err(DomainError::OutOfSequence);
        }
        // First guess binds the codebreaker; later guesses must match it.
        let computed_id = derive_identity(env, scheme, codebreaker, salt);
        let is_first_guess = self.turn_counter == 1;
        let codebreaker_id = select(
            is_first_guess,
            Some(computed_id.clone()),
            self.codebreaker_id.clone(),
        );
        if codebreaker_id.as_ref() != Some(&computed_id) {
            return Err(DomainError::WrongCodebreaker);
        }

        let guess = Combination::parse(guess)?;
        let index = (self.turn_counter - 1) / 2;
        let guess_history = self.guess_history.write_at(env, index, guess.encode())?;

        Ok(Self {
            turn_counter: self.turn_counter + 1,
            codebreaker_id,
            guess_history,
            ..self.clone()
        })
    }

    /// Reveals the secret to score the pending guess
    pub fn give_clue(
        &self,
        env: &Env,
        config: &GameConfig,
        scheme: IdentityScheme,
        codemaster: &Address,
        secret_combination: u32,
        salt: &BytesN<32>,
    ) -> Result<(Self, Clue), DomainError> {
        self.ensure_not_finished(config)?;

        if !self.is_codemaster_turn() {
            return Err(DomainError::OutOfSequence);
        }

        let computed_id = derive_identity(env, scheme, codemaster, salt);
        if self.codemaster_id.as_ref() != Some(&computed_id) {
            return Err(DomainError::WrongCodemaster);
        }

        let solution = Combination::decode(secret_combination)?;
        let computed_commitment = commit_solution(env, &solution, salt);
        if self.solution_commitment.as_ref() != Some(&computed_commitment) {
            return Err(DomainError::SolutionMismatch);
        }

        let index = self.turn_counter / 2 - 1;
        let guess = Combination::decode(self.guess_history.read_at(env, index)?)?;
        let clue = Clue::compute(&guess, &solution)?;
        let clue_history = self.clue_history.write_at(env, index, clue.serialize())?;

        let next = Self {
            turn_counter: self.turn_counter + 1,
            solved: clue.is_solved(),
            clue_history,
            ..self.clone()
        };
        Ok((next, clue))
    }

    /// Packed guess at a 0-based round index
    pub fn guess_at(&self, env: &Env, index: u32) -> Result<u32, DomainError> {
        self.guess_history.read_at(env, index)
    }

    /// Clue at a 0-based round index
    pub fn clue_at(&self, env: &Env, index: u32) -> Result<Clue, DomainError> {
        Clue::deserialize(self.clue_history.read_at(env, index)?)
    }

    // Validation helpers

    fn ensure_not_finished(&self, config: &GameConfig) -> Result<(), DomainError> {
        if self.solved {
            return Err(DomainError::AlreadySolved);
        }
        if self.turn_counter > config.turn_limit() {
            return Err(DomainError::AttemptsExhausted);
        }
        Ok(())
    }

    fn is_codebreaker_turn(&self) -> bool {
        self.turn_counter % 2 == 1
    }

    fn is_codemaster_turn(&self) -> bool {
        self.turn_counter != 0 && self.turn_counter % 2 == 0
    }
}
