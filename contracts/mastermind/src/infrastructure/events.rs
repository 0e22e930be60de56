use soroban_sdk::{contractevent, Address, Env, Vec};

#[contractevent]
pub struct EvGameInitialized {
    pub attempt_budget: u32,
}

#[contractevent]
pub struct EvGameCreated {
    pub codemaster: Address,
}

#[contractevent]
pub struct EvGuessMade {
    pub codebreaker: Address,
    pub round: u32,
    pub guess: u32,
}

/// Emitted once per clue; `solved` marks the winning round.
#[contractevent]
pub struct EvClueGiven {
    pub round: u32,
    pub clue: Vec<u32>,
    pub solved: bool,
}

/// Publishes protocol events after a transition has been saved
pub struct EventPublisher;

impl EventPublisher {
    pub fn game_initialized(env: &Env, attempt_budget: u32) {
        EvGameInitialized { attempt_budget }.publish(env);
    }

    pub fn game_created(env: &Env, codemaster: &Address) {
        EvGameCreated {
            codemaster: codemaster.clone(),
        }
        .publish(env);
    }

    pub fn guess_made(env: &Env, codebreaker: &Address, round: u32, guess: u32) {
        EvGuessMade {
            codebreaker: codebreaker.clone(),
            round,
            guess,
        }
        .publish(env);
    }

    pub fn clue_given(env: &Env, round: u32, clue: Vec<u32>, solved: bool) {
        EvClueGiven {
            round,
            clue,
            solved,
        }
        .publish(env);
    }
}
