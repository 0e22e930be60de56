pub mod clue;
pub mod combination;
mod errors;
pub mod game;
pub mod identity;
pub mod ledger;
mod select;

pub use clue::Clue;
pub use combination::Combination;
pub use errors::DomainError;
pub use game::{Deployment, GameConfig, GamePhase, GameRules, GameState};
pub use identity::IdentityScheme;
pub use ledger::{HistoryLayout, HistoryLedger, LedgerSlots};
