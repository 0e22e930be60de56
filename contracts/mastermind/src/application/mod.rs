mod commands;
mod dto;
mod queries;

pub use commands::{CreateGameCommand, GiveClueCommand, InitializeCommand, MakeGuessCommand};
pub use dto::ClueResult;
pub use queries::{
    ClueHistoryQuery, GetConfigQuery, GetDeploymentQuery, GetPhaseQuery, GetRulesQuery,
    GetStateQuery, GuessHistoryQuery, HelperQuery,
};
