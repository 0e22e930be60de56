pub mod events;
pub mod storage;

pub use events::EventPublisher;
pub use storage::{DeploymentRepository, GameRepository};
