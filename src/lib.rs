pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{LocalStorage, MemoryStorage};
pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::TurnEngine, normalizer::NameNormalizer, ranker::FairnessRanker};
pub use domain::model::{
    AssignmentOutcome, CounterRecord, CountersStore, Leaderboard, Name, PositionAssignment,
    RankingPolicy,
};
pub use utils::error::{Result, TurnError};
