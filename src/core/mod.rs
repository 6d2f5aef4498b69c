pub mod counters;
pub mod engine;
pub mod normalizer;
pub mod ranker;

pub use crate::domain::model::{
    AssignmentOutcome, CounterRecord, CountersStore, Leaderboard, Name, PositionAssignment,
    RankingPolicy,
};
pub use crate::domain::ports::{ConfigProvider, CorruptStorePolicy, NormalizationRule, Storage};
pub use crate::utils::error::Result;
