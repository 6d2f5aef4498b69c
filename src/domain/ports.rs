use crate::domain::model::RankingPolicy;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Opaque key-value persistence for the counters blob.
pub trait Storage {
    /// `Ok(None)` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, key: &str, data: &[u8]) -> Result<()>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// What to do when the stored blob cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptStorePolicy {
    /// Treat the store as empty; history is lost on the next save.
    #[default]
    Discard,
    /// Report `CorruptStore` and leave the blob alone.
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePosition {
    Leading,
    Trailing,
}

/// A decorative token removed from the start or the end of a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationRule {
    pub token: String,
    pub position: RulePosition,
}

impl NormalizationRule {
    pub fn leading(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            position: RulePosition::Leading,
        }
    }

    pub fn trailing(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            position: RulePosition::Trailing,
        }
    }
}

pub trait ConfigProvider {
    fn store_key(&self) -> &str;
    fn ranking_policy(&self) -> RankingPolicy;
    fn corrupt_store_policy(&self) -> CorruptStorePolicy;
    fn normalization_rules(&self) -> Vec<NormalizationRule>;
}
