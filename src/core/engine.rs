use crate::core::counters::CounterRepository;
use crate::core::normalizer::NameNormalizer;
use crate::core::ranker::FairnessRanker;
use crate::domain::model::{AssignmentOutcome, Leaderboard, Name, RankingPolicy};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{Result, TurnError};

/// Runs one user action at a time against the counters store:
/// normalize, load, rank, save.
pub struct TurnEngine<S: Storage> {
    normalizer: NameNormalizer,
    ranker: FairnessRanker,
    repository: CounterRepository<S>,
}

impl<S: Storage> TurnEngine<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Result<Self> {
        let normalizer = NameNormalizer::new(&config.normalization_rules())?;
        let ranker = FairnessRanker::new(config.ranking_policy());
        let repository =
            CounterRepository::new(storage, config.store_key(), config.corrupt_store_policy());

        tracing::debug!(
            "Engine configured: policy={}, key={}, on_corrupt={:?}",
            ranker.policy(),
            repository.key(),
            config.corrupt_store_policy()
        );

        Ok(Self::from_parts(normalizer, ranker, repository))
    }

    pub fn from_parts(
        normalizer: NameNormalizer,
        ranker: FairnessRanker,
        repository: CounterRepository<S>,
    ) -> Self {
        Self {
            normalizer,
            ranker,
            repository,
        }
    }

    pub fn policy(&self) -> RankingPolicy {
        self.ranker.policy()
    }

    pub fn storage(&self) -> &S {
        self.repository.storage()
    }

    pub fn parse(&self, raw_text: &str) -> Vec<Name> {
        self.normalizer.normalize(raw_text)
    }

    /// Fails with `EmptyInput` before the store is read when no name survives
    /// normalization, so a rejected request never touches persisted state.
    pub fn assign(&self, raw_text: &str) -> Result<AssignmentOutcome> {
        let names = self.parse(raw_text);
        if names.is_empty() {
            tracing::info!("No valid names in input; nothing assigned");
            return Err(TurnError::EmptyInput);
        }
        tracing::info!("Assigning positions to {} names ({})", names.len(), self.policy());

        let mut counters = self.repository.load()?;
        let assignment = self.ranker.rank(&names, &mut counters)?;
        self.repository.save(&counters)?;

        if let Some(first) = assignment.name_at(1) {
            tracing::info!("Position 1 goes to {}", first);
        }

        Ok(AssignmentOutcome {
            assignment,
            counters,
        })
    }

    pub fn leaderboard(&self) -> Result<Leaderboard> {
        let counters = self.repository.load()?;
        Ok(self.ranker.leaderboard(&counters))
    }

    /// Irreversible; callers confirm with the user first.
    pub fn reset(&self) -> Result<()> {
        self.repository.clear()?;
        tracing::info!("All counters cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::config::rules::default_rules;
    use crate::core::counters::DEFAULT_STORE_KEY;
    use crate::domain::ports::{CorruptStorePolicy, NormalizationRule};

    struct MockConfig {
        policy: RankingPolicy,
        on_corrupt: CorruptStorePolicy,
    }

    impl MockConfig {
        fn new(policy: RankingPolicy) -> Self {
            Self {
                policy,
                on_corrupt: CorruptStorePolicy::Discard,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn store_key(&self) -> &str {
            DEFAULT_STORE_KEY
        }

        fn ranking_policy(&self) -> RankingPolicy {
            self.policy
        }

        fn corrupt_store_policy(&self) -> CorruptStorePolicy {
            self.on_corrupt
        }

        fn normalization_rules(&self) -> Vec<NormalizationRule> {
            default_rules()
        }
    }

    fn engine(storage: MemoryStorage, policy: RankingPolicy) -> TurnEngine<MemoryStorage> {
        TurnEngine::new(storage, &MockConfig::new(policy)).unwrap()
    }

    #[test]
    fn test_assign_normalizes_then_ranks() {
        let engine = engine(MemoryStorage::new(), RankingPolicy::LeastUsedFirst);

        let outcome = engine.assign("1. Zoe\n2. amit ji\n3. Zoe").unwrap();
        assert_eq!(outcome.assignment.len(), 2);
        assert!(!outcome.assignment.is_empty());
        let ranked = outcome.assignment.by_rank();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[&1].as_str(), "Amit");
        assert_eq!(ranked[&2].as_str(), "Zoe");
        assert_eq!(outcome.counters.get("Amit").unwrap().first, 1);
    }

    #[test]
    fn test_assign_persists_between_calls() {
        let storage = MemoryStorage::new();
        let engine = engine(storage.clone(), RankingPolicy::LeastUsedFirst);

        engine.assign("Amit\nZoe\nBela").unwrap();
        let saved = engine.storage().get(DEFAULT_STORE_KEY).unwrap();
        assert_eq!(storage.get(DEFAULT_STORE_KEY).unwrap(), saved);
        let second = engine.assign("Amit\nZoe\nBela").unwrap();

        // Zoe sat out of the top two last time
        assert_eq!(second.assignment.name_at(1).unwrap().as_str(), "Zoe");
        assert!(storage.get(DEFAULT_STORE_KEY).is_some());
    }

    #[test]
    fn test_empty_input_touches_nothing() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORE_KEY, b"{not json");
        let engine = engine(storage.clone(), RankingPolicy::InputOrderPoints);

        for raw in ["", "\n\n", "12\n-- \n🎉🎉"] {
            assert!(matches!(engine.assign(raw), Err(TurnError::EmptyInput)));
        }
        assert_eq!(storage.get(DEFAULT_STORE_KEY).unwrap(), b"{not json");
    }

    #[test]
    fn test_halt_on_corrupt_store_keeps_blob() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORE_KEY, b"[1, 2]");
        let config = MockConfig {
            policy: RankingPolicy::LeastUsedFirst,
            on_corrupt: CorruptStorePolicy::Halt,
        };
        let engine = TurnEngine::new(storage.clone(), &config).unwrap();

        assert!(matches!(
            engine.assign("Amit"),
            Err(TurnError::CorruptStore { .. })
        ));
        assert!(matches!(
            engine.leaderboard(),
            Err(TurnError::CorruptStore { .. })
        ));
        assert_eq!(storage.get(DEFAULT_STORE_KEY).unwrap(), b"[1, 2]");
    }

    #[test]
    fn test_discard_on_corrupt_store_starts_fresh() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORE_KEY, b"[1, 2]");
        let engine = engine(storage.clone(), RankingPolicy::LeastUsedFirst);

        assert!(engine.leaderboard().unwrap().is_no_data());
        let outcome = engine.assign("Amit").unwrap();
        assert_eq!(outcome.counters.len(), 1);
        assert_ne!(storage.get(DEFAULT_STORE_KEY).unwrap(), b"[1, 2]");
    }

    #[test]
    fn test_reset_then_leaderboard_has_no_data() {
        let engine = engine(MemoryStorage::new(), RankingPolicy::InputOrderPoints);

        engine.assign("Amit\nZoe").unwrap();
        assert_eq!(engine.leaderboard().unwrap().standings().len(), 2);

        engine.reset().unwrap();
        assert!(engine.leaderboard().unwrap().is_no_data());
    }
}
