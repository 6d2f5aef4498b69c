use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A canonical, display-ready name. Uniqueness is by this exact string.
///
/// Conversions from `&str`/`String` wrap the text as-is; use
/// `NameNormalizer` to turn free text into a canonical name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive alphabetical order, falling back to exact order so
    /// the comparison stays total.
    pub fn alphabetical_cmp(&self, other: &Name) -> Ordering {
        self.0
            .to_lowercase()
            .cmp(&other.0.to_lowercase())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name(value.to_string())
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name(value)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    pub first: u64,
    pub second: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
}

impl CounterRecord {
    pub fn top_two_total(&self) -> u64 {
        self.first.saturating_add(self.second)
    }

    pub fn points_or_zero(&self) -> u64 {
        self.points.unwrap_or(0)
    }
}

/// Every known name with its counters; the only persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountersStore {
    records: BTreeMap<Name, CounterRecord>,
}

impl CountersStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&CounterRecord> {
        self.records.get(name)
    }

    /// Returns the record for `name`, creating a zeroed one on first sight.
    pub fn record_mut(&mut self, name: &Name) -> &mut CounterRecord {
        self.records.entry(name.clone()).or_default()
    }

    pub fn insert(&mut self, name: Name, record: CounterRecord) -> Option<CounterRecord> {
        self.records.insert(name, record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &CounterRecord)> {
        self.records.iter()
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum RankingPolicy {
    /// Names with the fewest first/second placements go first.
    #[default]
    LeastUsedFirst,
    /// Input order is the ranking; positions earn points.
    InputOrderPoints,
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankingPolicy::LeastUsedFirst => write!(f, "least-used-first"),
            RankingPolicy::InputOrderPoints => write!(f, "input-order-points"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// 1-based.
    pub position: usize,
    pub name: Name,
    pub points_awarded: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionAssignment {
    pub policy: RankingPolicy,
    pub placements: Vec<Placement>,
}

impl PositionAssignment {
    pub fn name_at(&self, position: usize) -> Option<&Name> {
        self.placements
            .iter()
            .find(|p| p.position == position)
            .map(|p| &p.name)
    }

    pub fn names(&self) -> Vec<&Name> {
        self.placements.iter().map(|p| &p.name).collect()
    }

    pub fn by_rank(&self) -> BTreeMap<usize, &Name> {
        self.placements
            .iter()
            .map(|p| (p.position, &p.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prize {
    Gold,
    Silver,
    Bronze,
}

impl Prize {
    pub fn for_rank(rank: usize) -> Option<Prize> {
        match rank {
            1 => Some(Prize::Gold),
            2 => Some(Prize::Silver),
            3 => Some(Prize::Bronze),
            _ => None,
        }
    }

    pub fn medal(&self) -> &'static str {
        match self {
            Prize::Gold => "🥇",
            Prize::Silver => "🥈",
            Prize::Bronze => "🥉",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub name: Name,
    pub record: CounterRecord,
    pub prize: Option<Prize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaderboard {
    /// Nothing has been assigned yet, or the store was reset.
    NoData,
    Standings(Vec<Standing>),
}

impl Leaderboard {
    pub fn standings(&self) -> &[Standing] {
        match self {
            Leaderboard::NoData => &[],
            Leaderboard::Standings(standings) => standings,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Leaderboard::NoData)
    }
}

/// What a successful `assign` hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub assignment: PositionAssignment,
    pub counters: CountersStore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_points_omits_field() {
        let mut store = CountersStore::new();
        store.insert(
            Name::from("Amit"),
            CounterRecord {
                first: 2,
                second: 1,
                points: None,
            },
        );

        let json = String::from_utf8(store.to_json().unwrap()).unwrap();
        assert_eq!(json, r#"{"Amit":{"first":2,"second":1}}"#);
    }

    #[test]
    fn test_store_round_trip() {
        let mut store = CountersStore::new();
        store.insert(
            Name::from("Zoe"),
            CounterRecord {
                first: 0,
                second: 3,
                points: Some(41),
            },
        );
        store.insert(Name::from("Amit"), CounterRecord::default());

        let bytes = store.to_json().unwrap();
        let loaded = CountersStore::from_json(&bytes).unwrap();
        assert_eq!(loaded, store);
        assert_eq!(loaded.to_json().unwrap(), bytes);
    }

    #[test]
    fn test_reads_blob_written_by_older_tool() {
        let blob = br#"{"Ravi": {"first": 3, "second": 0}, "Amit": {"first": 1, "second": 2, "points": 22}}"#;
        let store = CountersStore::from_json(blob).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("Ravi").unwrap().points, None);
        assert_eq!(store.get("Amit").unwrap().points, Some(22));
    }

    #[test]
    fn test_alphabetical_cmp_ignores_case() {
        let lower = Name::from("amit");
        let upper = Name::from("Zoe");
        assert_eq!(lower.alphabetical_cmp(&upper), Ordering::Less);
        assert_eq!(
            Name::from("Amit").alphabetical_cmp(&Name::from("amit")),
            Ordering::Less
        );
    }

    #[test]
    fn test_prize_labels_top_three_only() {
        assert_eq!(Prize::for_rank(1), Some(Prize::Gold));
        assert_eq!(Prize::for_rank(3), Some(Prize::Bronze));
        assert_eq!(Prize::for_rank(4), None);
    }
}
