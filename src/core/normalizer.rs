use crate::domain::model::Name;
use crate::domain::ports::{NormalizationRule, RulePosition};
use crate::utils::error::{Result, TurnError};
use regex::{Captures, Regex};
use std::collections::HashSet;

const WORD_START: &str = r"\b\w";
const LEADING_NOISE: &str = r"^[\d\W]+\s*";

/// Turns pasted free text into an ordered list of unique canonical names.
///
/// A single canonicalization pass lowercases and trims the line, tries every
/// leading rule once (table order), then every trailing rule once, title-cases
/// each word and drops leading numbering, bullets or emoji. Passes repeat until
/// the text stops changing, so `"1. Mr John"` and `"John"` land on the same
/// name and canonicalizing a canonical name is a no-op.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    leading: Vec<Regex>,
    trailing: Vec<Regex>,
    word_start: Regex,
    leading_noise: Regex,
}

impl NameNormalizer {
    pub fn new(rules: &[NormalizationRule]) -> Result<Self> {
        let mut leading = Vec::new();
        let mut trailing = Vec::new();

        for rule in rules {
            let token = regex::escape(&rule.token);
            match rule.position {
                RulePosition::Leading => {
                    leading.push(compile(&format!(r"(?i)^{}\s+", token), &rule.token)?)
                }
                RulePosition::Trailing => {
                    trailing.push(compile(&format!(r"(?i)\s+{}$", token), &rule.token)?)
                }
            }
        }

        tracing::debug!(
            "Normalizer ready with {} leading and {} trailing rules",
            leading.len(),
            trailing.len()
        );

        Ok(Self {
            leading,
            trailing,
            word_start: compile(WORD_START, WORD_START)?,
            leading_noise: compile(LEADING_NOISE, LEADING_NOISE)?,
        })
    }

    /// One name per line, first occurrence wins, empty results dropped.
    pub fn normalize(&self, raw_text: &str) -> Vec<Name> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for line in raw_text.split('\n') {
            let Some(name) = self.canonicalize(line) else {
                continue;
            };
            if seen.insert(name.clone()) {
                names.push(name);
            } else {
                tracing::debug!("Dropping duplicate entry '{}'", name);
            }
        }

        names
    }

    /// `None` when nothing name-like survives.
    pub fn canonicalize(&self, line: &str) -> Option<Name> {
        let mut current = self.single_pass(line);
        let mut passes_left = current.chars().count() + 1;

        while passes_left > 0 {
            let next = self.single_pass(&current);
            if next == current {
                break;
            }
            current = next;
            passes_left -= 1;
        }

        if current.is_empty() {
            None
        } else {
            Some(Name::from(current))
        }
    }

    fn single_pass(&self, line: &str) -> String {
        let mut cleaned = line.to_lowercase().trim().to_string();

        for pattern in &self.leading {
            cleaned = pattern.replace(&cleaned, "").into_owned();
        }
        for pattern in &self.trailing {
            cleaned = pattern.replace(&cleaned, "").into_owned();
        }

        let titled = self
            .word_start
            .replace_all(&cleaned, |caps: &Captures| caps[0].to_uppercase());

        self.leading_noise
            .replace(titled.trim(), "")
            .trim()
            .to_string()
    }
}

fn compile(pattern: &str, token: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TurnError::InvalidRule {
        token: token.to_string(),
        source,
    })
}
