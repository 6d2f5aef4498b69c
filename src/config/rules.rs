use crate::domain::ports::NormalizationRule;

/// Honorifics and relational titles stripped from the start of a name.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "brother", "bro", "sister", "sis", "bhai", "bahan",
    "mr", "mrs", "ms", "dr", "pt", "pt.", "shri", "shrimati", "sri", "smt", "prof",
    "pandit", "guruji", "mahant", "swami", "sant",
    "mother", "father", "mataji", "pitaji",
    "র", "ব্রাদার", "সিস্টার", "ভাই", "বোন",
    "भाई", "बहन", "भ्राता", "सहोदर",
];

/// Relational and respect markers stripped from the end of a name.
pub const DEFAULT_SUFFIXES: &[&str] = &[
    "bhai", "bahan", "brother", "sister", "ji",
    "dada", "didi", "da", "di", "ba", "bi",
    "g", "ji", "jee",
    "র", "ভাই", "বোন",
    "भाई", "बहन",
];

pub fn default_prefixes() -> Vec<String> {
    DEFAULT_PREFIXES.iter().map(|s| s.to_string()).collect()
}

pub fn default_suffixes() -> Vec<String> {
    DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect()
}

/// Leading rules first, then trailing rules, each list in its given order.
pub fn build_rules(prefixes: &[String], suffixes: &[String]) -> Vec<NormalizationRule> {
    prefixes
        .iter()
        .map(|token| NormalizationRule::leading(token.as_str()))
        .chain(
            suffixes
                .iter()
                .map(|token| NormalizationRule::trailing(token.as_str())),
        )
        .collect()
}

pub fn default_rules() -> Vec<NormalizationRule> {
    build_rules(&default_prefixes(), &default_suffixes())
}
