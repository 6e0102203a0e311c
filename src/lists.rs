//! Parsing of whole filter lists into declarativeNetRequest rule sets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dnr::{DnrRule, RuleRejection};

/// Markers of cosmetic (element hiding, scriptlet, HTML) filters, none of which can be expressed
/// as network rules.
const COSMETIC_MARKERS: [&str; 4] = ["##", "#?#", "#$#", "#@#"];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FilterType {
    Empty,
    /// `! ...`
    Comment,
    /// `[Adblock Plus 2.0]` style headers.
    Metadata,
    Cosmetic,
    Network,
}

/// Given a single trimmed line, checks whether it could be converted to a network rule. Only
/// `Network` lines are handed to the rule parser.
pub fn detect_filter_type(filter: &str) -> FilterType {
    if filter.is_empty() {
        return FilterType::Empty;
    }
    if filter.starts_with('!') {
        return FilterType::Comment;
    }
    if filter.starts_with('[') {
        return FilterType::Metadata;
    }
    if COSMETIC_MARKERS.iter().any(|marker| filter.contains(marker)) {
        return FilterType::Cosmetic;
    }
    FilterType::Network
}

/// Options controlling how a list is converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionOptions {
    /// Id of the first emitted rule. Following rules are numbered consecutively.
    pub first_rule_id: u32,
    /// Maximum number of rules to emit, e.g. the engine's limit on dynamic rules. Convertible
    /// lines past the limit are counted as skipped.
    pub max_rules: Option<usize>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            first_rule_id: 1,
            max_rules: None,
        }
    }
}

/// Line counters for one conversion. `total_lines == processed_rules + skipped_lines` always
/// holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub total_lines: usize,
    pub processed_rules: usize,
    pub skipped_lines: usize,
}

/// The output document of a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<DnrRule>,
    pub stats: ConversionStats,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("rule set serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("invalid conversion options: {0}")]
    InvalidOptions(#[source] serde_json::Error),
}

impl ConversionOptions {
    /// Reads options from a JSON object such as `{"firstRuleId": 1000, "maxRules": 5000}`.
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConversionError> {
        serde_json::from_str(json).map_err(ConversionError::InvalidOptions)
    }
}

impl RuleSet {
    pub fn to_json(&self) -> Result<String, ConversionError> {
        serde_json::to_string(self).map_err(ConversionError::Serialization)
    }

    /// Serializes the rule set, falling back to a document with no rules if that fails. Hosts
    /// always receive a document with the `{"rules": [...], "stats": {...}}` shape.
    pub fn to_json_lossy(&self) -> String {
        self.to_json().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to an empty rule set");
            empty_document(self.stats.total_lines)
        })
    }
}

/// A document without rules in which every line is counted as skipped.
fn empty_document(total_lines: usize) -> String {
    format!(
        r#"{{"rules":[],"stats":{{"totalLines":{0},"processedRules":0,"skippedLines":{0}}}}}"#,
        total_lines
    )
}

/// Splits a list into lines the way a line reader would: a final line feed does not start an
/// extra empty line. Carriage returns are left for line trimming.
fn lines(list: &str) -> impl Iterator<Item = &str> {
    list.split_terminator('\n')
}

/// Converts every line of a filter list with the default options.
pub fn convert_filter_list(list: &str) -> RuleSet {
    convert_filter_list_with_options(list, &ConversionOptions::default())
}

/// Converts every line of a filter list. Lines that cannot be converted are skipped and counted;
/// they never fail the conversion.
pub fn convert_filter_list_with_options(list: &str, options: &ConversionOptions) -> RuleSet {
    let mut rules: Vec<DnrRule> = vec![];
    let mut stats = ConversionStats::default();
    // `None` once the id space is exhausted
    let mut next_id = Some(options.first_rule_id);
    let mut over_limit: usize = 0;

    for (index, line) in lines(list).enumerate() {
        stats.total_lines += 1;

        let within_limit = options.max_rules.map_or(true, |max_rules| rules.len() < max_rules);
        let result = match next_id {
            Some(id) if within_limit => DnrRule::parse(line, id),
            _ => Err(RuleRejection::RuleLimitReached),
        };

        let rejection = match result {
            Ok(rule) if !rule.condition.is_empty() => {
                rules.push(rule);
                stats.processed_rules += 1;
                next_id = next_id.and_then(|id| id.checked_add(1));
                continue;
            }
            Ok(_) => RuleRejection::NoCondition,
            Err(rejection) => rejection,
        };

        stats.skipped_lines += 1;
        if rejection == RuleRejection::RuleLimitReached {
            over_limit += 1;
        }
        tracing::trace!(line = index + 1, reason = %rejection, "skipped filter");
    }

    if over_limit > 0 {
        tracing::warn!(
            emitted = rules.len(),
            skipped = over_limit,
            "rule limit reached, remaining filters were not converted"
        );
    }
    tracing::debug!(
        total_lines = stats.total_lines,
        processed_rules = stats.processed_rules,
        skipped_lines = stats.skipped_lines,
        "converted filter list"
    );

    RuleSet { rules, stats }
}

/// Converts a list given as raw bytes. Invalid UTF-8 sequences are replaced rather than failing
/// the conversion.
pub fn convert_filter_list_bytes(list: &[u8], options: &ConversionOptions) -> RuleSet {
    convert_filter_list_with_options(&String::from_utf8_lossy(list), options)
}

/// Converts a list and serializes the resulting rule set as JSON.
pub fn convert_filter_list_to_json(list: &str) -> String {
    convert_filter_list(list).to_json_lossy()
}

#[cfg(test)]
#[path = "../tests/unit/lists.rs"]
mod unit_tests;
