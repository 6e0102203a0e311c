//! Transforms filter list lines into declarativeNetRequest (DNR) rules, the declarative
//! condition/action objects evaluated natively by the browser's request filtering engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filters::options::OptionConditions;
use crate::filters::pattern::{PatternError, UrlPattern};
use crate::lists::{detect_filter_type, FilterType};
use crate::request::{RequestMethod, ResourceType};
use crate::utils;

/// Priority of blocking rules.
pub const BLOCK_PRIORITY: u32 = 1;
/// Priority of exception rules, which must outrank blocking rules.
pub const ALLOW_PRIORITY: u32 = 2;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Block,
    Allow,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RuleAction {
    #[serde(rename = "type")]
    pub typ: ActionType,
}

/// The condition under which a rule matches a request. Absent fragments are omitted from the
/// serialized form; present ones are never empty.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<Vec<ResourceType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_request_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_initiator_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_methods: Option<Vec<RequestMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_request_methods: Option<Vec<RequestMethod>>,
}

impl RuleCondition {
    fn new(pattern: UrlPattern, options: OptionConditions) -> Self {
        let (regex_filter, url_filter) = match pattern {
            UrlPattern::Regex(regex) => (Some(regex), None),
            UrlPattern::UrlFilter(filter) => (None, Some(filter)),
        };
        Self {
            regex_filter,
            url_filter,
            resource_types: options.resource_types,
            request_domains: options.request_domains,
            excluded_request_domains: options.excluded_request_domains,
            initiator_domains: options.initiator_domains,
            excluded_initiator_domains: options.excluded_initiator_domains,
            request_methods: options.request_methods,
            excluded_request_methods: options.excluded_request_methods,
        }
    }

    /// Returns `true` if no fragment is present, i.e. the condition would serialize to `{}`.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Whether the condition targets specific URLs, as opposed to only restricting request types
    /// or initiators.
    fn targets_urls(&self) -> bool {
        self.url_filter.is_some() || self.regex_filter.is_some() || self.request_domains.is_some()
    }
}

/// A single declarativeNetRequest rule.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DnrRule {
    pub id: u32,
    pub priority: u32,
    pub action: RuleAction,
    pub condition: RuleCondition,
}

/// Possible reasons a filter list line does not produce a rule.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RuleRejection {
    #[error("empty line")]
    Empty,
    #[error("comment")]
    Comment,
    #[error("list metadata")]
    Metadata,
    #[error("cosmetic filters are not supported")]
    Cosmetic,
    #[error("exception marker without a filter")]
    EmptyException,
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("rule has no condition")]
    NoCondition,
    #[error("exception does not target any URL or request domain")]
    AllowTooBroad,
    #[error("rule limit reached")]
    RuleLimitReached,
}

impl DnrRule {
    /// Converts a single filter list line into a rule with the given `id`.
    pub fn parse(line: &str, id: u32) -> Result<Self, RuleRejection> {
        let line = utils::trim(line);

        match detect_filter_type(line) {
            FilterType::Empty => return Err(RuleRejection::Empty),
            FilterType::Comment => return Err(RuleRejection::Comment),
            FilterType::Metadata => return Err(RuleRejection::Metadata),
            FilterType::Cosmetic => return Err(RuleRejection::Cosmetic),
            FilterType::Network => (),
        }

        let (typ, priority, line) = match line.strip_prefix("@@") {
            Some(rest) => {
                let rest = utils::trim(rest);
                if rest.is_empty() {
                    return Err(RuleRejection::EmptyException);
                }
                (ActionType::Allow, ALLOW_PRIORITY, rest)
            }
            None => (ActionType::Block, BLOCK_PRIORITY, line),
        };

        let (filter, raw_options) = match utils::find_options_separator(line) {
            // slicing is safe; '$' is a single byte character
            Some(separator) => (&line[..separator], Some(&line[separator + 1..])),
            None => (line, None),
        };

        let pattern = UrlPattern::parse(utils::trim(filter))?;
        let options = raw_options.map(OptionConditions::parse).unwrap_or_default();
        let condition = RuleCondition::new(pattern, options);

        validate_condition(typ, &condition)?;

        Ok(DnrRule {
            id,
            priority,
            action: RuleAction { typ },
            condition,
        })
    }

    pub fn is_allow(&self) -> bool {
        self.action.typ == ActionType::Allow
    }
}

/// A rule must have at least one condition fragment, and an exception must additionally target
/// URLs: an exception narrowed only by resource type, initiator domain or method is too broad to
/// honor.
fn validate_condition(typ: ActionType, condition: &RuleCondition) -> Result<(), RuleRejection> {
    if condition.is_empty() {
        return Err(RuleRejection::NoCondition);
    }
    if typ == ActionType::Allow && !condition.targets_urls() {
        return Err(RuleRejection::AllowTooBroad);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/dnr.rs"]
mod unit_tests;
