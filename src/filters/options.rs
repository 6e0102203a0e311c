//! Parsing of the comma-separated options that follow a filter's `$` separator, and their
//! translation into optional rule condition fragments.

use itertools::Itertools;

use crate::request::{RequestMethod, ResourceType, ALL_RESOURCE_TYPES};
use crate::utils::{self, dedupe_trimmed};

/// Any option that appears on the right side of a network filter as initiated by a `$` character.
/// `bool` arguments are `true` if the option stands alone, or `false` if the option is negated
/// using a prepended `~`.
#[derive(Debug, Clone, PartialEq)]
enum FilterOption<'a> {
    ResourceType(ResourceType, bool),
    /// `$domain=`: domains of the page initiating the request. Each entry is `(enabled, domain)`.
    InitiatorDomains(Vec<(bool, &'a str)>),
    /// `$domains=`: domains of the requested URL.
    RequestDomains(Vec<(bool, &'a str)>),
    Methods(Vec<RequestMethod>, bool),
    /// `$third-party` and `$first-party` have no declarative equivalent here.
    Party,
    Unrecognised,
}

fn parse_domain_list(value: &str) -> Vec<(bool, &str)> {
    utils::split(value, '|')
        .map(utils::trim)
        .filter(|domain| !domain.is_empty())
        .filter_map(|domain| match domain.strip_prefix('~') {
            Some("") => None,
            Some(negated) => Some((false, negated)),
            None => Some((true, domain)),
        })
        .collect()
}

fn parse_method_list(value: &str) -> Vec<RequestMethod> {
    utils::split(value, '|')
        .map(utils::trim)
        .filter_map(RequestMethod::from_token)
        .collect()
}

fn parse_filter_option(raw_option: &str) -> FilterOption<'_> {
    // Check for negation: ~option
    let (negated, option) = match raw_option.strip_prefix('~') {
        Some(rest) => (true, rest),
        None => (false, raw_option),
    };

    // Check for values: option=value1|value2
    let (key, value) = match option.split_once('=') {
        Some((key, value)) => (key, utils::trim(value)),
        None => (option, ""),
    };

    if let Some(resource_type) = ResourceType::from_option(key) {
        return FilterOption::ResourceType(resource_type, !negated);
    }

    match key {
        "domain" => FilterOption::InitiatorDomains(parse_domain_list(value)),
        "domains" => FilterOption::RequestDomains(parse_domain_list(value)),
        "method" | "request-method" => FilterOption::Methods(parse_method_list(value), !negated),
        "third-party" | "first-party" => FilterOption::Party,
        _ => FilterOption::Unrecognised,
    }
}

/// Include and exclude values gathered for one kind of condition across all options.
struct Accumulator<T> {
    include: Vec<T>,
    exclude: Vec<T>,
}

impl<T> Default for Accumulator<T> {
    fn default() -> Self {
        Self { include: vec![], exclude: vec![] }
    }
}

impl<T> Accumulator<T> {
    fn push(&mut self, enabled: bool, value: T) {
        if enabled {
            self.include.push(value);
        } else {
            self.exclude.push(value);
        }
    }
}

impl<'a> Accumulator<&'a str> {
    /// Include and exclude lists are mutually exclusive; any excluded domain wins over all
    /// included ones.
    fn resolve_domains(self) -> (Option<Vec<String>>, Option<Vec<String>>) {
        let exclude = non_empty(dedupe_trimmed(self.exclude));
        if exclude.is_some() {
            return (None, exclude);
        }
        (non_empty(dedupe_trimmed(self.include)), None)
    }
}

impl Accumulator<RequestMethod> {
    fn resolve_methods(self) -> (Option<Vec<RequestMethod>>, Option<Vec<RequestMethod>>) {
        let sorted = |methods: Vec<RequestMethod>| {
            non_empty(methods.into_iter().sorted().dedup().collect())
        };
        let exclude = sorted(self.exclude);
        if exclude.is_some() {
            return (None, exclude);
        }
        (sorted(self.include), None)
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// The condition fragments derived from a filter's options. Every fragment is optional; `None`
/// means the option was not given, and a present fragment is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionConditions {
    pub resource_types: Option<Vec<ResourceType>>,
    pub request_domains: Option<Vec<String>>,
    pub excluded_request_domains: Option<Vec<String>>,
    pub initiator_domains: Option<Vec<String>>,
    pub excluded_initiator_domains: Option<Vec<String>>,
    pub request_methods: Option<Vec<RequestMethod>>,
    pub excluded_request_methods: Option<Vec<RequestMethod>>,
}

impl OptionConditions {
    /// Parses the raw options of a filter, i.e. everything after its `$` separator.
    ///
    /// Unknown or unsupported options are skipped rather than failing the whole filter.
    pub fn parse(raw_options: &str) -> Self {
        let mut resource_types: Accumulator<ResourceType> = Accumulator::default();
        let mut initiator_domains: Accumulator<&str> = Accumulator::default();
        let mut request_domains: Accumulator<&str> = Accumulator::default();
        let mut methods: Accumulator<RequestMethod> = Accumulator::default();

        for raw_option in utils::split(raw_options, ',') {
            let raw_option = utils::trim(raw_option);
            if raw_option.is_empty() {
                continue;
            }

            match parse_filter_option(raw_option) {
                FilterOption::ResourceType(resource_type, enabled) => {
                    resource_types.push(enabled, resource_type)
                }
                FilterOption::InitiatorDomains(domains) => domains
                    .into_iter()
                    .for_each(|(enabled, domain)| initiator_domains.push(enabled, domain)),
                FilterOption::RequestDomains(domains) => domains
                    .into_iter()
                    .for_each(|(enabled, domain)| request_domains.push(enabled, domain)),
                FilterOption::Methods(parsed, enabled) => parsed
                    .into_iter()
                    .for_each(|method| methods.push(enabled, method)),
                FilterOption::Party | FilterOption::Unrecognised => (),
            }
        }

        let (initiator_domains, excluded_initiator_domains) = initiator_domains.resolve_domains();
        let (request_domains, excluded_request_domains) = request_domains.resolve_domains();
        let (request_methods, excluded_request_methods) = methods.resolve_methods();

        Self {
            resource_types: resolve_resource_types(resource_types),
            request_domains,
            excluded_request_domains,
            initiator_domains,
            excluded_initiator_domains,
            request_methods,
            excluded_request_methods,
        }
    }

    /// Returns `true` if no fragment at all was derived from the options.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Positive types are kept in the order they were first listed. Negated types are only used when
/// no positive type was given, and are turned into the complement over all known types; a
/// complement that is empty or covers every type would not constrain anything, so it is dropped.
fn resolve_resource_types(types: Accumulator<ResourceType>) -> Option<Vec<ResourceType>> {
    if !types.include.is_empty() {
        return Some(types.include.into_iter().unique().collect());
    }
    if types.exclude.is_empty() {
        return None;
    }

    let remaining: Vec<ResourceType> = ALL_RESOURCE_TYPES
        .iter()
        .copied()
        .filter(|resource_type| !types.exclude.contains(resource_type))
        .collect();

    if !remaining.is_empty() && remaining.len() < ALL_RESOURCE_TYPES.len() {
        Some(remaining)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/options.rs"]
mod unit_tests;
