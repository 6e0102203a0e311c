//! Translation of the pattern part of a network filter (everything before the options) into the
//! URL matching condition of a rule.

use thiserror::Error;

/// Reasons why the pattern of a filter cannot be expressed as a rule condition.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,
    #[error("hostname anchor without a plain hostname")]
    InvalidHostnameAnchor,
}

/// The URL matching condition of a rule. Exactly one kind is ever produced for a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// A regular expression body, with the delimiting slashes removed.
    Regex(String),
    /// A glob-like pattern using `*` wildcards and `|`/`||`/`^` anchors.
    UrlFilter(String),
}

impl UrlPattern {
    /// Synthesizes a URL condition from the pattern part of a filter.
    pub fn parse(filter: &str) -> Result<Self, PatternError> {
        if filter.is_empty() {
            return Err(PatternError::Empty);
        }

        if filter.len() > 2
            && filter.starts_with('/')
            && filter.ends_with('/')
            && !filter.starts_with("||")
        {
            return Ok(UrlPattern::Regex(filter[1..filter.len() - 1].to_string()));
        }

        if let Some(rest) = filter.strip_prefix("||") {
            return match rest.strip_suffix('^') {
                // `||example.com^` blocks every path on the host
                Some(hostname) => {
                    check_plain_hostname(hostname)?;
                    Ok(UrlPattern::UrlFilter(format!("||{}/", hostname)))
                }
                None => {
                    check_plain_hostname(rest)?;
                    Ok(UrlPattern::UrlFilter(format!("||{}^", rest)))
                }
            };
        }

        Ok(UrlPattern::UrlFilter(generic_pattern(filter)))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, UrlPattern::Regex(_))
    }
}

/// Hostname-anchored filters are only converted when the anchor is followed by a bare hostname.
fn check_plain_hostname(hostname: &str) -> Result<(), PatternError> {
    if hostname.is_empty() || hostname.contains('/') || hostname.contains('*') {
        Err(PatternError::InvalidHostnameAnchor)
    } else {
        Ok(())
    }
}

/// Handles filters without a hostname anchor. A `|` at either end anchors the pattern to the
/// start or end of the URL; unanchored ends are padded with `*`.
fn generic_pattern(filter: &str) -> String {
    let (left_anchor, content) = match filter.strip_prefix('|') {
        Some(rest) => (true, rest),
        None => (false, filter),
    };
    let (right_anchor, content) = match content.strip_suffix('|') {
        Some(rest) if !content.is_empty() => (true, rest),
        _ => (false, content),
    };

    let mut pattern = String::with_capacity(content.len() + 2);
    if !left_anchor {
        pattern.push('*');
    }
    pattern.push_str(content);
    if !right_anchor {
        pattern.push('*');
    }

    // Any pattern made only of wildcards matches everything
    if pattern.chars().all(|c| c == '*') {
        return String::from("*");
    }
    pattern
}

#[cfg(test)]
#[path = "../../tests/unit/filters/pattern.rs"]
mod unit_tests;
