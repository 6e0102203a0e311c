//! Small text helpers shared by the filter parsers.

use itertools::Itertools;
use memchr::memchr_iter;

/// Characters stripped from both ends of lines, options and domains.
const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Strips leading and trailing spaces, tabs, carriage returns and line feeds.
///
/// Other Unicode whitespace is left alone, so that this matches the byte-oriented trimming list
/// authors expect.
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Splits `s` on `delimiter`, dropping the empty segments produced by leading, trailing or
/// repeated delimiters.
pub fn split(s: &str, delimiter: char) -> impl Iterator<Item = &str> {
    s.split(delimiter).filter(|segment| !segment.is_empty())
}

/// Trims every element, drops empty ones and removes duplicates, keeping the first occurrence of
/// each value in its original position.
pub fn dedupe_trimmed<'a, I>(list: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    list.into_iter()
        .map(trim)
        .filter(|s| !s.is_empty())
        .unique()
        .map(String::from)
        .collect()
}

/// Finds the byte index of the `$` that starts the options section of a filter, if any.
///
/// A `$` preceded by a backslash is escaped and does not count. When the line opens like a regex
/// literal (`/...`), a `$` directly followed by `/`, `|` or `)` is an end anchor inside the regex
/// body rather than the separator.
pub fn find_options_separator(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let regex_like = bytes.first() == Some(&b'/');

    memchr_iter(b'$', bytes).find(|&i| {
        if i > 0 && bytes[i - 1] == b'\\' {
            return false;
        }
        !(regex_like && matches!(bytes.get(i + 1), Some(b'/' | b'|' | b')')))
    })
}

#[cfg(test)]
#[path = "../tests/unit/utils.rs"]
mod unit_tests;
