//! Parsers for the two halves of a network filter: the URL pattern and the `$` options.

pub mod options;
pub mod pattern;
