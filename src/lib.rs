//! Converts adblock filter lists (EasyList/uBlock Origin syntax) into declarativeNetRequest rule
//! sets.
//!
//! ```
//! let rule_set = adblock_dnr::convert_filter_list("||ads.example.com^\n##.ad-banner\n");
//! assert_eq!(rule_set.stats.processed_rules, 1);
//! assert_eq!(rule_set.stats.skipped_lines, 1);
//! assert_eq!(
//!     rule_set.rules[0].condition.url_filter.as_deref(),
//!     Some("||ads.example.com/"),
//! );
//! ```

pub mod dnr;
pub mod filters;
pub mod lists;
pub mod request;
#[doc(hidden)]
pub mod utils;

pub use dnr::{ActionType, DnrRule, RuleCondition, RuleRejection};
pub use lists::{
    convert_filter_list, convert_filter_list_bytes, convert_filter_list_to_json,
    convert_filter_list_with_options, ConversionError, ConversionOptions, ConversionStats, RuleSet,
};
