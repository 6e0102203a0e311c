#![no_main]

use adblock_dnr::{convert_filter_list_bytes, ConversionOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let rule_set = convert_filter_list_bytes(data, &ConversionOptions::default());
    let stats = rule_set.stats;
    assert_eq!(stats.total_lines, stats.processed_rules + stats.skipped_lines);
    assert!(rule_set.to_json().is_ok());
});
