#![no_main]

use adblock_dnr::DnrRule;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Ok(rule) = DnrRule::parse(line, 1) {
            assert!(!rule.condition.is_empty());
        }
    }
});
