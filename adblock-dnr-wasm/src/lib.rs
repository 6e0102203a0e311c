use wasm_bindgen::prelude::*;

use adblock_dnr::lists::{convert_filter_list_with_options, ConversionOptions};

/// Converts a filter list into a JSON document of the form `{"rules": [...], "stats": {...}}`.
///
/// Never throws: unconvertible lines are only counted in the stats.
#[wasm_bindgen(js_name = convertFilterList)]
pub fn convert_filter_list(text: &str) -> String {
    adblock_dnr::convert_filter_list_to_json(text)
}

/// Like `convertFilterList`, with options given as a JSON object, e.g.
/// `{"firstRuleId": 1, "maxRules": 5000}`. Invalid options fall back to the defaults.
#[wasm_bindgen(js_name = convertFilterListWithOptions)]
pub fn convert_filter_list_with_options_json(text: &str, options_json: &str) -> String {
    let options = ConversionOptions::from_json(options_json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default conversion options");
        ConversionOptions::default()
    });
    convert_filter_list_with_options(text, &options).to_json_lossy()
}
