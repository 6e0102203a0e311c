#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn detects_filter_types() {
        assert_eq!(detect_filter_type(""), FilterType::Empty);
        assert_eq!(detect_filter_type("! comment"), FilterType::Comment);
        assert_eq!(detect_filter_type("!"), FilterType::Comment);
        assert_eq!(detect_filter_type("[Adblock Plus 2.0]"), FilterType::Metadata);
        assert_eq!(detect_filter_type("##.ad"), FilterType::Cosmetic);
        assert_eq!(detect_filter_type("example.com,~shop.example.com##.ad"), FilterType::Cosmetic);
        assert_eq!(detect_filter_type("example.com#@#.ad"), FilterType::Cosmetic);
        assert_eq!(detect_filter_type("example.com#?#.ad:has(a)"), FilterType::Cosmetic);
        assert_eq!(detect_filter_type("example.com#$#body { color: red }"), FilterType::Cosmetic);
        assert_eq!(detect_filter_type("||ads.example.com^"), FilterType::Network);
        assert_eq!(detect_filter_type("@@||ads.example.com^"), FilterType::Network);
        // a single `#` is part of a URL fragment
        assert_eq!(detect_filter_type("/page#ad"), FilterType::Network);
    }

    #[test]
    fn line_splitting() {
        assert_eq!(lines("").count(), 0);
        assert_eq!(lines("\n").count(), 1);
        assert_eq!(lines("a").count(), 1);
        assert_eq!(lines("a\n").count(), 1);
        assert_eq!(lines("a\nb").count(), 2);
        assert_eq!(lines("a\n\nb\n").count(), 3);
        assert_eq!(lines("a\r\nb\r\n").collect::<Vec<_>>(), vec!["a\r", "b\r"]);
    }

    #[test]
    fn ids_only_advance_for_emitted_rules() {
        let list = "! header\n||a.com^\n##.ad\n||b.com^\n\n@@||c.com^\n";
        let rule_set = convert_filter_list(list);
        let ids: Vec<u32> = rule_set.rules.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            rule_set.stats,
            ConversionStats { total_lines: 6, processed_rules: 3, skipped_lines: 3 }
        );
    }

    #[test]
    fn first_rule_id() {
        let options = ConversionOptions { first_rule_id: 1000, ..Default::default() };
        let rule_set = convert_filter_list_with_options("||a.com^\nfoo\n||b.com^", &options);
        let ids: Vec<u32> = rule_set.rules.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002]);
    }

    #[test]
    fn id_space_exhaustion() {
        let options = ConversionOptions { first_rule_id: u32::MAX, ..Default::default() };
        let rule_set = convert_filter_list_with_options("||a.com^\n||b.com^", &options);
        assert_eq!(rule_set.rules.len(), 1);
        assert_eq!(rule_set.rules[0].id, u32::MAX);
        assert_eq!(
            rule_set.stats,
            ConversionStats { total_lines: 2, processed_rules: 1, skipped_lines: 1 }
        );
    }

    #[test]
    fn max_rules() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();

        let options = ConversionOptions { max_rules: Some(2), ..Default::default() };
        let rule_set =
            convert_filter_list_with_options("||a.com^\n! x\n||b.com^\n||c.com^\n||d.com^", &options);
        assert_eq!(rule_set.rules.len(), 2);
        assert_eq!(
            rule_set.stats,
            ConversionStats { total_lines: 5, processed_rules: 2, skipped_lines: 3 }
        );

        let options = ConversionOptions { max_rules: Some(0), ..Default::default() };
        let rule_set = convert_filter_list_with_options("||a.com^", &options);
        assert!(rule_set.rules.is_empty());
        assert_eq!(rule_set.stats.skipped_lines, 1);
    }

    #[test]
    fn options_from_json() {
        assert_eq!(ConversionOptions::from_json("{}").unwrap(), ConversionOptions::default());
        assert_eq!(
            ConversionOptions::from_json(r#"{"firstRuleId": 5, "maxRules": 5000}"#).unwrap(),
            ConversionOptions { first_rule_id: 5, max_rules: Some(5000) }
        );
        assert!(matches!(
            ConversionOptions::from_json(r#"{"firstRuleId": "one"}"#),
            Err(ConversionError::InvalidOptions(_))
        ));
        assert!(ConversionOptions::from_json("not json").is_err());
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let list = b"||a.com^\n||b\xff.com^\n\xfe\xfe\n||c.com^";
        let rule_set = convert_filter_list_bytes(list, &ConversionOptions::default());
        assert_eq!(rule_set.stats.total_lines, 4);
        assert_eq!(rule_set.rules[1].condition.url_filter.as_deref(), Some("||b\u{fffd}.com/"));
        assert_eq!(rule_set.rules.len(), 4);
    }

    #[test]
    fn empty_document_matches_schema() {
        let rule_set: RuleSet = serde_json::from_str(&empty_document(3)).unwrap();
        assert!(rule_set.rules.is_empty());
        assert_eq!(
            rule_set.stats,
            ConversionStats { total_lines: 3, processed_rules: 0, skipped_lines: 3 }
        );
        assert_eq!(
            empty_document(0),
            serde_json::to_string(&RuleSet::default()).unwrap()
        );
    }

    #[test]
    fn json_document() {
        let json = convert_filter_list_to_json("||a.com^\n!x");
        assert_eq!(
            json,
            r#"{"rules":[{"id":1,"priority":1,"action":{"type":"block"},"condition":{"urlFilter":"||a.com/"}}],"stats":{"totalLines":2,"processedRules":1,"skippedLines":1}}"#
        );
        assert_eq!(
            convert_filter_list_to_json(""),
            r#"{"rules":[],"stats":{"totalLines":0,"processedRules":0,"skippedLines":0}}"#
        );
    }
}
