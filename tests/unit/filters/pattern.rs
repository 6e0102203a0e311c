#[cfg(test)]
mod parse_tests {
    use super::super::*;

    fn url_filter(filter: &str) -> Result<UrlPattern, PatternError> {
        Ok(UrlPattern::UrlFilter(filter.to_string()))
    }

    #[test]
    fn empty() {
        assert_eq!(UrlPattern::parse(""), Err(PatternError::Empty));
    }

    #[test]
    fn regex() {
        assert_eq!(
            UrlPattern::parse(r"/^https:\/\/ads\..*$/"),
            Ok(UrlPattern::Regex(r"^https:\/\/ads\..*$".to_string()))
        );
        assert_eq!(UrlPattern::parse("/a/"), Ok(UrlPattern::Regex("a".to_string())));
        assert!(UrlPattern::parse("/banner/").unwrap().is_regex());
        // too short to contain a body
        assert_eq!(UrlPattern::parse("//"), url_filter("*//*"));
        // not closed
        assert_eq!(UrlPattern::parse("/banner"), url_filter("*/banner*"));
    }

    #[test]
    fn hostname_anchor_with_separator() {
        assert_eq!(UrlPattern::parse("||ads.example.com^"), url_filter("||ads.example.com/"));
        assert_eq!(UrlPattern::parse("||^"), Err(PatternError::InvalidHostnameAnchor));
        assert_eq!(
            UrlPattern::parse("||example.com/ads^"),
            Err(PatternError::InvalidHostnameAnchor)
        );
        assert_eq!(
            UrlPattern::parse("||ads.*.com^"),
            Err(PatternError::InvalidHostnameAnchor)
        );
    }

    #[test]
    fn hostname_anchor() {
        assert_eq!(UrlPattern::parse("||ads.example.com"), url_filter("||ads.example.com^"));
        assert_eq!(UrlPattern::parse("||"), Err(PatternError::InvalidHostnameAnchor));
        assert_eq!(
            UrlPattern::parse("||example.com/banner.gif"),
            Err(PatternError::InvalidHostnameAnchor)
        );
        assert_eq!(UrlPattern::parse("||ads*"), Err(PatternError::InvalidHostnameAnchor));
        // a regex-looking pattern after `||` is still a hostname anchor
        assert_eq!(UrlPattern::parse("||/ads/"), Err(PatternError::InvalidHostnameAnchor));
    }

    #[test]
    fn generic_patterns() {
        assert_eq!(UrlPattern::parse("&ad_box_"), url_filter("*&ad_box_*"));
        assert_eq!(UrlPattern::parse("/banner/ads.js"), url_filter("*/banner/ads.js*"));
        assert_eq!(UrlPattern::parse("|https://"), url_filter("https://*"));
        assert_eq!(UrlPattern::parse(".swf|"), url_filter("*.swf"));
        assert_eq!(
            UrlPattern::parse("|http://example.com/ad.js|"),
            url_filter("http://example.com/ad.js")
        );
        assert_eq!(UrlPattern::parse("ad^"), url_filter("*ad^*"));
    }

    #[test]
    fn wildcards_collapse() {
        assert_eq!(UrlPattern::parse("*"), url_filter("*"));
        assert_eq!(UrlPattern::parse("**"), url_filter("*"));
        assert_eq!(UrlPattern::parse("|"), url_filter("*"));
        assert_eq!(UrlPattern::parse("|*|"), url_filter("*"));
        assert_eq!(UrlPattern::parse("ad*"), url_filter("*ad**"));
    }
}
