//! Test utilities for `keyrelay_core` (compiled only during testing).

use regex::Regex;

use crate::pattern::{Group, Pattern};

pub fn make_pattern(id: &str, regex: &str, keywords: &[&str]) -> Pattern {
    Pattern {
        id: id.into(),
        group: Group::Auth,
        name: "Test Pattern".into(),
        regex: Regex::new(regex).unwrap(),
        keywords: keywords.iter().map(|&s| s.into()).collect(),
        context: None,
        dashboard_url: "https://example.com".into(),
        tags: vec![].into(),
    }
}
