//! The detection engine that matches patterns against text.

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::detection::{DetectedSecret, UNKNOWN_PROVIDER, dedupe_by_value};
use crate::heuristics::{infer_project_from_url, is_likely_real_key, looks_like_secret, parse_env_var_pairs};
use crate::pattern::{Pattern, PatternRegistry};

/// Detection engine that matches text against a `PatternRegistry`.
///
/// The detector uses Aho-Corasick keyword pre-filtering to skip patterns
/// whose keywords are absent from the text, then runs full regex matching
/// only on the patterns that could plausibly match. Patterns are evaluated
/// in catalog declaration order and every matching entry contributes one
/// detection, using the first match of that entry within the text.
pub struct Detector {
    registry: PatternRegistry,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("patterns", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl Detector {
    /// Creates a detector over the given registry.
    #[must_use]
    pub const fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// Returns the total number of patterns in the registry.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.registry.len()
    }

    /// Looks up a pattern by its provider id.
    #[must_use]
    pub fn get_pattern(&self, id: &str) -> Option<&Pattern> {
        self.registry.get(id)
    }

    /// Matches `text` against every catalog entry and returns all detections.
    ///
    /// `context` is typically the URL of the page the text was copied from;
    /// context-gated entries are skipped unless it matches their gate, and
    /// an empty context never satisfies a gate. Each matching entry yields
    /// at most one detection (its first match within `text`).
    #[must_use]
    pub fn detect_api_keys(&self, text: &str, context: &str) -> Vec<DetectedSecret> {
        let patterns_to_check = self.select_patterns_to_run(text);
        let mut detected = Vec::new();

        for (idx, &should_check) in patterns_to_check.iter().enumerate() {
            if !should_check {
                continue;
            }

            let Some(pattern) = self.registry.get_by_index(idx) else {
                continue;
            };

            if !pattern.context_allows(context) {
                continue;
            }

            if let Some(found) = pattern.regex.find(text) {
                #[cfg(feature = "tracing")]
                trace!(pattern = %pattern.id, "matched");

                detected.push(DetectedSecret {
                    provider: pattern.id.to_string(),
                    name: pattern.name.to_string(),
                    value: found.as_str().to_string(),
                    dashboard_url: Some(pattern.dashboard_url.to_string()),
                    tags: pattern.tags.iter().map(|t| t.to_string()).collect(),
                    env_var_name: None,
                    source_url: None,
                    project: None,
                });
            }
        }

        detected
    }

    /// Full scan over copied text: env-pair extraction, catalog matching,
    /// heuristic fallback, dedup, and placeholder filtering.
    ///
    /// `KEY=value` pairs are extracted first and each value is classified
    /// individually, attaching the variable name; values with no catalog
    /// match that still look like secrets are reported under the
    /// `"unknown"` provider. The raw text is then matched as a whole to
    /// catch keys outside assignment form. Results are deduplicated by
    /// value (pair detections win) and placeholders are dropped.
    #[must_use]
    pub fn scan_text(&self, text: &str, source_url: Option<&str>) -> Vec<DetectedSecret> {
        let context = source_url.unwrap_or_default();
        let project = source_url.and_then(infer_project_from_url);

        let mut detections = Vec::new();

        for pair in parse_env_var_pairs(text) {
            let mut matched = self.detect_api_keys(&pair.value, context);
            if matched.is_empty() {
                if looks_like_secret(&pair.value) {
                    detections.push(DetectedSecret {
                        provider: UNKNOWN_PROVIDER.to_string(),
                        name: pair.name.clone(),
                        value: pair.value,
                        dashboard_url: None,
                        tags: vec!["env-var".to_string()],
                        env_var_name: Some(pair.name),
                        source_url: source_url.map(str::to_string),
                        project: project.clone(),
                    });
                }
            } else {
                let mut first = matched.swap_remove(0);
                first.env_var_name = Some(pair.name);
                first.source_url = source_url.map(str::to_string);
                first.project = project.clone();
                detections.push(first);
            }
        }

        for mut detection in self.detect_api_keys(text, context) {
            detection.source_url = source_url.map(str::to_string);
            detection.project = project.clone();
            detections.push(detection);
        }

        dedupe_by_value(detections)
            .into_iter()
            .filter(|d| is_likely_real_key(&d.value))
            .collect()
    }

    fn select_patterns_to_run(&self, text: &str) -> Vec<bool> {
        let mut should_run = vec![false; self.registry.len()];

        for &idx in self.registry.patterns_without_keywords() {
            should_run[idx] = true;
        }

        if let Some(automaton) = self.registry.keyword_automaton() {
            for mat in automaton.find_iter(text) {
                let keyword_idx = mat.pattern().as_usize();
                for &pattern_idx in &self.registry.keyword_to_patterns()[keyword_idx] {
                    should_run[pattern_idx] = true;
                }
            }
        }

        should_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> Detector {
        Detector::new(PatternRegistry::builtin().unwrap())
    }

    fn openai_key() -> String {
        format!("sk-{}", "a".repeat(48))
    }

    #[test]
    fn detects_openai_key_in_env_assignment() {
        let d = detector();
        let text = format!("OPENAI_API_KEY={}", openai_key());
        let detections = d.scan_text(&text, None);

        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].provider, "openai");
        assert_eq!(detections[0].env_var_name.as_deref(), Some("OPENAI_API_KEY"));
    }

    #[test]
    fn detect_api_keys_reports_every_matching_entry() {
        let d = detector();
        let text = format!("{}\nghp_{}", openai_key(), "b".repeat(36));
        let detections = d.detect_api_keys(&text, "");

        let providers: Vec<_> = detections.iter().map(|d| d.provider.as_str()).collect();
        assert!(providers.contains(&"openai"));
        assert!(providers.contains(&"github-pat"));
    }

    #[test]
    fn entries_are_reported_in_catalog_order() {
        let d = detector();
        // github declared after openai in the catalog
        let text = format!("ghp_{} {}", "b".repeat(36), openai_key());
        let detections = d.detect_api_keys(&text, "");

        assert_eq!(detections[0].provider, "openai");
    }

    #[test]
    fn first_match_per_entry_only() {
        let d = detector();
        let text = format!("{} sk-{}", openai_key(), "c".repeat(48));
        let openai_detections: Vec<_> = d
            .detect_api_keys(&text, "")
            .into_iter()
            .filter(|det| det.provider == "openai")
            .collect();

        assert_eq!(openai_detections.len(), 1);
        assert!(openai_detections[0].value.ends_with('a'));
    }

    #[test]
    fn gated_entry_skipped_without_context() {
        let d = detector();
        let token = "a".repeat(40);
        assert!(d.detect_api_keys(&token, "").is_empty());
    }

    #[test]
    fn gated_entry_matches_with_relevant_context() {
        let d = detector();
        let token = "a".repeat(40);
        let detections = d.detect_api_keys(&token, "https://dash.cloudflare.com/tokens");

        assert!(detections.iter().any(|det| det.provider == "cloudflare-api"));
    }

    #[test]
    fn twilio_auth_token_requires_twilio_context() {
        let d = detector();
        let token = "a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4";

        let without = d.detect_api_keys(token, "https://example.com");
        assert!(!without.iter().any(|det| det.provider == "twilio-auth"));

        let with = d.detect_api_keys(token, "https://console.twilio.com/account");
        assert!(with.iter().any(|det| det.provider == "twilio-auth"));
    }

    #[test]
    fn placeholder_values_are_filtered_from_scan() {
        let d = detector();
        let detections = d.scan_text("OPENAI_API_KEY=sk-xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx", None);
        assert!(detections.is_empty());
    }

    #[test]
    fn unknown_secret_like_values_reported_with_env_var_tag() {
        let d = detector();
        let detections = d.scan_text("MY_SERVICE_TOKEN=zq9_internal_4f8a2b7c1d6e3f9a0b5c8d2e7f1a4b6c", None);

        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].provider, "unknown");
        assert_eq!(detections[0].name, "MY_SERVICE_TOKEN");
        assert_eq!(detections[0].tags, ["env-var"]);
    }

    #[test]
    fn scan_dedupes_pair_and_raw_detections() {
        let d = detector();
        // The same key is found via the pair value and via the raw text;
        // the pair detection (carrying envVarName) must win.
        let text = format!("OPENAI_API_KEY={}", openai_key());
        let detections = d.scan_text(&text, None);

        assert_eq!(detections.len(), 1);
        assert!(detections[0].env_var_name.is_some());
    }

    #[test]
    fn scan_attaches_source_url_and_project() {
        let d = detector();
        let text = format!("OPENAI_API_KEY={}", openai_key());
        let detections = d.scan_text(&text, Some("https://github.com/acme/widgets"));

        assert_eq!(detections[0].source_url.as_deref(), Some("https://github.com/acme/widgets"));
        assert_eq!(detections[0].project.as_deref(), Some("widgets"));
    }

    #[test]
    fn scan_of_plain_prose_finds_nothing() {
        let d = detector();
        assert!(d.scan_text("just some ordinary text with no keys", None).is_empty());
    }
}
