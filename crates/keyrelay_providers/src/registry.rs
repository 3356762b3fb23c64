//! Provider registry for accessing all builtin providers.

use std::collections::HashMap;

use crate::pattern::PatternDef;
use crate::provider::Provider;
use crate::providers::builtin_providers;

/// Central registry of all builtin API key detection providers.
///
/// Maps pattern identifiers to their owning providers and preserves the
/// catalog order in which patterns are evaluated.
pub struct ProviderRegistry {
    providers: Vec<&'static dyn Provider>,
    pattern_to_provider: HashMap<&'static str, usize>,
}

impl ProviderRegistry {
    /// Creates a registry pre-loaded with all builtin providers.
    #[must_use]
    pub fn builtin() -> Self {
        let providers = builtin_providers();
        let mut pattern_to_provider = HashMap::new();

        for (idx, provider) in providers.iter().enumerate() {
            for pattern in provider.patterns() {
                pattern_to_provider.insert(pattern.id, idx);
            }
        }

        Self {
            providers,
            pattern_to_provider,
        }
    }

    /// Returns an iterator over every pattern definition across all
    /// providers, in catalog order.
    pub fn all_patterns(&self) -> impl Iterator<Item = &PatternDef> {
        self.providers.iter().flat_map(|p| p.patterns().iter())
    }

    /// Returns all pattern definitions as a collected `Vec`.
    #[must_use]
    pub fn patterns(&self) -> Vec<&PatternDef> {
        self.all_patterns().collect()
    }

    /// Returns the total number of patterns across all providers.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.providers.iter().map(|p| p.patterns().len()).sum()
    }

    /// Returns the provider that owns the given pattern, if any.
    #[must_use]
    pub fn provider_for(&self, pattern_id: &str) -> Option<&'static dyn Provider> {
        self.pattern_to_provider
            .get(pattern_id)
            .and_then(|idx| self.providers.get(*idx).copied())
    }

    /// Returns the underlying slice of registered providers.
    #[must_use]
    pub fn providers(&self) -> &[&'static dyn Provider] {
        &self.providers
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("provider_count", &self.providers.len())
            .field("pattern_count", &self.pattern_count())
            .finish_non_exhaustive()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_has_patterns() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.pattern_count() > 0);
    }

    #[test]
    fn builtin_registry_has_providers() {
        let registry = ProviderRegistry::builtin();
        assert!(!registry.providers().is_empty());
    }

    #[test]
    fn provider_lookup_by_pattern_id() {
        let registry = ProviderRegistry::builtin();
        let provider = registry.provider_for("openai");
        assert!(provider.is_some_and(|p| p.id() == "ai/openai"));
    }

    #[test]
    fn unknown_pattern_id_has_no_provider() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.provider_for("unknown/pattern").is_none());
    }

    #[test]
    fn all_patterns_returns_iterator() {
        let registry = ProviderRegistry::builtin();
        let count = registry.all_patterns().count();
        assert_eq!(count, registry.pattern_count());
    }

    #[test]
    fn pattern_ids_are_unique() {
        let registry = ProviderRegistry::builtin();
        let mut seen = std::collections::HashSet::new();
        for pattern in registry.all_patterns() {
            assert!(seen.insert(pattern.id), "duplicate pattern id: {}", pattern.id);
        }
    }

    #[test]
    fn first_pattern_is_openai() {
        let registry = ProviderRegistry::builtin();
        let first = registry.all_patterns().next();
        assert!(first.is_some_and(|p| p.id == "openai"));
    }

    #[test]
    fn all_regexes_compile() {
        let registry = ProviderRegistry::builtin();
        for pattern in registry.all_patterns() {
            assert!(
                regex::Regex::new(pattern.regex).is_ok(),
                "invalid regex for pattern {}",
                pattern.id
            );
            if let Some(context) = pattern.context {
                assert!(
                    regex::Regex::new(context).is_ok(),
                    "invalid context regex for pattern {}",
                    pattern.id
                );
            }
        }
    }

    #[test]
    fn keywords_are_literal_prefixes_of_some_match() {
        // Every keyword must actually occur in at least one string the
        // pattern can match, otherwise the prefilter would hide matches.
        let registry = ProviderRegistry::builtin();
        for pattern in registry.all_patterns() {
            for keyword in pattern.keywords {
                assert!(
                    pattern.regex.contains(&keyword.replace('.', r"\.")) || pattern.regex.contains(keyword),
                    "keyword {keyword:?} not present in regex for pattern {}",
                    pattern.id
                );
            }
        }
    }

    #[test]
    fn every_pattern_has_dashboard_url() {
        let registry = ProviderRegistry::builtin();
        for pattern in registry.all_patterns() {
            assert!(
                pattern.dashboard_url.starts_with("https://"),
                "pattern {} has no dashboard url",
                pattern.id
            );
        }
    }

    #[test]
    fn default_is_equivalent_to_builtin() {
        let default_registry = ProviderRegistry::default();
        let builtin_registry = ProviderRegistry::builtin();

        assert_eq!(default_registry.pattern_count(), builtin_registry.pattern_count());
        assert_eq!(default_registry.providers().len(), builtin_registry.providers().len());
    }
}
