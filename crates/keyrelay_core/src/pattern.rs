//! Compiled patterns and the keyword-indexed registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use aho_corasick::AhoCorasick;
use regex::Regex;

use crate::error::PatternError;

pub use keyrelay_providers::Group;

/// A compiled API key detection pattern ready for scanning.
///
/// Each pattern combines a regular expression with metadata used for
/// reporting (provider id, dashboard URL, tags) and performance
/// optimisation (keywords for Aho-Corasick pre-filtering). Low-entropy
/// patterns additionally carry a compiled context gate.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Provider identifier reported on detections (e.g. `"openai"`).
    pub id: Arc<str>,
    /// Service category this pattern belongs to.
    pub group: Group,
    /// Short human-readable name shown in output.
    pub name: Box<str>,
    /// Compiled regular expression that matches the key.
    pub regex: Regex,
    /// Case-insensitive keywords for Aho-Corasick pre-filtering. If
    /// non-empty, the pattern is only tested against content that contains
    /// at least one keyword.
    pub keywords: Box<[Box<str>]>,
    /// Compiled context gate. When `Some`, the pattern only runs if the
    /// caller-supplied context string matches; no context means no match.
    pub context: Option<Regex>,
    /// Where the key can be revoked or rotated.
    pub dashboard_url: Box<str>,
    /// Tags attached to detections and stored items.
    pub tags: Box<[Box<str>]>,
}

impl Pattern {
    fn from_def(def: &keyrelay_providers::PatternDef) -> Result<Self, PatternError> {
        let regex = Regex::new(def.regex).map_err(|source| PatternError::InvalidRegex {
            id: def.id.to_string(),
            source,
        })?;

        let context = def
            .context
            .map(|gate| {
                Regex::new(gate).map_err(|source| PatternError::InvalidContext {
                    id: def.id.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self {
            id: Arc::from(def.id),
            group: def.group,
            name: def.name.into(),
            regex,
            keywords: def.keywords.iter().map(|&k| k.into()).collect(),
            context,
            dashboard_url: def.dashboard_url.into(),
            tags: def.tags.iter().map(|&t| t.into()).collect(),
        })
    }

    /// Returns `true` if this pattern may run for the given context string.
    ///
    /// Ungated patterns always run. Gated patterns require a context that
    /// matches their gate; an empty context is a non-match.
    #[must_use]
    pub fn context_allows(&self, context: &str) -> bool {
        match &self.context {
            None => true,
            Some(gate) => !context.is_empty() && gate.is_match(context),
        }
    }
}

/// Indexed collection of `Pattern`s with Aho-Corasick pre-filtering.
///
/// The registry builds a keyword automaton at construction time so that
/// the detector can cheaply determine which patterns to evaluate for a
/// given piece of text. Declaration order is preserved; the detector
/// reports matches in this order.
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
    keyword_automaton: Option<AhoCorasick>,
    keyword_to_patterns: Vec<Vec<usize>>,
    patterns_without_keywords: Vec<usize>,
}

impl fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("patterns", &self.patterns.len())
            .field("patterns_without_keywords", &self.patterns_without_keywords.len())
            .finish_non_exhaustive()
    }
}

impl PatternRegistry {
    /// Creates a registry containing all built-in provider patterns.
    pub fn builtin() -> Result<Self, PatternError> {
        let provider_registry = keyrelay_providers::ProviderRegistry::builtin();
        let patterns = provider_registry
            .all_patterns()
            .map(Pattern::from_def)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns))
    }

    /// Creates a registry from a list of patterns, building the keyword index.
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let keyword_index = build_keyword_index(&patterns);
        let keyword_automaton = build_automaton(&keyword_index.keywords);

        Self {
            patterns,
            keyword_automaton,
            keyword_to_patterns: keyword_index.keyword_to_patterns,
            patterns_without_keywords: keyword_index.patterns_without_keywords,
        }
    }

    /// Returns all patterns as a slice, in declaration order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Looks up a pattern by its provider id (e.g. `"openai"`).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id.as_ref() == id)
    }

    /// Looks up a pattern by its positional index in the registry.
    #[must_use]
    pub fn get_by_index(&self, idx: usize) -> Option<&Pattern> {
        self.patterns.get(idx)
    }

    /// Returns the total number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the registry contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the Aho-Corasick automaton built from pattern keywords, if
    /// any keywords were registered.
    #[must_use]
    pub(crate) fn keyword_automaton(&self) -> Option<&AhoCorasick> {
        self.keyword_automaton.as_ref()
    }

    /// Maps each keyword index to the pattern indices that declared it.
    #[must_use]
    pub(crate) fn keyword_to_patterns(&self) -> &[Vec<usize>] {
        &self.keyword_to_patterns
    }

    /// Returns indices of patterns that have no keywords and must be
    /// tested against all content unconditionally.
    #[must_use]
    pub(crate) fn patterns_without_keywords(&self) -> &[usize] {
        &self.patterns_without_keywords
    }
}

struct KeywordIndex {
    keywords: Vec<String>,
    keyword_to_patterns: Vec<Vec<usize>>,
    patterns_without_keywords: Vec<usize>,
}

fn build_keyword_index(patterns: &[Pattern]) -> KeywordIndex {
    let mut keywords = Vec::new();
    let mut keyword_to_patterns: Vec<Vec<usize>> = Vec::new();
    let mut patterns_without_keywords = Vec::new();
    let mut keyword_positions: HashMap<String, usize> = HashMap::new();

    for (pattern_idx, pattern) in patterns.iter().enumerate() {
        if pattern.keywords.is_empty() {
            patterns_without_keywords.push(pattern_idx);
            continue;
        }

        for keyword in &pattern.keywords {
            let keyword_str = keyword.to_string();

            if let Some(&existing_idx) = keyword_positions.get(&keyword_str) {
                keyword_to_patterns[existing_idx].push(pattern_idx);
            } else {
                let new_idx = keywords.len();
                keyword_positions.insert(keyword_str.clone(), new_idx);
                keywords.push(keyword_str);
                keyword_to_patterns.push(vec![pattern_idx]);
            }
        }
    }

    KeywordIndex {
        keywords,
        keyword_to_patterns,
        patterns_without_keywords,
    }
}

fn build_automaton(keywords: &[String]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }

    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(aho_corasick::MatchKind::LeftmostLongest)
        .build(keywords)
        .ok()
}
