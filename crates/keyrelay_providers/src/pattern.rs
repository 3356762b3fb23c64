//! Pattern definition types for API key detection.

use std::fmt;

/// Logical grouping of patterns by service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// AI and machine-learning service API keys.
    Ai,
    /// Product analytics write keys and tokens.
    Analytics,
    /// Authentication platform keys.
    Auth,
    /// Backend-as-a-service deploy keys and credentials.
    Backend,
    /// Cloud provider API keys and tokens.
    Cloud,
    /// Headless CMS access tokens.
    Cms,
    /// Database connection strings and credentials.
    Database,
    /// Developer productivity tool keys.
    Devtools,
    /// E-commerce platform API tokens.
    Ecommerce,
    /// Email delivery service API keys.
    Email,
    /// Deployment and hosting platform tokens.
    Hosting,
    /// Mapping and geolocation API keys.
    Maps,
    /// Media upload and storage credentials.
    Media,
    /// Messaging and communication platform tokens.
    Messaging,
    /// Error tracking and monitoring credentials.
    Monitoring,
    /// Payment processor API keys.
    Payments,
    /// Hosted search service keys.
    Search,
    /// Version control system tokens.
    Vcs,
}

impl Group {
    /// Returns the human-readable display name for this group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ai => "AI Services",
            Self::Analytics => "Analytics",
            Self::Auth => "Auth Providers",
            Self::Backend => "Backend Platforms",
            Self::Cloud => "Cloud Providers",
            Self::Cms => "Content Management",
            Self::Database => "Databases",
            Self::Devtools => "Developer Tools",
            Self::Ecommerce => "E-commerce",
            Self::Email => "Email Services",
            Self::Hosting => "Hosting Platforms",
            Self::Maps => "Maps & Location",
            Self::Media => "Media & Storage",
            Self::Messaging => "Messaging & Communication",
            Self::Monitoring => "Monitoring",
            Self::Payments => "Payment Processors",
            Self::Search => "Search Services",
            Self::Vcs => "Version Control",
        }
    }

    /// Returns the lowercase string identifier used in provider IDs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Analytics => "analytics",
            Self::Auth => "auth",
            Self::Backend => "backend",
            Self::Cloud => "cloud",
            Self::Cms => "cms",
            Self::Database => "database",
            Self::Devtools => "devtools",
            Self::Ecommerce => "ecommerce",
            Self::Email => "email",
            Self::Hosting => "hosting",
            Self::Maps => "maps",
            Self::Media => "media",
            Self::Messaging => "messaging",
            Self::Monitoring => "monitoring",
            Self::Payments => "payments",
            Self::Search => "search",
            Self::Vcs => "vcs",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single pattern definition for detecting a specific type of API key.
#[derive(Debug, Clone)]
pub struct PatternDef {
    /// Unique identifier reported as the detection's provider (e.g. `"openai"`).
    pub id: &'static str,
    /// The category this pattern belongs to.
    pub group: Group,
    /// Short human-readable name (e.g. `"OpenAI API Key"`).
    pub name: &'static str,
    /// The regular expression used to match this key.
    pub regex: &'static str,
    /// Keywords for Aho-Corasick pre-filtering. Patterns with no keywords
    /// are always evaluated.
    pub keywords: &'static [&'static str],
    /// Context gate for low-entropy patterns. When `Some`, the pattern is
    /// only evaluated if the supplied context string (typically a page URL)
    /// matches this regex. Gated entries never match without context.
    pub context: Option<&'static str>,
    /// Where the key can be revoked or rotated.
    pub dashboard_url: &'static str,
    /// Tags attached to detections and stored items.
    pub tags: &'static [&'static str],
}

/// Creates a `PatternDef`, with the context gate defaulting to `None`.
#[macro_export]
macro_rules! pattern {
    (
        id: $id:expr,
        group: $group:expr,
        name: $name:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        dashboard_url: $url:expr,
        tags: $tags:expr $(,)?
    ) => {
        $crate::PatternDef {
            id: $id,
            group: $group,
            name: $name,
            regex: $regex,
            keywords: $keywords,
            context: None,
            dashboard_url: $url,
            tags: $tags,
        }
    };
    (
        id: $id:expr,
        group: $group:expr,
        name: $name:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        context: $context:expr,
        dashboard_url: $url:expr,
        tags: $tags:expr $(,)?
    ) => {
        $crate::PatternDef {
            id: $id,
            group: $group,
            name: $name,
            regex: $regex,
            keywords: $keywords,
            context: Some($context),
            dashboard_url: $url,
            tags: $tags,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_as_str_is_lowercase() {
        assert_eq!(Group::Vcs.as_str(), "vcs");
        assert_eq!(Group::Payments.as_str(), "payments");
    }

    #[test]
    fn group_name_is_human_readable() {
        assert_eq!(Group::Vcs.name(), "Version Control");
        assert_eq!(Group::Ai.name(), "AI Services");
    }

    #[test]
    fn pattern_macro_defaults_context_to_none() {
        let def = pattern! {
            id: "example",
            group: Group::Ai,
            name: "Example Key",
            regex: "ex_[a-z]{8}",
            keywords: &["ex_"],
            dashboard_url: "https://example.com",
            tags: &["env-var"],
        };
        assert!(def.context.is_none());
    }
}
