//! Algolia key patterns.

crate::declare_provider!(
    AlgoliaProvider,
    id: "search/algolia",
    name: "Algolia",
    group: Group::Search,
    patterns: [
        crate::pattern! {
            id: "algolia-app",
            group: Group::Search,
            name: "Algolia App ID",
            regex: r"[A-Z0-9]{10}",
            keywords: &[],
            context: r"(?i)algolia",
            dashboard_url: "https://dashboard.algolia.com/account/api-keys",
            tags: &["env-var", "algolia", "search"],
        },
        crate::pattern! {
            id: "algolia-admin",
            group: Group::Search,
            name: "Algolia Admin API Key",
            regex: r"[a-f0-9]{32}",
            keywords: &[],
            context: r"(?i)algolia",
            dashboard_url: "https://dashboard.algolia.com/account/api-keys",
            tags: &["env-var", "algolia", "search"],
        },
    ],
);
