//! Meilisearch key patterns.

crate::declare_provider!(
    MeilisearchProvider,
    id: "search/meilisearch",
    name: "Meilisearch",
    group: Group::Search,
    patterns: [
        crate::pattern! {
            id: "meilisearch",
            group: Group::Search,
            name: "Meilisearch API Key",
            regex: r"[a-f0-9]{40,}",
            keywords: &[],
            context: r"(?i)meilisearch",
            dashboard_url: "https://cloud.meilisearch.com/",
            tags: &["env-var", "meilisearch", "search"],
        },
    ],
);
