//! Cohere key patterns.

crate::declare_provider!(
    CohereProvider,
    id: "ai/cohere",
    name: "Cohere",
    group: Group::Ai,
    patterns: [
        // Plain 40-char keys, only meaningful on Cohere pages.
        crate::pattern! {
            id: "cohere",
            group: Group::Ai,
            name: "Cohere API Key",
            regex: r"[a-zA-Z0-9]{40}",
            keywords: &[],
            context: r"(?i)cohere",
            dashboard_url: "https://dashboard.cohere.com/api-keys",
            tags: &["env-var", "cohere", "ai"],
        },
    ],
);
