//! Railway token patterns.

crate::declare_provider!(
    RailwayProvider,
    id: "hosting/railway",
    name: "Railway",
    group: Group::Hosting,
    patterns: [
        // UUID-shaped tokens, indistinguishable without page context.
        crate::pattern! {
            id: "railway",
            group: Group::Hosting,
            name: "Railway API Token",
            regex: r"[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}",
            keywords: &[],
            context: r"(?i)railway",
            dashboard_url: "https://railway.app/account/tokens",
            tags: &["env-var", "railway", "hosting"],
        },
    ],
);
