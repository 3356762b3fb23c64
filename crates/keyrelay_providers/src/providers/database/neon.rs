//! Neon key patterns.

crate::declare_provider!(
    NeonProvider,
    id: "database/neon",
    name: "Neon",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "neon",
            group: Group::Database,
            name: "Neon API Key",
            regex: r"neon_[a-zA-Z0-9_-]{32,}",
            keywords: &["neon_"],
            dashboard_url: "https://console.neon.tech/app/settings/api-keys",
            tags: &["env-var", "neon", "database"],
        },
    ],
);
