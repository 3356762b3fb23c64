//! Turso token patterns.

crate::declare_provider!(
    TursoProvider,
    id: "database/turso",
    name: "Turso",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "turso",
            group: Group::Database,
            name: "Turso Auth Token",
            regex: r"[a-zA-Z0-9_-]{100,}",
            keywords: &[],
            context: r"(?i)turso",
            dashboard_url: "https://turso.tech/app",
            tags: &["env-var", "turso", "database"],
        },
    ],
);
