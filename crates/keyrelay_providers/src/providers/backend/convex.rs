//! Convex deploy key patterns.

crate::declare_provider!(
    ConvexProvider,
    id: "backend/convex",
    name: "Convex",
    group: Group::Backend,
    patterns: [
        crate::pattern! {
            id: "convex",
            group: Group::Backend,
            name: "Convex Deploy Key",
            regex: r"prod:[a-zA-Z0-9_-]{32,}|dev:[a-zA-Z0-9_-]{32,}",
            keywords: &["prod:", "dev:"],
            dashboard_url: "https://dashboard.convex.dev/",
            tags: &["env-var", "convex", "backend"],
        },
    ],
);
