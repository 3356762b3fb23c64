//! Clerk key patterns.

crate::declare_provider!(
    ClerkProvider,
    id: "auth/clerk",
    name: "Clerk",
    group: Group::Auth,
    patterns: [
        crate::pattern! {
            id: "clerk-publishable",
            group: Group::Auth,
            name: "Clerk Publishable Key",
            regex: r"pk_(?:test|live)_[a-zA-Z0-9]{40,}",
            keywords: &["pk_test_", "pk_live_"],
            dashboard_url: "https://dashboard.clerk.com/",
            tags: &["env-var", "clerk", "auth"],
        },
        crate::pattern! {
            id: "clerk-secret",
            group: Group::Auth,
            name: "Clerk Secret Key",
            regex: r"sk_(?:test|live)_[a-zA-Z0-9]{40,}",
            keywords: &["sk_test_", "sk_live_"],
            dashboard_url: "https://dashboard.clerk.com/",
            tags: &["env-var", "clerk", "auth"],
        },
    ],
);
