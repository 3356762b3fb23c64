//! Fly.io token patterns.

crate::declare_provider!(
    FlyioProvider,
    id: "hosting/fly",
    name: "Fly.io",
    group: Group::Hosting,
    patterns: [
        crate::pattern! {
            id: "fly",
            group: Group::Hosting,
            name: "Fly.io API Token",
            regex: r"fo1_[a-zA-Z0-9_-]{43}",
            keywords: &["fo1_"],
            dashboard_url: "https://fly.io/user/personal_access_tokens",
            tags: &["env-var", "fly", "hosting"],
        },
    ],
);
