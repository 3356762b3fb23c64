//! Replicate key patterns.

crate::declare_provider!(
    ReplicateProvider,
    id: "ai/replicate",
    name: "Replicate",
    group: Group::Ai,
    patterns: [
        crate::pattern! {
            id: "replicate",
            group: Group::Ai,
            name: "Replicate API Token",
            regex: r"r8_[a-zA-Z0-9]{37}",
            keywords: &["r8_"],
            dashboard_url: "https://replicate.com/account/api-tokens",
            tags: &["env-var", "replicate", "ai"],
        },
    ],
);
