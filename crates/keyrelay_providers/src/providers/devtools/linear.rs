//! Linear key patterns.

crate::declare_provider!(
    LinearProvider,
    id: "devtools/linear",
    name: "Linear",
    group: Group::Devtools,
    patterns: [
        crate::pattern! {
            id: "linear",
            group: Group::Devtools,
            name: "Linear API Key",
            regex: r"lin_api_[a-zA-Z0-9]{40}",
            keywords: &["lin_api_"],
            dashboard_url: "https://linear.app/settings/api",
            tags: &["env-var", "linear", "productivity"],
        },
    ],
);
