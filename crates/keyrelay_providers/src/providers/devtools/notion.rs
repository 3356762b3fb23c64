//! Notion token patterns.

crate::declare_provider!(
    NotionProvider,
    id: "devtools/notion",
    name: "Notion",
    group: Group::Devtools,
    patterns: [
        crate::pattern! {
            id: "notion",
            group: Group::Devtools,
            name: "Notion Integration Token",
            regex: r"secret_[a-zA-Z0-9]{43}|ntn_[a-zA-Z0-9]{43,}",
            keywords: &["secret_", "ntn_"],
            dashboard_url: "https://www.notion.so/my-integrations",
            tags: &["env-var", "notion", "productivity"],
        },
    ],
);
