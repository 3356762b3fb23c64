//! Airtable key patterns.

crate::declare_provider!(
    AirtableProvider,
    id: "devtools/airtable",
    name: "Airtable",
    group: Group::Devtools,
    patterns: [
        crate::pattern! {
            id: "airtable",
            group: Group::Devtools,
            name: "Airtable API Key",
            regex: r"key[a-zA-Z0-9]{14}|pat[a-zA-Z0-9]{14}\.[a-f0-9]{64}",
            keywords: &[],
            dashboard_url: "https://airtable.com/account",
            tags: &["env-var", "airtable", "productivity"],
        },
    ],
);
