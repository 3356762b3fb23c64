//! npm token patterns.

crate::declare_provider!(
    NpmProvider,
    id: "devtools/npm",
    name: "npm",
    group: Group::Devtools,
    patterns: [
        crate::pattern! {
            id: "npm",
            group: Group::Devtools,
            name: "NPM Access Token",
            regex: r"npm_[a-zA-Z0-9]{36}",
            keywords: &["npm_"],
            dashboard_url: "https://www.npmjs.com/settings/~/tokens",
            tags: &["env-var", "npm", "registry"],
        },
    ],
);
