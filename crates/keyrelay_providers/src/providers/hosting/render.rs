//! Render key patterns.

crate::declare_provider!(
    RenderProvider,
    id: "hosting/render",
    name: "Render",
    group: Group::Hosting,
    patterns: [
        crate::pattern! {
            id: "render",
            group: Group::Hosting,
            name: "Render API Key",
            regex: r"rnd_[a-zA-Z0-9]{32}",
            keywords: &["rnd_"],
            dashboard_url: "https://dashboard.render.com/u/settings#api-keys",
            tags: &["env-var", "render", "hosting"],
        },
    ],
);
