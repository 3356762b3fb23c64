//! Sanity token patterns.

crate::declare_provider!(
    SanityProvider,
    id: "cms/sanity",
    name: "Sanity",
    group: Group::Cms,
    patterns: [
        crate::pattern! {
            id: "sanity",
            group: Group::Cms,
            name: "Sanity API Token",
            regex: r"sk[a-zA-Z0-9]{100,}",
            keywords: &[],
            dashboard_url: "https://www.sanity.io/manage",
            tags: &["env-var", "sanity", "cms"],
        },
    ],
);
