//! Contentful token patterns.

crate::declare_provider!(
    ContentfulProvider,
    id: "cms/contentful",
    name: "Contentful",
    group: Group::Cms,
    patterns: [
        crate::pattern! {
            id: "contentful",
            group: Group::Cms,
            name: "Contentful Access Token",
            regex: r"[a-zA-Z0-9_-]{43}",
            keywords: &[],
            context: r"(?i)contentful",
            dashboard_url: "https://app.contentful.com/",
            tags: &["env-var", "contentful", "cms"],
        },
    ],
);
