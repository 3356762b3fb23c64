//! Mapbox token patterns.

crate::declare_provider!(
    MapboxProvider,
    id: "maps/mapbox",
    name: "Mapbox",
    group: Group::Maps,
    patterns: [
        crate::pattern! {
            id: "mapbox",
            group: Group::Maps,
            name: "Mapbox Access Token",
            regex: r"pk\.[a-zA-Z0-9_-]+\.[a-zA-Z0-9_-]+|sk\.[a-zA-Z0-9_-]+\.[a-zA-Z0-9_-]+",
            keywords: &["pk.", "sk."],
            dashboard_url: "https://account.mapbox.com/access-tokens/",
            tags: &["env-var", "mapbox", "maps"],
        },
    ],
);
