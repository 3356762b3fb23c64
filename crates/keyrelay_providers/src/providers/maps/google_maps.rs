//! Google Maps key patterns.

crate::declare_provider!(
    GoogleMapsProvider,
    id: "maps/google",
    name: "Google Maps",
    group: Group::Maps,
    patterns: [
        crate::pattern! {
            id: "google-maps",
            group: Group::Maps,
            name: "Google Maps API Key",
            regex: r"AIza[a-zA-Z0-9_-]{35}",
            keywords: &["AIza"],
            dashboard_url: "https://console.cloud.google.com/apis/credentials",
            tags: &["env-var", "google", "maps"],
        },
    ],
);
