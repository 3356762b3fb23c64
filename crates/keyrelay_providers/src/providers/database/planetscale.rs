//! PlanetScale credential patterns.

crate::declare_provider!(
    PlanetScaleProvider,
    id: "database/planetscale",
    name: "PlanetScale",
    group: Group::Database,
    patterns: [
        crate::pattern! {
            id: "planetscale",
            group: Group::Database,
            name: "PlanetScale Password",
            regex: r"pscale_pw_[a-zA-Z0-9_-]{43}",
            keywords: &["pscale_pw_"],
            dashboard_url: "https://app.planetscale.com/",
            tags: &["env-var", "planetscale", "database"],
        },
    ],
);
