//! DigitalOcean token patterns.

crate::declare_provider!(
    DigitalOceanProvider,
    id: "cloud/digitalocean",
    name: "DigitalOcean",
    group: Group::Cloud,
    patterns: [
        crate::pattern! {
            id: "digitalocean",
            group: Group::Cloud,
            name: "DigitalOcean Token",
            regex: r"dop_v1_[a-f0-9]{64}",
            keywords: &["dop_v1_"],
            dashboard_url: "https://cloud.digitalocean.com/account/api/tokens",
            tags: &["env-var", "digitalocean", "cloud"],
        },
    ],
);
